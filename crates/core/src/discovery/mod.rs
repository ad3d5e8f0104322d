//! Locating unit files on disk.
//!
//! A directory is a unit directory when it directly contains the unit file of
//! the kind being resolved. Discovery never looks deeper than the immediate
//! children of a directory and never follows symbolic links while listing.

use crate::config::error::{ResolveError, ResolveResult};
use crate::config::options::ResolverOptions;
use bp_protocol::unit_models::UnitKind;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Whether `dir` directly contains the unit file for `kind`.
pub fn has_unit_file(dir: &Path, kind: UnitKind) -> bool {
    dir.join(kind.file_name()).is_file()
}

/// Derives a unit name from its directory: the last path component.
///
/// ```
/// use bp_core::discovery::unit_name;
/// use std::path::Path;
///
/// assert_eq!(unit_name(Path::new("/repo/tasks/")).unwrap(), "tasks");
/// ```
pub fn unit_name(location: &Path) -> ResolveResult<String> {
    location
        .file_name()
        .and_then(std::ffi::OsStr::to_str)
        .map(str::to_string)
        .ok_or_else(|| ResolveError::InvalidLocation(location.to_path_buf()))
}

/// Returns the absolute, symlink-free form of `path`.
pub fn normalize(path: &Path) -> ResolveResult<PathBuf> {
    std::fs::canonicalize(path).map_err(|source| ResolveError::Canonicalize {
        path: path.to_path_buf(),
        source,
    })
}

/// Immediate child directories of `dir` that contain a unit file, sorted by name.
pub fn child_unit_dirs(dir: &Path, kind: UnitKind) -> ResolveResult<Vec<PathBuf>> {
    let mut children = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| ResolveError::DirectoryWalk {
            path: dir.to_path_buf(),
            source,
        })?;

        if entry.file_type().is_dir() && has_unit_file(entry.path(), kind) {
            children.push(entry.into_path());
        }
    }

    Ok(children)
}

/// Finds the highest ancestor of `start` that still contains a unit file.
///
/// The climb stops at the first parent without a unit file, at the
/// filesystem root, or fails once `options.max_ascent` levels are exceeded.
///
/// # Errors
///
/// - `Canonicalize` if `start` does not exist
/// - `NoUnitFile` if `start` itself holds no unit file
/// - `AscentLimit` if the climb exceeds `options.max_ascent`
pub fn find_uppermost(start: &Path, options: &ResolverOptions) -> ResolveResult<PathBuf> {
    let kind = options.kind;
    let start = normalize(start)?;

    if !has_unit_file(&start, kind) {
        return Err(ResolveError::NoUnitFile {
            path: start,
            file_name: kind.file_name(),
        });
    }

    let mut uppermost = start.clone();
    let mut climbed = 0;

    while let Some(parent) = uppermost.parent() {
        if !has_unit_file(parent, kind) {
            break;
        }

        climbed += 1;
        if climbed > options.max_ascent {
            return Err(ResolveError::AscentLimit {
                start,
                limit: options.max_ascent,
            });
        }

        uppermost = parent.to_path_buf();
    }

    debug!(start = %start.display(), uppermost = %uppermost.display(), climbed, "Found uppermost {kind}");
    Ok(uppermost)
}
