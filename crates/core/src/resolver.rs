//! Entry points used by consumers of the engine.
//!
//! A resolution pass finds the uppermost unit above a starting directory,
//! reads the whole tree below it, and links every declared dependency.
//! Each call builds a fresh graph; nothing is cached between calls.

use crate::config::error::{ResolveError, ResolveResult};
use crate::config::options::ResolverOptions;
use crate::discovery::{find_uppermost, normalize, unit_name};
use crate::graph::{read_tree, UnitGraph, UnitId};
use std::path::Path;
use tracing::info;

/// Reads and links every unit of the tree `start` belongs to.
///
/// # Errors
///
/// Any discovery, parse or linking error aborts the pass.
///
/// # Example
///
/// ```rust,no_run
/// use bp_core::config::ResolverOptions;
/// use bp_core::resolver::read_all_units;
/// use bp_protocol::UnitKind;
/// use std::path::Path;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let graph = read_all_units(Path::new("."), &ResolverOptions::new(UnitKind::Pipe))?;
/// println!("Loaded {} pipes", graph.len());
/// # Ok(())
/// # }
/// ```
pub fn read_all_units(start: &Path, options: &ResolverOptions) -> ResolveResult<UnitGraph> {
    let uppermost = find_uppermost(start, options)?;
    let units = read_tree(&uppermost, options.kind)?;
    let graph = UnitGraph::link(options.kind, uppermost, units, options.missing_dependencies)?;

    info!(
        kind = %options.kind,
        root = %graph.root_dir().display(),
        units = graph.len(),
        "Resolved unit tree"
    );
    Ok(graph)
}

/// Resolves the tree of `start` and selects one unit as the target.
///
/// The target defaults to the unit named after `start`'s directory.
///
/// # Errors
///
/// Returns `TargetNotFound` if no unit of the tree carries the target name.
pub fn resolve_target(
    start: &Path,
    target: Option<&str>,
    options: &ResolverOptions,
) -> ResolveResult<(UnitId, UnitGraph)> {
    let name = match target {
        Some(name) => name.to_string(),
        None => unit_name(&normalize(start)?)?,
    };

    let graph = read_all_units(start, options)?;

    match graph.id_of(&name) {
        Some(id) => Ok((id, graph)),
        None => Err(ResolveError::TargetNotFound {
            name,
            location: start.to_path_buf(),
        }),
    }
}
