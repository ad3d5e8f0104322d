//! Error types for unit resolution.
//!
//! Every error aborts the whole resolution pass. There is no partial result
//! and nothing is retried: the configuration is fixed and the pass re-run.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while discovering, reading, linking or flattening units.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// Failed to read a unit file from disk.
    #[error("Failed to read unit file at {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The unit file is not valid YAML.
    #[error("Failed to parse YAML file at {path}: {source}")]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// The top level of a unit file is not a mapping.
    #[error("Invalid unit file at {path}: expected a mapping at the top level")]
    NotAMapping { path: PathBuf },

    /// A recognized key holds a value of the wrong shape.
    #[error("Invalid value for '{key}' in {path}: {source}")]
    InvalidField {
        path: PathBuf,
        key: &'static str,
        source: serde_yaml::Error,
    },

    /// The unit file contains keys outside the recognized schema.
    #[error("Unknown configuration in {path}: {}", .keys.join(", "))]
    UnknownConfiguration { path: PathBuf, keys: Vec<String> },

    /// Failed to list a directory.
    #[error("Failed to traverse directory {path}: {source}")]
    DirectoryWalk {
        path: PathBuf,
        source: walkdir::Error,
    },

    /// Failed to normalize a path.
    #[error("Failed to resolve path {path}: {source}")]
    Canonicalize {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The starting directory holds no unit file.
    #[error("No {file_name} found in {path}")]
    NoUnitFile {
        path: PathBuf,
        file_name: &'static str,
    },

    /// A unit name cannot be derived from the path.
    #[error("Cannot derive a unit name from {0}")]
    InvalidLocation(PathBuf),

    /// The upward search for the uppermost unit exceeded its bound.
    #[error("Gave up looking for the uppermost unit above {start} after {limit} levels")]
    AscentLimit { start: PathBuf, limit: usize },

    /// Two directories in one pass derive the same unit name.
    #[error("Duplicate unit name '{name}': {first} and {second}")]
    DuplicateUnit {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// A declared dependency matches no unit and missing dependencies are errors.
    #[error("Unit '{unit}' depends on '{dependency}', which does not exist")]
    MissingDependency { unit: String, dependency: String },

    /// The requested target is not part of the resolved units.
    #[error("The specified unit \"{name}\" does not exist in {location}")]
    TargetNotFound { name: String, location: PathBuf },

    /// The dependency graph reachable from a unit contains a cycle.
    #[error("Dependency cycle detected: {}", .path.join(" -> "))]
    CycleDetected { path: Vec<String> },
}

/// Coarse classification of a [`ResolveError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Filesystem access failed.
    Io,
    /// A document is not valid YAML or has a malformed value.
    Parse,
    /// A document holds keys outside the closed schema.
    UnknownConfiguration,
    /// A directory, unit or dependency could not be found.
    NotFound,
    /// The requested target unit does not exist.
    TargetNotFound,
    /// The unit graph is inconsistent (duplicates, cycles).
    Graph,
}

impl ResolveError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ResolveError::FileRead { .. }
            | ResolveError::DirectoryWalk { .. }
            | ResolveError::Canonicalize { .. } => ErrorKind::Io,
            ResolveError::YamlParse { .. }
            | ResolveError::NotAMapping { .. }
            | ResolveError::InvalidField { .. } => ErrorKind::Parse,
            ResolveError::UnknownConfiguration { .. } => ErrorKind::UnknownConfiguration,
            ResolveError::NoUnitFile { .. }
            | ResolveError::InvalidLocation(_)
            | ResolveError::AscentLimit { .. }
            | ResolveError::MissingDependency { .. } => ErrorKind::NotFound,
            ResolveError::TargetNotFound { .. } => ErrorKind::TargetNotFound,
            ResolveError::DuplicateUnit { .. } | ResolveError::CycleDetected { .. } => {
                ErrorKind::Graph
            }
        }
    }
}

/// Type alias for Result with ResolveError.
pub type ResolveResult<T> = Result<T, ResolveError>;
