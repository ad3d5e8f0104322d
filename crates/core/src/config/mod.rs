//! Unit document parsing and resolution settings.
//!
//! This module provides the closed-schema parser for `pipe.yml`/`bag.yml`
//! documents, the options of a resolution pass, and the error type shared by
//! the whole engine.

pub mod document;
pub mod error;
pub mod options;

pub use document::{load_document, parse_document, UnitDocument};
pub use error::{ErrorKind, ResolveError, ResolveResult};
pub use options::{MissingDependencyPolicy, ResolverOptions, DEFAULT_MAX_ASCENT};
