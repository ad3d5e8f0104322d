//! # bp-protocol
//!
//! Shared data models for bagpipe.
//!
//! This crate defines the structures used for:
//! - Describing unit kinds (`pipe.yml`, `bag.yml`) and their closed key sets
//! - Parsing dependency and requirement entries of unit documents
//! - Reporting resolved units and build plans to consumers
//!
//! ## Modules
//!
//! - [`unit_models`]: Unit kinds, tree shapes and document keys
//! - [`dependency_models`]: Dependency entries and requirement specifiers
//! - [`summary_models`]: Serializable summaries of resolved units
//!
//! ## Design Principles
//!
//! - Minimal dependencies: only serde
//! - No I/O: reading and resolving live in `bp-core`

pub mod dependency_models;
pub mod summary_models;
pub mod unit_models;

// Re-export all public types for convenience
pub use dependency_models::*;
pub use summary_models::*;
pub use unit_models::*;
