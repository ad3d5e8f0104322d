//! # bp-core
//!
//! Unit discovery and dependency-graph resolution for bagpipe.
//!
//! This crate provides:
//! - Closed-schema parsing of `pipe.yml` and `bag.yml` documents
//! - Discovery of unit directories and of the uppermost unit of a tree
//! - Reading whole unit trees in flat or grouped shape
//! - Linking declared dependencies and flattening them into a build order
//!
//! ## Modules
//!
//! - [`config`]: Document parsing, resolver options and errors
//! - [`discovery`]: Unit file detection and the uppermost search
//! - [`graph`]: Units, the linked graph and flattening
//! - [`resolver`]: Consumer-facing resolution entry points

pub mod config;
pub mod discovery;
pub mod graph;
pub mod resolver;

pub use config::{ResolveError, ResolveResult, ResolverOptions};
pub use graph::{Unit, UnitGraph, UnitId};
pub use resolver::{read_all_units, resolve_target};
