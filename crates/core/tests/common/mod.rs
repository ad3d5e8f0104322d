//! Common test utilities for resolution tests.
//!
//! This module provides shared functionality across integration tests:
//! - Unit trees written to temporary directories
//! - A sample monorepo layout

pub mod fixtures;

pub use fixtures::*;
