//! Options controlling a resolution pass.

use bp_protocol::unit_models::UnitKind;

/// Default bound on how many parent directories the uppermost search climbs.
pub const DEFAULT_MAX_ASCENT: usize = 256;

/// What to do with a declared dependency that names no unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingDependencyPolicy {
    /// Leave the dependency unresolved and log a warning.
    #[default]
    Ignore,

    /// Abort the pass with `MissingDependency`.
    Error,
}

/// Explicit configuration of one resolution pass.
///
/// # Example
///
/// ```
/// use bp_core::config::{MissingDependencyPolicy, ResolverOptions};
/// use bp_protocol::UnitKind;
///
/// let options = ResolverOptions::new(UnitKind::Bag)
///     .with_missing_dependencies(MissingDependencyPolicy::Error);
/// assert_eq!(options.kind.file_name(), "bag.yml");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Kind of unit to look for.
    pub kind: UnitKind,

    /// Handling of declared dependencies without a matching unit.
    pub missing_dependencies: MissingDependencyPolicy,

    /// Maximum number of parent directories climbed looking for the uppermost unit.
    pub max_ascent: usize,
}

impl ResolverOptions {
    pub fn new(kind: UnitKind) -> Self {
        Self {
            kind,
            missing_dependencies: MissingDependencyPolicy::default(),
            max_ascent: DEFAULT_MAX_ASCENT,
        }
    }

    pub fn with_missing_dependencies(mut self, policy: MissingDependencyPolicy) -> Self {
        self.missing_dependencies = policy;
        self
    }

    pub fn with_max_ascent(mut self, max_ascent: usize) -> Self {
        self.max_ascent = max_ascent;
        self
    }
}
