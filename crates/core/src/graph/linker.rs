//! Wiring declared dependency names to units.

use crate::config::error::{ResolveError, ResolveResult};
use crate::config::options::MissingDependencyPolicy;
use crate::graph::unit::{Unit, UnitId};
use std::collections::HashMap;
use tracing::{debug, warn};

/// One declared dependency of a unit and what it resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// The declared name.
    pub name: String,

    /// The matching unit, once linked.
    pub target: Option<UnitId>,
}

impl Link {
    pub fn unresolved(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.target.is_some()
    }
}

/// Builds the name index of a pass, rejecting duplicate names.
pub fn index_units(units: &[Unit]) -> ResolveResult<HashMap<String, UnitId>> {
    let mut index: HashMap<String, UnitId> = HashMap::with_capacity(units.len());

    for (position, unit) in units.iter().enumerate() {
        if let Some(first) = index.insert(unit.name().to_string(), UnitId(position)) {
            return Err(ResolveError::DuplicateUnit {
                name: unit.name().to_string(),
                first: units[first.0].location().to_path_buf(),
                second: unit.location().to_path_buf(),
            });
        }
    }

    Ok(index)
}

/// Placeholder links for every declared dependency, all unresolved.
pub fn unlinked(units: &[Unit]) -> Vec<Vec<Link>> {
    units
        .iter()
        .map(|unit| unit.dependencies().iter().map(Link::unresolved).collect())
        .collect()
}

/// Resolves every placeholder against `index`.
///
/// Unmatched names stay unresolved under [`MissingDependencyPolicy::Ignore`]
/// and abort the pass under [`MissingDependencyPolicy::Error`].
pub fn link_units(
    units: &[Unit],
    index: &HashMap<String, UnitId>,
    links: &mut [Vec<Link>],
    policy: MissingDependencyPolicy,
) -> ResolveResult<()> {
    for (unit, unit_links) in units.iter().zip(links.iter_mut()) {
        for link in unit_links.iter_mut() {
            link.target = index.get(&link.name).copied();

            match (link.target, policy) {
                (Some(target), _) => {
                    debug!(unit = unit.name(), dependency = %link.name, %target, "Linked dependency");
                }
                (None, MissingDependencyPolicy::Ignore) => {
                    warn!(unit = unit.name(), dependency = %link.name, "Dependency does not match any unit");
                }
                (None, MissingDependencyPolicy::Error) => {
                    return Err(ResolveError::MissingDependency {
                        unit: unit.name().to_string(),
                        dependency: link.name.clone(),
                    });
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::document::UnitDocument;
    use bp_protocol::unit_models::UnitKind;
    use std::path::PathBuf;

    fn unit(location: &str, dependencies: &[&str]) -> Unit {
        let document = UnitDocument {
            dependencies: dependencies.iter().map(|d| d.to_string()).collect(),
            ..UnitDocument::default()
        };
        Unit::new(PathBuf::from(location), UnitKind::Pipe, document, false).unwrap()
    }

    #[test]
    fn test_links_follow_names() {
        let units = vec![
            unit("/repo/a", &["b"]),
            unit("/repo/b", &[]),
            unit("/repo/c", &["a"]),
        ];
        let index = index_units(&units).unwrap();
        let mut links = unlinked(&units);
        assert!(links.iter().flatten().all(|link| !link.is_resolved()));

        link_units(&units, &index, &mut links, MissingDependencyPolicy::Ignore).unwrap();

        assert_eq!(links[0], vec![Link { name: "b".to_string(), target: Some(UnitId(1)) }]);
        assert!(links[1].is_empty());
        assert_eq!(links[2], vec![Link { name: "a".to_string(), target: Some(UnitId(0)) }]);
    }

    #[test]
    fn test_missing_dependency_policies() {
        let units = vec![unit("/repo/a", &["ghost"])];
        let index = index_units(&units).unwrap();

        let mut links = unlinked(&units);
        link_units(&units, &index, &mut links, MissingDependencyPolicy::Ignore).unwrap();
        assert_eq!(links[0], vec![Link::unresolved("ghost")]);

        let mut links = unlinked(&units);
        let err = link_units(&units, &index, &mut links, MissingDependencyPolicy::Error).unwrap_err();
        assert!(matches!(
            err,
            ResolveError::MissingDependency { ref unit, ref dependency } if unit == "a" && dependency == "ghost"
        ));
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let units = vec![unit("/repo/x/common", &[]), unit("/repo/y/common", &[])];

        let err = index_units(&units).unwrap_err();
        match err {
            ResolveError::DuplicateUnit { name, first, second } => {
                assert_eq!(name, "common");
                assert_eq!(first, PathBuf::from("/repo/x/common"));
                assert_eq!(second, PathBuf::from("/repo/y/common"));
            }
            other => panic!("Expected DuplicateUnit, got {other:?}"),
        }
    }
}
