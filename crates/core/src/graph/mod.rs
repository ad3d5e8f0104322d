//! The resolved unit graph.
//!
//! Units live in an arena indexed by [`UnitId`] in discovery order. Declared
//! dependencies are kept in a separate adjacency table of [`Link`]s that is
//! filled in one linking phase after every unit of the pass has been read.

pub mod flatten;
pub mod linker;
pub mod reader;
pub mod unit;

pub use linker::Link;
pub use reader::{read_flat, read_grouped, read_tree, FlatTree};
pub use unit::{Unit, UnitId};

use crate::config::error::ResolveResult;
use crate::config::options::MissingDependencyPolicy;
use bp_protocol::summary_models::{BuildPlan, UnitSummary};
use bp_protocol::unit_models::UnitKind;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// All units of one resolution pass with their dependencies linked.
#[derive(Debug, Clone)]
pub struct UnitGraph {
    kind: UnitKind,
    root_dir: PathBuf,
    units: Vec<Unit>,
    index: HashMap<String, UnitId>,
    links: Vec<Vec<Link>>,
}

impl UnitGraph {
    /// Indexes and links `units`. The first unit must be the uppermost one.
    pub fn link(
        kind: UnitKind,
        root_dir: PathBuf,
        units: Vec<Unit>,
        policy: MissingDependencyPolicy,
    ) -> ResolveResult<Self> {
        let index = linker::index_units(&units)?;
        let mut links = linker::unlinked(&units);
        linker::link_units(&units, &index, &mut links, policy)?;

        Ok(Self {
            kind,
            root_dir,
            units,
            index,
            links,
        })
    }

    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    /// The uppermost directory of the tree.
    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Handle of the uppermost unit.
    pub fn root(&self) -> UnitId {
        UnitId(0)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Returns the unit behind `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was produced by another graph with more units.
    pub fn unit(&self, id: UnitId) -> &Unit {
        &self.units[id.0]
    }

    pub fn id_of(&self, name: &str) -> Option<UnitId> {
        self.index.get(name).copied()
    }

    pub fn get(&self, name: &str) -> Option<&Unit> {
        self.id_of(name).map(|id| self.unit(id))
    }

    /// Units in discovery order, the uppermost first.
    pub fn iter(&self) -> impl Iterator<Item = (UnitId, &Unit)> {
        self.units
            .iter()
            .enumerate()
            .map(|(position, unit)| (UnitId(position), unit))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.units.iter().map(Unit::name)
    }

    /// Declared dependencies of `id` with their resolution, in declaration order.
    pub fn links(&self, id: UnitId) -> &[Link] {
        &self.links[id.0]
    }

    /// Dependencies of `id` that matched a unit.
    pub fn resolved_dependencies(&self, id: UnitId) -> impl Iterator<Item = &Unit> {
        self.dependency_ids(id).map(move |target| self.unit(target))
    }

    /// Declared dependency names of `id` that matched no unit.
    pub fn unresolved_dependencies(&self, id: UnitId) -> impl Iterator<Item = &str> {
        self.links(id)
            .iter()
            .filter(|link| !link.is_resolved())
            .map(|link| link.name.as_str())
    }

    /// Units that declare a resolved dependency on `id`.
    pub fn dependents(&self, id: UnitId) -> impl Iterator<Item = &Unit> {
        self.links
            .iter()
            .enumerate()
            .filter(move |(_, links)| links.iter().any(|link| link.target == Some(id)))
            .map(move |(position, _)| &self.units[position])
    }

    pub(crate) fn dependency_ids(&self, id: UnitId) -> impl Iterator<Item = UnitId> + '_ {
        self.links(id).iter().filter_map(|link| link.target)
    }

    /// Transitive dependencies of `id`, deepest first, `id` excluded.
    ///
    /// See [`flatten::flatten`].
    pub fn flatten(&self, id: UnitId) -> ResolveResult<Vec<UnitId>> {
        flatten::flatten(self, id)
    }

    /// Like [`UnitGraph::flatten`], returning the units themselves.
    pub fn flatten_units(&self, id: UnitId) -> ResolveResult<Vec<&Unit>> {
        Ok(self
            .flatten(id)?
            .into_iter()
            .map(|dependency| self.unit(dependency))
            .collect())
    }

    /// The processing order for `id` as plain names.
    pub fn build_plan(&self, id: UnitId) -> ResolveResult<BuildPlan> {
        Ok(BuildPlan {
            target: self.unit(id).name().to_string(),
            dependencies: self
                .flatten_units(id)?
                .into_iter()
                .map(|unit| unit.name().to_string())
                .collect(),
        })
    }

    pub fn summary(&self, id: UnitId) -> UnitSummary {
        let unit = self.unit(id);

        UnitSummary {
            name: unit.name().to_string(),
            location: unit.location().to_path_buf(),
            kind: unit.kind(),
            python: unit.python().map(str::to_string),
            dependencies: unit.dependencies().to_vec(),
            resolved: self
                .resolved_dependencies(id)
                .map(|dependency| dependency.name().to_string())
                .collect(),
            unresolved: self.unresolved_dependencies(id).map(str::to_string).collect(),
            is_root: unit.is_root(),
            group: unit
                .group()
                .iter()
                .map(|&member| self.unit(member).name().to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::config::document::UnitDocument;

    /// Builds a linked graph from `(name, dependencies)` pairs, first is root.
    pub fn graph(spec: &[(&str, &[&str])]) -> UnitGraph {
        let units = spec
            .iter()
            .enumerate()
            .map(|(position, (name, dependencies))| {
                let document = UnitDocument {
                    dependencies: dependencies.iter().map(|d| d.to_string()).collect(),
                    ..UnitDocument::default()
                };
                Unit::new(
                    PathBuf::from("/repo").join(name),
                    UnitKind::Pipe,
                    document,
                    position == 0,
                )
                .expect("Failed to build unit")
            })
            .collect();

        UnitGraph::link(
            UnitKind::Pipe,
            PathBuf::from("/repo"),
            units,
            MissingDependencyPolicy::Ignore,
        )
        .expect("Failed to link graph")
    }
}
