//! The unit entity: one parsed unit file and where it lives.

use crate::config::document::{load_document, UnitDocument};
use crate::config::error::ResolveResult;
use crate::discovery::unit_name;
use bp_protocol::dependency_models::Requirements;
use bp_protocol::unit_models::UnitKind;
use serde_yaml::Mapping;
use std::fmt;
use std::path::{Path, PathBuf};

/// Handle to a unit inside a [`UnitGraph`](crate::graph::UnitGraph).
///
/// Handles are only meaningful for the graph that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitId(pub(crate) usize);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One configuration unit.
///
/// The name is the base name of the unit's directory and is fixed at
/// construction. Dependencies are kept as declared names; the graph holds
/// what they resolve to.
#[derive(Debug, Clone)]
pub struct Unit {
    location: PathBuf,
    name: String,
    kind: UnitKind,
    document: UnitDocument,
    is_root: bool,
    group: Vec<UnitId>,
    root_context: Option<PathBuf>,
}

impl Unit {
    /// Builds a unit from an already parsed document.
    pub fn new(
        location: PathBuf,
        kind: UnitKind,
        document: UnitDocument,
        is_root: bool,
    ) -> ResolveResult<Self> {
        let name = unit_name(&location)?;

        Ok(Self {
            location,
            name,
            kind,
            document,
            is_root,
            group: Vec::new(),
            root_context: None,
        })
    }

    /// Reads the unit file inside `location`.
    pub fn read(location: &Path, kind: UnitKind, is_root: bool) -> ResolveResult<Self> {
        let document = load_document(&location.join(kind.file_name()), kind)?;
        Self::new(location.to_path_buf(), kind, document, is_root)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absolute directory containing the unit file.
    pub fn location(&self) -> &Path {
        &self.location
    }

    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    pub fn unit_file(&self) -> PathBuf {
        self.location.join(self.kind.file_name())
    }

    pub fn python(&self) -> Option<&str> {
        self.document.python.as_deref()
    }

    /// Declared dependency names in declaration order.
    pub fn dependencies(&self) -> &[String] {
        &self.document.dependencies
    }

    pub fn requirements(&self) -> &Requirements {
        &self.document.requirements
    }

    pub fn metadata(&self) -> Option<&Mapping> {
        self.document.metadata.as_ref()
    }

    /// Whether this unit sits in the uppermost directory of its tree.
    pub fn is_root(&self) -> bool {
        self.is_root
    }

    /// Units of this unit's subtree, itself first. Empty for flat trees.
    pub fn group(&self) -> &[UnitId] {
        &self.group
    }

    /// Uppermost directory of the tree. Only set for grouped trees.
    pub fn root_context(&self) -> Option<&Path> {
        self.root_context.as_deref()
    }

    /// Directory holding the unit's `setup.py`.
    pub fn package_dir(&self) -> PathBuf {
        self.location.join("package")
    }

    /// Where the unit's requirements file is written.
    pub fn requirements_file(&self) -> PathBuf {
        self.package_dir().join("requirements.txt")
    }

    pub(crate) fn set_group(&mut self, group: Vec<UnitId>) {
        self.group = group;
    }

    pub(crate) fn set_root_context(&mut self, root: &Path) {
        self.root_context = Some(root.to_path_buf());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_comes_from_directory() {
        let document = UnitDocument {
            dependencies: vec!["common".to_string()],
            ..UnitDocument::default()
        };

        let unit = Unit::new(PathBuf::from("/repo/tasks"), UnitKind::Pipe, document, false)
            .expect("Failed to build unit");

        assert_eq!(unit.name(), "tasks");
        assert_eq!(unit.dependencies(), ["common".to_string()]);
        assert_eq!(unit.unit_file(), PathBuf::from("/repo/tasks/pipe.yml"));
        assert_eq!(
            unit.requirements_file(),
            PathBuf::from("/repo/tasks/package/requirements.txt")
        );
        assert!(unit.group().is_empty());
        assert!(unit.root_context().is_none());
    }
}
