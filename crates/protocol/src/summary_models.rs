//! Serializable views of resolved units.
//!
//! These are what consumers print or hand to other tools once a resolution
//! pass has completed; they carry names rather than graph handles.

use crate::unit_models::UnitKind;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Summary of one resolved unit.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct UnitSummary {
    /// Unit name (the base name of its directory).
    pub name: String,

    /// Absolute directory of the unit.
    pub location: PathBuf,

    pub kind: UnitKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub python: Option<String>,

    /// Declared dependency names in declaration order.
    #[serde(default)]
    pub dependencies: Vec<String>,

    /// Declared names that matched a unit in the same pass.
    #[serde(default)]
    pub resolved: Vec<String>,

    /// Declared names with no matching unit.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unresolved: Vec<String>,

    /// Whether this is the uppermost unit of the pass.
    #[serde(default)]
    pub is_root: bool,

    /// Names of the units in this unit's subtree (grouped trees only).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub group: Vec<String>,
}

/// A flattened processing order for one target unit.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct BuildPlan {
    /// The unit the plan was computed for.
    pub target: String,

    /// Transitive dependencies, deepest first. The target is not included.
    pub dependencies: Vec<String>,
}

impl BuildPlan {
    /// Dependencies followed by the target itself.
    pub fn steps(&self) -> impl Iterator<Item = &str> {
        self.dependencies
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.target.as_str()))
    }
}
