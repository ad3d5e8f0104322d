//! Dependency and requirement models found inside unit documents.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// A single entry of a unit's `dependencies` list.
///
/// Entries may be written as bare names or as objects carrying a `name`
/// field; both forms refer to another unit by its directory name.
///
/// ```yaml
/// dependencies:
///   - common
///   - name: tasks
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum DependencyEntry {
    /// A bare unit name.
    Name(String),

    /// The object form.
    Detailed(DetailedDependency),
}

impl DependencyEntry {
    /// The referenced unit name, whatever the written form.
    pub fn name(&self) -> &str {
        match self {
            DependencyEntry::Name(name) => name,
            DependencyEntry::Detailed(detailed) => &detailed.name,
        }
    }
}

/// Object form of a dependency entry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DetailedDependency {
    pub name: String,
}

/// Constraint attached to a requirement.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum RequirementSpec {
    /// No constraint (`package: ~`).
    Any,

    /// A version specifier such as `">=1.2,<2"`. Bare numbers (`pandas: 1.5`)
    /// are kept as their text.
    Version(#[serde(deserialize_with = "version_text")] String),

    /// Structured specifier, e.g. `{ version: "1.2", extras: "s3" }`.
    Detailed(#[serde(deserialize_with = "detailed_text")] BTreeMap<String, String>),
}

// YAML reads `1.26` as a float, so trailing zeros (`1.10`) are lost.
#[derive(Deserialize)]
#[serde(untagged)]
enum ScalarText {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl From<ScalarText> for String {
    fn from(value: ScalarText) -> Self {
        match value {
            ScalarText::Text(text) => text,
            ScalarText::Integer(number) => number.to_string(),
            ScalarText::Float(number) if number.is_finite() && number.fract() == 0.0 => {
                format!("{number:.1}")
            }
            ScalarText::Float(number) => number.to_string(),
        }
    }
}

fn version_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    ScalarText::deserialize(deserializer).map(String::from)
}

fn detailed_text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<BTreeMap<String, String>, D::Error> {
    let fields = BTreeMap::<String, ScalarText>::deserialize(deserializer)?;
    Ok(fields
        .into_iter()
        .map(|(key, value)| (key, value.into()))
        .collect())
}

/// Requirements of a unit keyed by requirement name.
pub type Requirements = BTreeMap<String, RequirementSpec>;
