//! Parsing of unit documents against their closed schema.
//!
//! Recognized keys are taken out of the working mapping one by one; whatever
//! remains afterwards is unknown configuration and rejects the document.

use crate::config::error::{ResolveError, ResolveResult};
use bp_protocol::dependency_models::{DependencyEntry, Requirements};
use bp_protocol::unit_models::{DocumentKey, UnitKind};
use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};
use std::collections::HashSet;
use std::path::Path;
use tracing::warn;

/// The recognized content of one unit document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnitDocument {
    /// Interpreter reference.
    pub python: Option<String>,

    /// Declared dependency names, first occurrence wins.
    pub dependencies: Vec<String>,

    pub requirements: Requirements,

    /// Free-form metadata (bags only).
    pub metadata: Option<Mapping>,
}

/// Reads and parses the unit file at `path`.
pub fn load_document(path: &Path, kind: UnitKind) -> ResolveResult<UnitDocument> {
    let content = std::fs::read_to_string(path).map_err(|source| ResolveError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    parse_document(path, &content, kind)
}

/// Parses unit document text. `path` is only used for error reporting.
///
/// # Errors
///
/// - `YamlParse` if the text is not YAML
/// - `NotAMapping` if the top level is a scalar or sequence
/// - `InvalidField` if a recognized key holds a value of the wrong shape
/// - `UnknownConfiguration` if keys outside the kind's schema remain
pub fn parse_document(path: &Path, content: &str, kind: UnitKind) -> ResolveResult<UnitDocument> {
    let mut mapping = if content.trim().is_empty() {
        Mapping::new()
    } else {
        let value: Value =
            serde_yaml::from_str(content).map_err(|source| ResolveError::YamlParse {
                path: path.to_path_buf(),
                source,
            })?;

        match value {
            Value::Null => Mapping::new(),
            Value::Mapping(mapping) => mapping,
            _ => {
                return Err(ResolveError::NotAMapping {
                    path: path.to_path_buf(),
                })
            }
        }
    };

    let mut document = UnitDocument::default();

    for &key in kind.recognized_keys() {
        let Some(value) = mapping.remove(key.as_str()) else {
            continue;
        };

        match key {
            DocumentKey::Python => {
                // `python: 3.11` is read by YAML as a number; `3.10` comes back as `3.1`
                document.python = match value {
                    Value::Number(number) => {
                        warn!(
                            path = %path.display(),
                            "python version {number} is a YAML number, quote it to keep trailing zeros"
                        );
                        Some(number.to_string())
                    }
                    other => take_field::<Option<String>>(path, key, other)?,
                };
            }
            DocumentKey::Dependencies => {
                let entries =
                    take_field::<Option<Vec<DependencyEntry>>>(path, key, value)?.unwrap_or_default();
                document.dependencies = dedup_names(&entries);
            }
            DocumentKey::Requirements => {
                document.requirements =
                    take_field::<Option<Requirements>>(path, key, value)?.unwrap_or_default();
            }
            DocumentKey::Metadata => {
                document.metadata = take_field::<Option<Mapping>>(path, key, value)?;
            }
        }
    }

    if !mapping.is_empty() {
        let mut keys: Vec<String> = mapping.keys().map(key_to_string).collect();
        keys.sort();
        return Err(ResolveError::UnknownConfiguration {
            path: path.to_path_buf(),
            keys,
        });
    }

    Ok(document)
}

fn take_field<T: DeserializeOwned>(path: &Path, key: DocumentKey, value: Value) -> ResolveResult<T> {
    serde_yaml::from_value(value).map_err(|source| ResolveError::InvalidField {
        path: path.to_path_buf(),
        key: key.as_str(),
        source,
    })
}

// Repeated names collapse into their first occurrence.
fn dedup_names(entries: &[DependencyEntry]) -> Vec<String> {
    let mut seen = HashSet::new();
    entries
        .iter()
        .map(DependencyEntry::name)
        .filter(|name| seen.insert(*name))
        .map(str::to_string)
        .collect()
}

fn key_to_string(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| format!("{other:?}")),
    }
}
