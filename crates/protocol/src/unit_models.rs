//! Unit kind models for `pipe.yml` and `bag.yml` documents.
//!
//! A unit kind fixes the file name that marks a unit directory, the closed
//! set of top-level keys a document of that kind may contain, and the shape
//! in which a tree of such units is read.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kinds of configuration units a monorepo can be organised in.
///
/// # Example
///
/// ```
/// use bp_protocol::unit_models::UnitKind;
///
/// assert_eq!(UnitKind::Pipe.file_name(), "pipe.yml");
/// assert_eq!("bag".parse::<UnitKind>().unwrap(), UnitKind::Bag);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    /// A pipe, described by a `pipe.yml` file.
    Pipe,

    /// A bag, described by a `bag.yml` file.
    Bag,
}

impl UnitKind {
    /// Every supported kind.
    pub const ALL: [UnitKind; 2] = [UnitKind::Pipe, UnitKind::Bag];

    /// File name that marks a directory as a unit of this kind.
    pub fn file_name(self) -> &'static str {
        match self {
            UnitKind::Pipe => "pipe.yml",
            UnitKind::Bag => "bag.yml",
        }
    }

    /// Top-level document keys accepted for this kind.
    pub fn recognized_keys(self) -> &'static [DocumentKey] {
        match self {
            UnitKind::Pipe => &[
                DocumentKey::Python,
                DocumentKey::Dependencies,
                DocumentKey::Requirements,
            ],
            UnitKind::Bag => &[
                DocumentKey::Python,
                DocumentKey::Dependencies,
                DocumentKey::Requirements,
                DocumentKey::Metadata,
            ],
        }
    }

    /// Shape in which a tree of units of this kind is read.
    pub fn tree_shape(self) -> TreeShape {
        match self {
            UnitKind::Pipe => TreeShape::Flat,
            UnitKind::Bag => TreeShape::Grouped,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UnitKind::Pipe => "pipe",
            UnitKind::Bag => "bag",
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown unit kind name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownUnitKind(pub String);

impl fmt::Display for UnknownUnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown unit kind '{}' (expected 'pipe' or 'bag')", self.0)
    }
}

impl std::error::Error for UnknownUnitKind {}

impl FromStr for UnitKind {
    type Err = UnknownUnitKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pipe" => Ok(UnitKind::Pipe),
            "bag" => Ok(UnitKind::Bag),
            other => Err(UnknownUnitKind(other.to_string())),
        }
    }
}

/// How a directory tree of units is represented once read.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TreeShape {
    /// The top unit is kept apart as "main" and every descendant is
    /// collected into one discovery-ordered list.
    Flat,

    /// Every unit records the members of its own subtree (itself included)
    /// and all units share the uppermost directory as root context.
    Grouped,
}

/// A recognized top-level key of a unit document.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKey {
    /// Interpreter reference, e.g. `python: "3.11"`.
    Python,

    /// Sequence of dependency names.
    Dependencies,

    /// Mapping of requirement name to constraint.
    Requirements,

    /// Free-form mapping carried along for downstream tools.
    Metadata,
}

impl DocumentKey {
    pub fn as_str(self) -> &'static str {
        match self {
            DocumentKey::Python => "python",
            DocumentKey::Dependencies => "dependencies",
            DocumentKey::Requirements => "requirements",
            DocumentKey::Metadata => "metadata",
        }
    }
}

impl fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trips_through_str() {
        for kind in UnitKind::ALL {
            assert_eq!(kind.as_str().parse::<UnitKind>(), Ok(kind));
        }
        assert_eq!(
            "crate".parse::<UnitKind>(),
            Err(UnknownUnitKind("crate".to_string()))
        );
    }

    #[test]
    fn test_bag_accepts_metadata_but_pipe_does_not() {
        assert!(UnitKind::Bag.recognized_keys().contains(&DocumentKey::Metadata));
        assert!(!UnitKind::Pipe.recognized_keys().contains(&DocumentKey::Metadata));
    }

    #[test]
    fn test_tree_shapes() {
        assert_eq!(UnitKind::Pipe.tree_shape(), TreeShape::Flat);
        assert_eq!(UnitKind::Bag.tree_shape(), TreeShape::Grouped);
    }
}
