//! Test fixtures for creating unit trees on disk.

use bp_protocol::UnitKind;
use std::path::PathBuf;
use tempfile::TempDir;

/// A tree of unit directories inside a temporary directory.
///
/// The temporary directory is removed when the tree is dropped.
pub struct UnitTree {
    dir: TempDir,
    kind: UnitKind,
}

impl UnitTree {
    pub fn new(kind: UnitKind) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        Self { dir, kind }
    }

    /// Writes a unit file with `yaml` content into `relative`, creating directories.
    pub fn add(&self, relative: &str, yaml: &str) -> PathBuf {
        let location = self.path(relative);
        std::fs::create_dir_all(&location).expect("Failed to create unit dir");
        std::fs::write(location.join(self.kind.file_name()), yaml)
            .expect("Failed to write unit file");
        location
    }

    /// Creates a plain directory without a unit file.
    pub fn add_plain_dir(&self, relative: &str) -> PathBuf {
        let location = self.path(relative);
        std::fs::create_dir_all(&location).expect("Failed to create dir");
        location
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }
}

/// Writes the sample monorepo used across tests.
///
/// ```text
/// complexproject/            (root)
/// ├── common/
/// ├── tasks/                 -> common
/// ├── microservices/
/// │   ├── first/             -> tasks, common
/// │   └── second/            -> first
/// ├── pipertaskexample/      -> second
/// └── docs/                  (no unit file)
///     └── ignored/
/// ```
pub fn create_complex_project(kind: UnitKind) -> UnitTree {
    let tree = UnitTree::new(kind);

    tree.add("complexproject", "python: \"3.11\"\n");
    tree.add(
        "complexproject/common",
        r#"
python: "3.11"
requirements:
  pyyaml: ">=6.0"
"#,
    );
    tree.add("complexproject/tasks", "dependencies:\n  - common\n");
    tree.add("complexproject/microservices", "");
    tree.add(
        "complexproject/microservices/first",
        "dependencies:\n  - tasks\n  - common\n",
    );
    tree.add(
        "complexproject/microservices/second",
        "dependencies:\n  - name: first\n",
    );
    tree.add("complexproject/pipertaskexample", "dependencies: [second]\n");
    tree.add_plain_dir("complexproject/docs");
    tree.add("complexproject/docs/ignored", "");

    tree
}

/// Names of the units `create_complex_project` resolves to, in discovery order.
pub const COMPLEX_PROJECT_UNITS: [&str; 7] = [
    "complexproject",
    "common",
    "microservices",
    "first",
    "second",
    "pipertaskexample",
    "tasks",
];
