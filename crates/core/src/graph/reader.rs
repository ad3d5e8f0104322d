//! Reading every unit of a tree, starting at its uppermost directory.
//!
//! Both tree shapes visit directories depth-first in name order, so units
//! come out in the same discovery order; they differ in what they record.

use crate::config::error::ResolveResult;
use crate::discovery::child_unit_dirs;
use crate::graph::unit::{Unit, UnitId};
use bp_protocol::unit_models::{TreeShape, UnitKind};
use std::path::Path;
use tracing::debug;

/// A tree read in the flat shape.
#[derive(Debug)]
pub struct FlatTree {
    /// The unit in the uppermost directory.
    pub main: Unit,

    /// Every other unit, in discovery order.
    pub units: Vec<Unit>,
}

impl FlatTree {
    /// Main first, then the rest.
    pub fn into_units(self) -> Vec<Unit> {
        let mut units = Vec::with_capacity(self.units.len() + 1);
        units.push(self.main);
        units.extend(self.units);
        units
    }
}

/// Reads the tree rooted at `uppermost` in the shape of `kind`.
///
/// The uppermost unit is always first in the returned list.
pub fn read_tree(uppermost: &Path, kind: UnitKind) -> ResolveResult<Vec<Unit>> {
    match kind.tree_shape() {
        TreeShape::Flat => Ok(read_flat(uppermost, kind)?.into_units()),
        TreeShape::Grouped => read_grouped(uppermost, kind),
    }
}

/// Reads the main unit and flattens every nested unit into one list.
pub fn read_flat(uppermost: &Path, kind: UnitKind) -> ResolveResult<FlatTree> {
    let main = Unit::read(uppermost, kind, true)?;
    debug!(unit = main.name(), "Read main {kind}");

    let mut units = Vec::new();
    read_nested(uppermost, kind, &mut units)?;

    Ok(FlatTree { main, units })
}

fn read_nested(dir: &Path, kind: UnitKind, units: &mut Vec<Unit>) -> ResolveResult<()> {
    for child in child_unit_dirs(dir, kind)? {
        let unit = Unit::read(&child, kind, false)?;
        debug!(unit = unit.name(), "Read {kind}");
        units.push(unit);
        read_nested(&child, kind, units)?;
    }
    Ok(())
}

/// Reads the tree recording, on every unit, the members of its subtree.
///
/// Once the whole tree is read, every unit is stamped with `uppermost` as
/// its root context.
pub fn read_grouped(uppermost: &Path, kind: UnitKind) -> ResolveResult<Vec<Unit>> {
    let mut arena = Vec::new();
    read_group(uppermost, kind, true, &mut arena)?;

    for unit in &mut arena {
        unit.set_root_context(uppermost);
    }

    Ok(arena)
}

// Returns the handles of the unit in `dir` and all of its descendants.
fn read_group(
    dir: &Path,
    kind: UnitKind,
    is_root: bool,
    arena: &mut Vec<Unit>,
) -> ResolveResult<Vec<UnitId>> {
    let id = UnitId(arena.len());
    let unit = Unit::read(dir, kind, is_root)?;
    debug!(unit = unit.name(), is_root, "Read {kind}");
    arena.push(unit);

    let mut members = vec![id];
    for child in child_unit_dirs(dir, kind)? {
        members.extend(read_group(&child, kind, false, arena)?);
    }

    arena[id.0].set_group(members.clone());
    Ok(members)
}
