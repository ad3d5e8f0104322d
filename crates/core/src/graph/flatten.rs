//! Dependency-ordered flattening of a unit's transitive dependencies.
//!
//! The level of a unit is the length of the longest dependency chain that
//! reaches it from the start unit, direct dependencies being level 0.
//! Units are returned deepest first; ties keep the order in which they were
//! first reached.

use crate::config::error::{ResolveError, ResolveResult};
use crate::graph::unit::UnitId;
use crate::graph::UnitGraph;
use std::collections::HashMap;

/// Flattens the dependencies of `start`. `start` itself is not included.
///
/// # Errors
///
/// Returns `CycleDetected` if a unit is reachable from itself.
pub fn flatten(graph: &UnitGraph, start: UnitId) -> ResolveResult<Vec<UnitId>> {
    let mut walk = Walk::default();
    walk.visit(graph, start, 0)?;

    let Walk {
        mut order, levels, ..
    } = walk;
    order.sort_by(|a, b| levels[b].cmp(&levels[a]));
    Ok(order)
}

#[derive(Default)]
struct Walk {
    // first-reached order
    order: Vec<UnitId>,
    levels: HashMap<UnitId, usize>,
    stack: Vec<UnitId>,
}

impl Walk {
    fn visit(&mut self, graph: &UnitGraph, unit: UnitId, level: usize) -> ResolveResult<()> {
        self.stack.push(unit);

        for dependency in graph.dependency_ids(unit) {
            if let Some(position) = self.stack.iter().position(|&id| id == dependency) {
                return Err(self.cycle(graph, position, dependency));
            }

            // A unit already reached at this level or deeper has had its
            // subtree levelled from there; going through it again changes nothing.
            let descend = match self.levels.get_mut(&dependency) {
                Some(recorded) if *recorded >= level => false,
                Some(recorded) => {
                    *recorded = level;
                    true
                }
                None => {
                    self.levels.insert(dependency, level);
                    self.order.push(dependency);
                    true
                }
            };

            if descend {
                self.visit(graph, dependency, level + 1)?;
            }
        }

        self.stack.pop();
        Ok(())
    }

    fn cycle(&self, graph: &UnitGraph, position: usize, closing: UnitId) -> ResolveError {
        let path = self.stack[position..]
            .iter()
            .chain(std::iter::once(&closing))
            .map(|&id| graph.unit(id).name().to_string())
            .collect();
        ResolveError::CycleDetected { path }
    }
}
