/*!
The decision policy: which cell to move to next.

Rules are tried in a fixed order, and the first rule which gives a cell decides the move:
1. A successor concluded, or remembered, to be the teleporter.
2. A successor concluded, or remembered, to glow.
3. Successors concluded safe and not yet visited are pushed to the safe frontier, and if any were pushed the least cell of the safe frontier is taken.
4. Successors with no conclusion and not yet visited are pushed to the unknown frontier, and if any were pushed the least cell of the unknown frontier is taken.
5. The least cell of the safe frontier, and otherwise the least cell of the unknown frontier.

If no rule gives a cell, there is no move to make.

Memory is consulted directly for the first two rules.
A conclusion drawn for a visited cell need not match what was sensed there, as when a cell with no cue is next to a visited cell with some cue the premises are inconsistent.

With the [stored](FrontierPreference::Stored) preference the safe frontier is instead drained before successors with no conclusion are considered.
That is, rule 5 is split, with the safe frontier tried between rules 3 and 4 and the unknown frontier tried after rule 4.

Frontiers are ordered by the [weight](crate::structures::coordinate::Coordinate::weight) of a cell and then by the order cells were pushed.
Cells visited since being pushed are discarded when popped.
*/

use std::collections::HashSet;

use crate::{
    config::FrontierPreference,
    explorer::inference::Conclusions,
    generic::frontier_queue::FrontierQueue,
    knowledge::memory::BeliefMemory,
    misc::log::targets::{self},
    structures::{coordinate::Coordinate, label::Label},
};

/// Frontiers of cells to explore, kept across steps.
#[derive(Clone, Debug, Default)]
pub struct Frontiers {
    /// Cells concluded safe and not visited when pushed.
    pub safe: FrontierQueue<Coordinate>,

    /// Cells with no conclusion and not visited when pushed.
    pub unknown: FrontierQueue<Coordinate>,
}

impl Frontiers {
    fn pop_safe(&mut self, visited: &HashSet<Coordinate>) -> Option<Coordinate> {
        self.safe.pop_where(|cell| !visited.contains(cell))
    }

    fn pop_unknown(&mut self, visited: &HashSet<Coordinate>) -> Option<Coordinate> {
        self.unknown.pop_where(|cell| !visited.contains(cell))
    }
}

/// The first successor concluded or remembered to be `label`, in successor order.
fn first_with(conclusions: &Conclusions, memory: &BeliefMemory, label: Label) -> Option<Coordinate> {
    conclusions
        .by_cell
        .iter()
        .find(|(cell, conclusion)| *conclusion == Some(label) || memory.is_known(cell, label))
        .map(|(cell, _)| *cell)
}

/// Pushes every unvisited successor whose conclusion is `conclusion` to `queue`.
///
/// Returns true if some successor matched, even if each matching successor was already on `queue`.
fn push_matching(
    conclusions: &Conclusions,
    conclusion: Option<Label>,
    visited: &HashSet<Coordinate>,
    queue: &mut FrontierQueue<Coordinate>,
) -> bool {
    let mut pushed = false;
    for (cell, concluded) in &conclusions.by_cell {
        if *concluded == conclusion && !visited.contains(cell) {
            queue.push(*cell, cell.weight());
            pushed = true;
        }
    }
    pushed
}

/// The next cell to move to, if any.
pub fn decide(
    conclusions: &Conclusions,
    memory: &BeliefMemory,
    visited: &HashSet<Coordinate>,
    frontiers: &mut Frontiers,
    preference: FrontierPreference,
) -> Option<Coordinate> {
    if let Some(cell) = first_with(conclusions, memory, Label::Teleporter) {
        log::info!(target: targets::DECISION, "Teleporter at {cell}");
        return Some(cell);
    }

    if let Some(cell) = first_with(conclusions, memory, Label::Glow) {
        log::info!(target: targets::DECISION, "Glow at {cell}");
        return Some(cell);
    }

    if push_matching(conclusions, Some(Label::Safe), visited, &mut frontiers.safe) {
        if let Some(cell) = frontiers.pop_safe(visited) {
            log::info!(target: targets::DECISION, "Safe cell at {cell}");
            return Some(cell);
        }
    }

    if preference == FrontierPreference::Stored {
        if let Some(cell) = frontiers.pop_safe(visited) {
            log::info!(target: targets::DECISION, "Stored safe cell at {cell}");
            return Some(cell);
        }
    }

    if push_matching(conclusions, None, visited, &mut frontiers.unknown) {
        if let Some(cell) = frontiers.pop_unknown(visited) {
            log::info!(target: targets::DECISION, "Unknown cell at {cell}");
            return Some(cell);
        }
    }

    if let Some(cell) = frontiers.pop_safe(visited) {
        log::info!(target: targets::DECISION, "Stored safe cell at {cell}");
        return Some(cell);
    }

    if let Some(cell) = frontiers.pop_unknown(visited) {
        log::info!(target: targets::DECISION, "Stored unknown cell at {cell}");
        return Some(cell);
    }

    log::info!(target: targets::DECISION, "No move");
    None
}
