/*!
The world an [explorer](crate::explorer::Explorer) moves through.

A world is only known to an explorer through the methods of the [World] trait:
- The [start](World::start) cell, and the [successors](World::successors) of a cell, each with the action which reaches it.
- Whether a cell is the [goal](World::is_goal).
- Percepts at a cell, true when some adjacent cell holds [the hazard](World::hazard_close), [poison](World::poison_close), or [the teleporter](World::teleporter_close).
- A [reconstruction](World::reconstruct_path) of the actions which follow a sequence of cells.

Percepts are only ever asked of the cell an explorer occupies.

A reference implementation on a grid is given by [GridWorld](grid::GridWorld).
*/

pub mod grid;

use crate::structures::coordinate::Coordinate;

/// A cell reachable from some cell, with the action which reaches the cell and the cost of the action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Successor<A> {
    pub cell: Coordinate,
    pub action: A,
    pub cost: u32,
}

/// Methods an explorer requires of a world.
pub trait World {
    /// An action taken to move between cells.
    type Action: Clone + std::fmt::Debug;

    /// The cell an exploration starts from.
    fn start(&self) -> Coordinate;

    /// Every cell reachable from `cell` by a single action.
    fn successors(&self, cell: Coordinate) -> Vec<Successor<Self::Action>>;

    /// Whether `cell` is the goal.
    fn is_goal(&self, cell: Coordinate) -> bool;

    /// Whether the hazard is adjacent to `cell`.
    fn hazard_close(&self, cell: Coordinate) -> bool;

    /// Whether poison is adjacent to `cell`.
    fn poison_close(&self, cell: Coordinate) -> bool;

    /// Whether the teleporter is adjacent to `cell`.
    fn teleporter_close(&self, cell: Coordinate) -> bool;

    /// Whether entering `cell` ends an exploration.
    ///
    /// By default, no cell is fatal.
    fn is_fatal(&self, _cell: Coordinate) -> bool {
        false
    }

    /// The actions which take an explorer through each cell of `path`, in order.
    fn reconstruct_path(&self, path: &[Coordinate]) -> Vec<Self::Action>;
}
