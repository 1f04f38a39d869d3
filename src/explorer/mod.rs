/*!
An explorer, moving through a [world](crate::world) by reasoning about what it has sensed.

# Overview

Each step of an exploration passes through four phases:

```none
          +--------------------------------------------------+
          |                                                  |
          ⌄                                                  |
--> sensing --> inferring --> deciding --> moving -----------+
                                  |
                                  +---> stuck, if there is no move to make
```

- *Sensing*: if the current cell has not been visited before, the label sensed there is [memorized](crate::knowledge::memory).
  A stench is sensed in preference to chemicals, chemicals in preference to a glow, and otherwise the cell is safe, as it is occupied.
- *Inferring*: for each successor of the current cell, the first label entailed by the [axioms](crate::knowledge::axioms) and memorized facts is the [conclusion](inference) for that successor.
- *Deciding*: the [decision policy](decision) chooses the next cell, if any.
- *Moving*: the chosen cell is added to the path.

An exploration ends when:
- The current cell is the goal.
- There is no move to make.
- The configured number of steps has been taken.
- The explorer moves to a fatal cell.

In each case, the [outcome](Outcome) of the exploration notes the path taken, the actions which follow the path, and the [status](Status) of the exploration.

# Example

```rust
# use cave_logic::config::Config;
# use cave_logic::explorer::{Explorer, Status};
# use cave_logic::world::grid::{Direction, GridWorld};
let cave: GridWorld = "\
%%%%%
%P.T%
%%%%%".parse().unwrap();

let outcome = Explorer::new(&cave, Config::default()).explore().unwrap();

assert_eq!(outcome.status, Status::Goal);
assert_eq!(outcome.actions, vec![Direction::East, Direction::East]);
```
*/

pub mod decision;
pub mod inference;

use std::collections::{HashMap, HashSet};

use crate::{
    config::Config,
    explorer::decision::Frontiers,
    knowledge::memory::BeliefMemory,
    misc::log::targets::{self},
    procedures::counters::Counters,
    structures::{coordinate::Coordinate, label::Label},
    types::err::{self},
    world::World,
};

/// How an exploration ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// The goal was reached.
    Goal,

    /// There was no move to make.
    Stuck,

    /// The configured number of steps was taken without reaching the goal.
    StepLimit,

    /// The explorer moved to a fatal cell.
    Perished,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Goal => write!(f, "Goal"),
            Self::Stuck => write!(f, "Stuck"),
            Self::StepLimit => write!(f, "Step limit"),
            Self::Perished => write!(f, "Perished"),
        }
    }
}

/// The result of an exploration.
#[derive(Clone, Debug)]
pub struct Outcome<A> {
    /// Every cell visited, in order, from the start.
    pub path: Vec<Coordinate>,

    /// Actions which follow the path.
    pub actions: Vec<A>,

    pub status: Status,

    /// The latest conclusion drawn for each cell reasoned about.
    pub beliefs: HashMap<Coordinate, Label>,

    /// The count of queries made.
    pub queries: usize,

    /// Counts from every query, combined.
    pub counters: Counters,
}

/// An explorer of some world.
pub struct Explorer<'w, W: World> {
    world: &'w W,

    config: Config,

    memory: BeliefMemory,

    beliefs: HashMap<Coordinate, Label>,

    frontiers: Frontiers,

    path: Vec<Coordinate>,

    visited: HashSet<Coordinate>,

    steps: usize,

    queries: usize,

    counters: Counters,
}

impl<'w, W: World> Explorer<'w, W> {
    /// A fresh explorer, at the start of `world`.
    pub fn new(world: &'w W, config: Config) -> Self {
        let start = world.start();
        Explorer {
            world,
            config,
            memory: BeliefMemory::default(),
            beliefs: HashMap::default(),
            frontiers: Frontiers::default(),
            path: vec![start],
            visited: HashSet::from([start]),
            steps: 0,
            queries: 0,
            counters: Counters::default(),
        }
    }

    /// The cell the explorer occupies.
    pub fn position(&self) -> Coordinate {
        // The path is never empty, as it begins at the start.
        self.path.last().copied().unwrap_or_else(|| self.world.start())
    }

    /// Every cell visited, in order.
    pub fn path(&self) -> &[Coordinate] {
        &self.path
    }

    pub fn memory(&self) -> &BeliefMemory {
        &self.memory
    }

    /// The latest conclusion drawn for each cell reasoned about.
    pub fn beliefs(&self) -> &HashMap<Coordinate, Label> {
        &self.beliefs
    }

    /// The label sensed at `cell`, with a stench in preference to chemicals, chemicals in preference to a glow, and otherwise safe.
    fn sense(&self, cell: Coordinate) -> Label {
        if self.world.hazard_close(cell) {
            Label::Stench
        } else if self.world.poison_close(cell) {
            Label::Chemicals
        } else if self.world.teleporter_close(cell) {
            Label::Glow
        } else {
            Label::Safe
        }
    }

    /// A single step of exploration.
    ///
    /// Returns a status if the step ends the exploration.
    pub fn step(&mut self) -> Result<Option<Status>, err::ExplorerError> {
        let here = self.position();

        if self.world.is_goal(here) {
            return Ok(Some(Status::Goal));
        }

        if self.steps >= self.config.max_steps.value {
            log::warn!(target: targets::DECISION, "Step limit of {} reached", self.steps);
            return Ok(Some(Status::StepLimit));
        }

        // Sensing
        if !self.memory.contains(&here) {
            let label = self.sense(here);
            self.memory.memorize(here, label);
        }

        // Inferring
        let successors: Vec<Coordinate> = self
            .world
            .successors(here)
            .into_iter()
            .map(|successor| successor.cell)
            .collect();

        let premises = inference::premises(here, &successors, &self.memory, &self.config);
        let conclusions = match self.config.parallel_queries.value {
            true => inference::conclude_parallel(&premises, &successors)?,
            false => inference::conclude(&premises, &successors),
        };

        self.queries += conclusions.queries;
        self.counters.absorb(&conclusions.counters);
        for (cell, conclusion) in &conclusions.by_cell {
            if let Some(label) = conclusion {
                self.beliefs.insert(*cell, *label);
            }
        }

        // Deciding
        let next = decision::decide(
            &conclusions,
            &self.memory,
            &self.visited,
            &mut self.frontiers,
            self.config.frontier_preference.value,
        );

        // Moving
        let Some(next) = next else {
            return Ok(Some(Status::Stuck));
        };

        log::info!(target: targets::DECISION, "Step {}: {here} to {next}", self.steps);

        self.steps += 1;
        self.path.push(next);
        self.visited.insert(next);

        if self.world.is_fatal(next) {
            log::warn!(target: targets::DECISION, "Moved to a fatal cell at {next}");
            return Ok(Some(Status::Perished));
        }

        Ok(None)
    }

    /// Steps until the exploration ends, and returns the outcome.
    pub fn explore(mut self) -> Result<Outcome<W::Action>, err::ErrorKind> {
        let status = loop {
            if let Some(status) = self.step()? {
                break status;
            }
        };

        let actions = self.world.reconstruct_path(&self.path);

        Ok(Outcome {
            path: self.path,
            actions,
            status,
            beliefs: self.beliefs,
            queries: self.queries,
            counters: self.counters,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::grid::GridWorld;

    #[test]
    fn no_successors_is_stuck() {
        let cave: GridWorld = "%%%\n%P%\n%%%".parse().unwrap();
        let mut explorer = Explorer::new(&cave, Config::default());
        assert_eq!(explorer.step(), Ok(Some(Status::Stuck)));
        assert_eq!(explorer.memory().sensed(&Coordinate::new(1, 1)), Some(Label::Safe));
    }

    #[test]
    fn sensing_priority() {
        let cave: GridWorld = "%%%%%\n%CPW%\n%.T.%\n%%%%%".parse().unwrap();
        let mut explorer = Explorer::new(&cave, Config::default());
        let _ = explorer.step();
        assert_eq!(explorer.memory().sensed(&cave.start()), Some(Label::Stench));
    }

    #[test]
    fn step_limit() {
        let cave: GridWorld = "%%%%%%\n%P...%\n%%%%%%".parse().unwrap();
        let mut config = Config::default();
        config.max_steps.value = 2;

        let outcome = Explorer::new(&cave, config).explore().unwrap();
        assert_eq!(outcome.status, Status::StepLimit);
        assert_eq!(outcome.path.len(), 3);
    }
}
