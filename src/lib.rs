//! A library for reasoning about, and exploring, a cave whose hazards are only known through the cues sensed near them.
//!
//! cave_logic pairs a set of support refutation resolution engine over propositional clauses with an explorer which queries the engine at each step to decide where it is safe to move.
//!
//! # Orientation
//!
//! The library has two halves.
//!
//! The first half is a [resolution engine](crate::procedures::resolution), which determines whether some clauses entail a goal clause.
//! - [Literals](crate::structures::literal) assert a [label](crate::structures::label) (or a named atom) at a [coordinate](crate::structures::coordinate).
//! - [Clauses](crate::structures::clause) are sets of literals, read as disjunctions.
//! - A query is answered by refutation, with [simplification](crate::procedures::simplify) and [set of support](crate::procedures::selection) pair selection each round.
//!
//! The second half is an [explorer](crate::explorer), which moves through a [world](crate::world).
//! - At each cell, the label sensed there is kept in [memory](crate::knowledge::memory).
//! - [Axioms](crate::knowledge::axioms) relate the cues sensed at a cell to the contents of adjacent cells.
//! - For each adjacent cell, the first label entailed by the axioms and memory is the [conclusion](crate::explorer::inference) for the cell.
//! - A fixed [policy](crate::explorer::decision) chooses the next cell from the conclusions.
//!
//! Useful starting points, then, may be:
//! - The [resolution procedure](crate::procedures::resolution), to inspect the dynamics of a query.
//! - The [explorer](crate::explorer), to inspect the dynamics of an exploration.
//! - The [configuration](crate::config) to see what features are supported.
//!
//! # Examples
//!
//! + A query, built from text.
//!
//! ```rust
//! # use cave_logic::procedures::resolution::resolution;
//! # use cave_logic::reports::Entailment;
//! # use cave_logic::structures::clause::Clause;
//! let premises: Vec<Clause> = ["-S W1 W2 W3 W4", "-W1", "-W2", "-W3", "S"]
//!     .iter()
//!     .map(|clause| clause.parse().unwrap())
//!     .collect();
//!
//! let goal: Clause = "W4".parse().unwrap();
//! assert_eq!(resolution(premises, &goal), Entailment::Entailed);
//! ```
//!
//! + An exploration of a grid.
//!
//! ```rust
//! # use cave_logic::config::Config;
//! # use cave_logic::explorer::{Explorer, Status};
//! # use cave_logic::world::grid::GridWorld;
//! let cave: GridWorld = "\
//! %%%%%%%
//! %P...%%
//! %.%%.T%
//! %.....%
//! %%%%%%%".parse().unwrap();
//!
//! let outcome = Explorer::new(&cave, Config::default()).explore().unwrap();
//! assert_eq!(outcome.status, Status::Goal);
//! ```
//!
//! # Logs
//!
//! To help diagnose issues calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Each move of an exploration can be followed with `RUST_LOG=decision=info …` or,
//! - The clauses removed by subsumption can be found with `RUST_LOG=subsumption=trace …`

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod structures;
pub mod types;

pub mod generic;

pub mod explorer;
pub mod knowledge;

pub mod misc;
pub mod reports;

pub mod world;
