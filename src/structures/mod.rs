//! Key structures, such as literals and clauses.
//!
//! # Other structures without an implementation
//!
//! ## Knowledge bases
//!
//! A knowledge base is a set of [clauses](clause), interpreted as the conjunction of those clauses, each of which is assumed to be true.
//! Order is irrelevant, and so a knowledge base is any collection of clauses, typically a `Vec` or `HashSet`.
//!
//! ## Goals
//!
//! A goal is a clause whose entailment by some knowledge base is in question.
//! For the cave, goals are unit clauses asking whether a [label] holds at a [coordinate].

pub mod clause;
pub mod coordinate;
pub mod label;
pub mod literal;
