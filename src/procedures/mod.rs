//! Procedures for answering entailment queries.
//!
//! The procedures are factored as:
//! - [resolution], the refutation loop and the resolution of a pair of clauses.
//! - [simplify], tautology and subsumption elimination applied at the start of each round.
//! - [selection], the set of support strategy for choosing pairs to resolve.
//! - [counters], statistics from a query.

pub mod counters;
pub mod resolution;
pub mod selection;
pub mod simplify;
