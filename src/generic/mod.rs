//! Generic structures, not specific to caves or clauses.

pub mod frontier_queue;
pub mod minimal_pcg;
