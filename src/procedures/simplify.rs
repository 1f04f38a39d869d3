//! Simplification of the clauses held during a query.
//!
//! Two strategies are applied, each of which removes clauses carrying no information beyond some other clause:
//! - Tautology elimination, as a clause containing a literal alongside its negation is always true.
//! - Subsumption elimination, as a clause *D* which contains every literal of some other clause *C* is entailed by *C*.
//!
//! In both cases clauses to remove are identified against a snapshot of the collections before any removal is made.
//! So, whether a clause is removed never depends on the order in which the collections are examined.
//!
//! Subsumption only removes a clause when some strictly smaller clause is a subset of it.
//! As a consequence, elimination is idempotent: the minimal clauses of the snapshot are never removed, and every removed clause has some minimal clause as a subset.

use std::collections::HashSet;

use crate::{
    misc::log::targets::{self},
    procedures::counters::Counters,
    structures::clause::Clause,
};

/// Removes every tautology from `clauses`, returning the count of clauses removed.
pub fn remove_tautologies(clauses: &mut HashSet<Clause>) -> usize {
    let before = clauses.len();
    clauses.retain(|clause| {
        let valid = clause.is_valid();
        if valid {
            log::trace!(target: targets::SUBSUMPTION, "Removed tautology: {clause}");
        }
        !valid
    });
    before - clauses.len()
}

/// Removes from both `clauses` and `support` every clause subsumed by some other clause of either collection.
///
/// Returns the count of clauses removed.
pub fn remove_subsumed(clauses: &mut HashSet<Clause>, support: &mut HashSet<Clause>) -> usize {
    let subsumed_clauses = subsumed_within(clauses, clauses, support);
    let subsumed_support = subsumed_within(support, clauses, support);

    for clause in &subsumed_clauses {
        log::trace!(target: targets::SUBSUMPTION, "Removed subsumed clause: {clause}");
        clauses.remove(clause);
    }

    for clause in &subsumed_support {
        log::trace!(target: targets::SUBSUMPTION, "Removed subsumed support: {clause}");
        support.remove(clause);
    }

    subsumed_clauses.len() + subsumed_support.len()
}

/// The members of `examined` subsumed by some member of `clauses` or `support`.
fn subsumed_within(
    examined: &HashSet<Clause>,
    clauses: &HashSet<Clause>,
    support: &HashSet<Clause>,
) -> Vec<Clause> {
    examined
        .iter()
        .filter(|clause| clause.is_redundant(clauses.iter().chain(support.iter())))
        .cloned()
        .collect()
}

/// Applies tautology and subsumption elimination to `clauses` and `support`, noting removals in `counters`.
pub fn simplify(
    clauses: &mut HashSet<Clause>,
    support: &mut HashSet<Clause>,
    counters: &mut Counters,
) {
    counters.tautologies_removed += remove_tautologies(clauses);
    counters.tautologies_removed += remove_tautologies(support);
    counters.subsumed_removed += remove_subsumed(clauses, support);
}
