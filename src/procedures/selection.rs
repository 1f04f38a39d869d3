//! Selection of the pairs of clauses to resolve in a round.
//!
//! Following the set of support strategy, every selected pair contains a clause from the set of support.
//! Candidates are:
//! - A clause of the set of support with a clause of the knowledge base.
//! - Two distinct clauses of the set of support.
//!
//! In each case the clauses must be resolvable with one another, and must not have been resolved before.
//!
//! Pairs are unordered, as resolution is symmetric.
//! So, a pair is identified by the (derived) order of its clauses, and each pair is selected at most once per round.

use std::collections::HashSet;

use crate::structures::clause::Clause;

/// An unordered pair of clauses, with the lesser clause first.
pub type ClausePair = (Clause, Clause);

/// The canonical key of the pair of `a` and `b`.
pub fn pair_key(a: &Clause, b: &Clause) -> ClausePair {
    match a <= b {
        true => (a.clone(), b.clone()),
        false => (b.clone(), a.clone()),
    }
}

/// The pairs to be resolved in the current round.
pub fn select_pairs(
    clauses: &HashSet<Clause>,
    support: &HashSet<Clause>,
    resolved: &HashSet<ClausePair>,
) -> Vec<ClausePair> {
    let mut selected: HashSet<ClausePair> = HashSet::default();

    for supporting in support {
        for clause in clauses {
            if supporting.is_resolvable_with(clause) {
                let key = pair_key(supporting, clause);
                if !resolved.contains(&key) {
                    selected.insert(key);
                }
            }
        }
    }

    for supporting in support {
        for other in support {
            if supporting == other {
                continue;
            }
            if supporting.is_resolvable_with(other) {
                let key = pair_key(supporting, other);
                if !resolved.contains(&key) {
                    selected.insert(key);
                }
            }
        }
    }

    selected.into_iter().collect()
}
