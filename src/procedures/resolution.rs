//! Determines whether a knowledge base entails a goal, by refutation resolution.
//!
//! # Overview
//!
//! A knowledge base 𝐊 entails a goal clause *G* just in case 𝐊 ∧ ¬*G* is unsatisfiable.
//! And, for propositional clauses, 𝐊 ∧ ¬*G* is unsatisfiable just in case the empty clause may be derived from 𝐊 ∧ ¬*G* by resolution.
//!
//! The negation of *G* is a conjunction of unit clauses (one per literal of *G*, negated) which seeds the *set of support*.
//! The search then only resolves pairs containing at least one clause from the set of support, and so only explores consequences which involve the goal.
//!
//! Each round of the search:
//! 1. Simplifies the knowledge base and set of support, by removing [tautologies and subsumed clauses](crate::procedures::simplify).
//! 2. [Selects](crate::procedures::selection) pairs from the set of support and knowledge base not yet resolved.
//! 3. Resolves each selected pair, returning [Entailed](Entailment::Entailed) as soon as the empty clause is a resolvent.
//! 4. If no resolvents were generated, returns [NotEntailed](Entailment::NotEntailed).
//!    Otherwise, merges the set of support into the knowledge base, takes the resolvents as the new set of support, and starts a fresh round.
//!
//! ```none
//!          +-----------------------------+
//!          |                             |
//!          ⌄                             |
//! --> simplify --> select --> resolve ---+ if resolvents were generated
//!                                |
//!                                +-----> entailed, if some resolvent is empty
//!                                |
//!                                +-----> not entailed, if no resolvents were generated
//! ```
//!
//! # Termination
//!
//! The literals of a query are drawn from a finite vocabulary, so there are finitely many distinct (non-tautological) clauses and so finitely many distinct pairs.
//! Pairs, once resolved, are never selected again, and each round which does not end the search resolves some pair.
//! So, the number of rounds is bounded.
//!
//! # Example
//!
//! ```rust
//! # use cave_logic::procedures::resolution::resolution;
//! # use cave_logic::reports::Entailment;
//! # use cave_logic::structures::clause::Clause;
//! # use cave_logic::structures::coordinate::Coordinate;
//! # use cave_logic::structures::literal::Literal;
//! let at = Coordinate::default();
//! let (s, w1, w2) = (
//!     Literal::atom("S", at, true),
//!     Literal::atom("W1", at, true),
//!     Literal::atom("W2", at, true),
//! );
//!
//! let premises = vec![
//!     Clause::from([s.negate(), w1.clone(), w2.clone()]),
//!     Clause::from(s),
//!     Clause::from(w1.negate()),
//! ];
//!
//! assert_eq!(resolution(premises.clone(), &Clause::from(w2)), Entailment::Entailed);
//! assert_eq!(resolution(premises, &Clause::from(w1)), Entailment::NotEntailed);
//! ```

use std::collections::HashSet;

use crate::{
    misc::log::targets::{self},
    procedures::{
        counters::Counters,
        selection::{self, ClausePair},
        simplify::{self},
    },
    reports::Entailment,
    structures::clause::Clause,
};

/// Every resolvent of `a` and `b`.
///
/// For each literal of `a` whose negation is in `b`, the resolvent on that literal is the union of the literals of the two clauses less the literal and its negation.
/// So, if the two clauses clash on more than one literal, more than one resolvent is returned.
pub fn resolve_pair(a: &Clause, b: &Clause) -> HashSet<Clause> {
    let mut resolvents = HashSet::default();
    for literal in a.literals() {
        let negation = literal.negate();
        if b.contains(&negation) {
            let resolvent = a.union(b).without(literal).without(&negation);
            resolvents.insert(resolvent);
        }
    }
    resolvents
}

/// The state of a refutation.
///
/// A refutation is fresh to each query, and is discarded once the query has been answered.
pub struct Refutation {
    /// The knowledge base, grown with each previous set of support.
    clauses: HashSet<Clause>,

    /// The frontier of clauses, each of which follows in part from the negated goal.
    set_of_support: HashSet<Clause>,

    /// Every pair resolved so far.
    resolved_pairs: HashSet<ClausePair>,

    /// Resolvents generated in the current round.
    fresh: HashSet<Clause>,

    /// Counts for the refutation.
    pub counters: Counters,
}

impl Refutation {
    /// A refutation of `goal` from `premises`.
    pub fn new(premises: impl IntoIterator<Item = Clause>, goal: &Clause) -> Self {
        Refutation {
            clauses: premises.into_iter().collect(),
            set_of_support: goal.negate_all().into_iter().collect(),
            resolved_pairs: HashSet::default(),
            fresh: HashSet::default(),
            counters: Counters::default(),
        }
    }

    /// The knowledge base, as it stands.
    pub fn clauses(&self) -> &HashSet<Clause> {
        &self.clauses
    }

    /// The set of support, as it stands.
    pub fn set_of_support(&self) -> &HashSet<Clause> {
        &self.set_of_support
    }

    /// Runs rounds until the refutation either succeeds or saturates.
    pub fn run(&mut self) -> Entailment {
        if self.clauses.is_empty() {
            log::debug!(target: targets::RESOLUTION, "Empty knowledge base");
            return Entailment::NotEntailed;
        }

        loop {
            if let Some(report) = self.round() {
                log::debug!(target: targets::RESOLUTION, "{report} after {} rounds", self.counters.rounds);
                return report;
            }
        }
    }

    /// A single round of the refutation.
    ///
    /// Returns a report if the round settles the query, and otherwise advances the set of support.
    pub fn round(&mut self) -> Option<Entailment> {
        self.counters.rounds += 1;

        simplify::simplify(
            &mut self.clauses,
            &mut self.set_of_support,
            &mut self.counters,
        );

        let pairs =
            selection::select_pairs(&self.clauses, &self.set_of_support, &self.resolved_pairs);

        log::trace!(target: targets::RESOLUTION, "Round {}: {} pairs", self.counters.rounds, pairs.len());

        for pair in pairs {
            let resolvents = resolve_pair(&pair.0, &pair.1);
            self.counters.pairs_resolved += 1;
            self.counters.resolvents += resolvents.len();

            log::trace!(target: targets::RESOLUTION, "Resolved {} with {}", pair.0, pair.1);

            if resolvents.iter().any(|resolvent| resolvent.is_empty()) {
                return Some(Entailment::Entailed);
            }

            self.resolved_pairs.insert(pair);
            self.fresh.extend(resolvents);
        }

        if self.fresh.is_empty() {
            return Some(Entailment::NotEntailed);
        }

        self.clauses.extend(self.set_of_support.drain());
        self.set_of_support = std::mem::take(&mut self.fresh);

        None
    }
}

/// Whether `premises` entail `goal`.
pub fn resolution(premises: impl IntoIterator<Item = Clause>, goal: &Clause) -> Entailment {
    Refutation::new(premises, goal).run()
}

/// Whether `premises` entail `goal`, with counts from the refutation.
pub fn resolution_with_counters(
    premises: impl IntoIterator<Item = Clause>,
    goal: &Clause,
) -> (Entailment, Counters) {
    let mut refutation = Refutation::new(premises, goal);
    let report = refutation.run();
    (report, refutation.counters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::{coordinate::Coordinate, literal::Literal};

    fn atom(name: &str, polarity: bool) -> Literal {
        Literal::atom(name, Coordinate::default(), polarity)
    }

    #[test]
    fn complementary_units_resolve_to_empty() {
        let a = Clause::from(atom("A", true));
        let not_a = Clause::from(atom("A", false));

        let resolvents = resolve_pair(&a, &not_a);
        assert_eq!(resolvents.len(), 1);
        assert!(resolvents.contains(&Clause::empty()));
    }

    #[test]
    fn every_clash_is_resolved() {
        let a_or_not_b = Clause::from([atom("A", true), atom("B", false)]);
        let not_a_or_b = Clause::from([atom("A", false), atom("B", true)]);

        let resolvents = resolve_pair(&a_or_not_b, &not_a_or_b);
        assert_eq!(resolvents.len(), 2);
        assert!(resolvents.contains(&Clause::from([atom("B", true), atom("B", false)])));
        assert!(resolvents.contains(&Clause::from([atom("A", true), atom("A", false)])));
    }

    #[test]
    fn no_clash_no_resolvents() {
        let a = Clause::from(atom("A", true));
        let b = Clause::from(atom("B", true));
        assert!(resolve_pair(&a, &b).is_empty());
    }

    #[test]
    fn empty_knowledge_base() {
        let goal = Clause::from(atom("A", true));
        assert_eq!(resolution(Vec::new(), &goal), Entailment::NotEntailed);
    }

    #[test]
    fn direct_premise_in_first_round() {
        let goal = Clause::from(atom("A", true));
        let (report, counters) = resolution_with_counters(vec![goal.clone()], &goal);

        assert_eq!(report, Entailment::Entailed);
        assert_eq!(counters.rounds, 1);
    }

    #[test]
    fn tautologies_carry_no_information() {
        let tautology = Clause::from([atom("A", true), atom("A", false)]);
        let goal = Clause::from(atom("A", true));

        let (report, counters) = resolution_with_counters(vec![tautology], &goal);
        assert_eq!(report, Entailment::NotEntailed);
        assert_eq!(counters.tautologies_removed, 1);
    }

    #[test]
    fn support_advances() {
        let premises = vec![
            Clause::from([atom("A", false), atom("B", true)]),
            Clause::from([atom("B", false), atom("C", true)]),
        ];
        let goal = Clause::from(atom("C", true));

        let mut refutation = Refutation::new(premises, &goal);
        assert!(refutation.round().is_none());
        assert!(refutation
            .set_of_support()
            .contains(&Clause::from(atom("B", false))));
        assert!(refutation.clauses().contains(&Clause::from(atom("C", false))));
    }

    #[test]
    fn chain() {
        let premises = vec![
            Clause::from([atom("P", false), atom("Q", true), atom("R", true)]),
            Clause::from([atom("Q", false), atom("S", true)]),
            Clause::from([atom("R", false), atom("S", true)]),
        ];
        let goal = Clause::from([atom("P", false), atom("S", true)]);

        assert_eq!(resolution(premises, &goal), Entailment::Entailed);
    }
}
