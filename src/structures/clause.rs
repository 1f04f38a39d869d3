//! Clauses, aka. a set of literals, interpreted as the disjunction of those literals.
//!
//! The literals of a clause are stored in a set, and so duplicate literals collapse on construction.
//! This is the only factoring applied to clauses.
//!
//! ```rust
//! # use cave_logic::structures::clause::Clause;
//! # use cave_logic::structures::literal::Literal;
//! # use cave_logic::structures::coordinate::Coordinate;
//! let a = Literal::atom("A", Coordinate::default(), true);
//! let b = Literal::atom("B", Coordinate::default(), true);
//!
//! let clause = Clause::from(vec![a.clone(), a.clone(), b.clone()]);
//! assert_eq!(clause.size(), 2);
//!
//! let tautology = Clause::from(vec![a.clone(), a.negate()]);
//! assert!(tautology.is_valid());
//!
//! assert!(clause.is_resolvable_with(&Clause::from(b.negate())));
//! ```
//!
//! - The empty clause is always false (never true), and deriving it is the aim of refutation.
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause).

use std::collections::BTreeSet;

use crate::structures::literal::Literal;

/// A clause.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Clause {
    literals: BTreeSet<Literal>,
}

impl Clause {
    /// The empty clause.
    pub fn empty() -> Self {
        Clause::default()
    }

    /// A fresh clause from some literals, with duplicates removed.
    pub fn new(literals: impl IntoIterator<Item = Literal>) -> Self {
        Clause {
            literals: literals.into_iter().collect(),
        }
    }

    /// An iterator over the literals of the clause.
    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.contains(literal)
    }

    /// The number of (distinct) literals in the clause.
    pub fn size(&self) -> usize {
        self.literals.len()
    }

    /// Whether the clause is the empty clause.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn is_unit(&self) -> bool {
        self.literals.len() == 1
    }

    /// Whether some literal of the clause has its negation in `other`.
    pub fn is_resolvable_with(&self, other: &Clause) -> bool {
        self.literals
            .iter()
            .any(|literal| other.contains(&literal.negate()))
    }

    /// Whether the clause is a tautology, i.e. contains some literal alongside its negation.
    pub fn is_valid(&self) -> bool {
        self.literals
            .iter()
            .any(|literal| !literal.polarity() && self.contains(&literal.negate()))
    }

    /// Whether every literal of the clause is a literal of `other`.
    pub fn is_subset_of(&self, other: &Clause) -> bool {
        self.literals.is_subset(&other.literals)
    }

    /// Whether some *other* clause is a subset of this clause (the clause is subsumed).
    ///
    /// Comparison with an equal clause is skipped, so equal clauses never subsume one another.
    pub fn is_redundant<'c>(&self, others: impl IntoIterator<Item = &'c Clause>) -> bool {
        others
            .into_iter()
            .any(|other| other != self && other.is_subset_of(self))
    }

    /// Whether this clause is a subset of some *other* clause (the clause subsumes some clause).
    ///
    /// As with [is_redundant](Clause::is_redundant), equal clauses are skipped.
    pub fn is_redundant_superset<'c>(&self, others: impl IntoIterator<Item = &'c Clause>) -> bool {
        others
            .into_iter()
            .any(|other| other != self && self.is_subset_of(other))
    }

    /// The negation of the clause, as a collection of unit clauses.
    ///
    /// By De Morgan, the negation of a disjunction is the conjunction of the negation of each literal.
    /// So, this is the set of support seeded when refuting the clause.
    pub fn negate_all(&self) -> Vec<Clause> {
        self.literals
            .iter()
            .map(|literal| Clause::from(literal.negate()))
            .collect()
    }

    /// The clause with `literal` removed, if present.
    pub(crate) fn without(&self, literal: &Literal) -> Clause {
        let mut literals = self.literals.clone();
        literals.remove(literal);
        Clause { literals }
    }

    /// The union of the literals of two clauses.
    pub(crate) fn union(&self, other: &Clause) -> Clause {
        Clause {
            literals: self.literals.union(&other.literals).cloned().collect(),
        }
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.literals.is_empty() {
            return write!(f, "⊥");
        }
        let mut literals = self.literals.iter();
        if let Some(first) = literals.next() {
            write!(f, "{first}")?;
        }
        for literal in literals {
            write!(f, " {literal}")?;
        }
        Ok(())
    }
}

// A single literal is wrapped as a unit clause.
impl From<Literal> for Clause {
    fn from(literal: Literal) -> Self {
        let mut literals = BTreeSet::new();
        literals.insert(literal);
        Clause { literals }
    }
}

impl From<Vec<Literal>> for Clause {
    fn from(literals: Vec<Literal>) -> Self {
        Clause::new(literals)
    }
}

impl<const N: usize> From<[Literal; N]> for Clause {
    fn from(literals: [Literal; N]) -> Self {
        Clause::new(literals)
    }
}

impl FromIterator<Literal> for Clause {
    fn from_iter<T: IntoIterator<Item = Literal>>(iter: T) -> Self {
        Clause::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::coordinate::Coordinate;

    fn atom(name: &str, polarity: bool) -> Literal {
        Literal::atom(name, Coordinate::default(), polarity)
    }

    #[test]
    fn duplicates_collapse() {
        let clause = Clause::from([atom("A", true), atom("A", true), atom("A", true)]);
        assert_eq!(clause, Clause::from(atom("A", true)));
        assert!(clause.is_unit());
    }

    #[test]
    fn order_is_irrelevant() {
        let ab = Clause::from([atom("A", true), atom("B", false)]);
        let ba = Clause::from([atom("B", false), atom("A", true)]);
        assert_eq!(ab, ba);

        let mut set = std::collections::HashSet::new();
        set.insert(ab);
        assert!(set.contains(&ba));
    }

    #[test]
    fn validity() {
        assert!(Clause::from([atom("A", true), atom("A", false)]).is_valid());
        assert!(Clause::from([atom("B", true), atom("A", false), atom("A", true)]).is_valid());
        assert!(!Clause::from([atom("A", true), atom("B", false)]).is_valid());
        assert!(!Clause::empty().is_valid());
    }

    #[test]
    fn resolvable() {
        let a_or_b = Clause::from([atom("A", true), atom("B", true)]);
        let not_a = Clause::from(atom("A", false));
        let c = Clause::from(atom("C", true));

        assert!(a_or_b.is_resolvable_with(&not_a));
        assert!(not_a.is_resolvable_with(&a_or_b));
        assert!(!a_or_b.is_resolvable_with(&c));
        assert!(!Clause::empty().is_resolvable_with(&a_or_b));
    }

    #[test]
    fn redundancy() {
        let a = Clause::from(atom("A", true));
        let a_or_b = Clause::from([atom("A", true), atom("B", true)]);
        let c = Clause::from(atom("C", true));

        assert!(a_or_b.is_redundant([&a, &c]));
        assert!(!a.is_redundant([&a_or_b, &c]));

        assert!(a.is_redundant_superset([&a_or_b]));
        assert!(!a_or_b.is_redundant_superset([&a]));
    }

    #[test]
    fn equal_clauses_are_not_redundant() {
        let a_or_b = Clause::from([atom("A", true), atom("B", true)]);
        let b_or_a = Clause::from([atom("B", true), atom("A", true)]);

        assert!(!a_or_b.is_redundant([&b_or_a]));
        assert!(!a_or_b.is_redundant_superset([&b_or_a]));
    }

    #[test]
    fn negate_all() {
        let goal = Clause::from([atom("D", false), atom("A", false)]);
        let support = goal.negate_all();

        assert_eq!(support.len(), 2);
        assert!(support.contains(&Clause::from(atom("D", true))));
        assert!(support.contains(&Clause::from(atom("A", true))));
        assert!(support.iter().all(|clause| clause.is_unit()));
    }

    #[test]
    fn display() {
        let clause = Clause::from([atom("A", false), atom("B", true)]);
        assert_eq!(format!("{clause}"), "-A(0,0) B(0,0)");
        assert_eq!(format!("{}", Clause::empty()), "⊥");
    }
}
