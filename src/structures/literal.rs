//! Literals are a symbol holding at a coordinate, paired with a (boolean) polarity.
//!
//! The symbol of a literal is typically a [Label] of the cave, though arbitrary named atoms are supported to allow the [resolution engine](crate::procedures::resolution) to be used on its own.
//!
//! Equality and hashing are structural, over the symbol, coordinate, and polarity of a literal.
//! So, two literals built separately for the same property of the same cell are the same literal.
//!
//! ```rust
//! # use cave_logic::structures::literal::Literal;
//! # use cave_logic::structures::label::Label;
//! # use cave_logic::structures::coordinate::Coordinate;
//! let stench = Literal::new(Label::Stench, Coordinate::new(1, 1), true);
//!
//! assert!(stench.polarity());
//! assert!(!stench.negate().polarity());
//! assert_eq!(stench.negate().negate(), stench);
//! assert!(stench.is_complement_of(&stench.negate()));
//!
//! assert_eq!(format!("{}", stench.negate()), "-s(1,1)");
//! ```
//!
//! Literals are immutable values: [negate](Literal::negate) returns a fresh literal.

use std::sync::Arc;

use crate::structures::{coordinate::Coordinate, label::Label};

/// The proposition a literal asserts at a coordinate.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    /// A label of the cave.
    Label(Label),

    /// Some other named atom.
    Atom(Arc<str>),
}

/// A literal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    /// The symbol of the literal.
    symbol: Symbol,

    /// The coordinate the symbol is asserted of.
    coordinate: Coordinate,

    /// The polarity of the literal.
    polarity: bool,
}

impl Literal {
    /// A fresh literal asserting (or denying, if `polarity` is false) `label` at `coordinate`.
    pub fn new(label: Label, coordinate: Coordinate, polarity: bool) -> Self {
        Literal {
            symbol: Symbol::Label(label),
            coordinate,
            polarity,
        }
    }

    /// A fresh literal over a named atom.
    pub fn atom(name: &str, coordinate: Coordinate, polarity: bool) -> Self {
        Literal {
            symbol: Symbol::Atom(Arc::from(name)),
            coordinate,
            polarity,
        }
    }

    /// A fresh literal from a symbol.
    pub fn from_symbol(symbol: Symbol, coordinate: Coordinate, polarity: bool) -> Self {
        Literal {
            symbol,
            coordinate,
            polarity,
        }
    }

    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        Literal {
            symbol: self.symbol.clone(),
            coordinate: self.coordinate,
            polarity: !self.polarity,
        }
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// The label of the literal, if the symbol of the literal is a label.
    pub fn label(&self) -> Option<Label> {
        match self.symbol {
            Symbol::Label(label) => Some(label),
            Symbol::Atom(_) => None,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn polarity(&self) -> bool {
        self.polarity
    }

    /// Whether `other` is the same proposition with opposite polarity.
    pub fn is_complement_of(&self, other: &Literal) -> bool {
        self.polarity != other.polarity
            && self.coordinate == other.coordinate
            && self.symbol == other.symbol
    }

    pub fn is_deadly(&self) -> bool {
        self.label().is_some_and(|label| label.is_deadly())
    }

    pub fn is_hazard_poison_or_teleporter(&self) -> bool {
        self.label()
            .is_some_and(|label| label.is_hazard_poison_or_teleporter())
    }

    pub fn is_safe(&self) -> bool {
        self.label().is_some_and(|label| label.is_safe())
    }

    pub fn is_teleporter(&self) -> bool {
        self.label().is_some_and(|label| label.is_teleporter())
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::Label(label) => write!(f, "{label}"),
            Symbol::Atom(name) => write!(f, "{name}"),
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}{}", self.symbol, self.coordinate),
            false => write!(f, "-{}{}", self.symbol, self.coordinate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negation_is_an_involution() {
        let literals = [
            Literal::new(Label::Wumpus, Coordinate::new(3, 4), true),
            Literal::new(Label::Glow, Coordinate::new(0, 0), false),
            Literal::atom("W1", Coordinate::default(), true),
        ];
        for literal in literals {
            assert_eq!(literal.negate().negate(), literal);
            assert_ne!(literal.negate(), literal);
        }
    }

    #[test]
    fn structural_equality() {
        let a = Literal::atom("A", Coordinate::new(1, 2), true);
        let b = Literal::atom("A", Coordinate::new(1, 2), true);
        assert_eq!(a, b);

        let mut set = std::collections::HashSet::new();
        set.insert(a);
        assert!(!set.insert(b));
    }

    #[test]
    fn complements() {
        let here = Coordinate::new(1, 1);
        let there = Coordinate::new(1, 2);
        let w = Literal::new(Label::Wumpus, here, true);

        assert!(w.is_complement_of(&Literal::new(Label::Wumpus, here, false)));
        assert!(!w.is_complement_of(&Literal::new(Label::Wumpus, there, false)));
        assert!(!w.is_complement_of(&Literal::new(Label::Poison, here, false)));
        assert!(!w.is_complement_of(&w));
    }

    #[test]
    fn label_predicates() {
        let here = Coordinate::default();
        assert!(Literal::new(Label::Poison, here, true).is_deadly());
        assert!(Literal::new(Label::Teleporter, here, false).is_teleporter());
        assert!(Literal::new(Label::Safe, here, true).is_safe());
        assert!(!Literal::atom("o", here, true).is_safe());
        assert!(!Literal::atom("W", here, true).is_hazard_poison_or_teleporter());
    }
}
