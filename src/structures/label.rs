/*!
The fixed alphabet of properties a cell may have.

Labels split into two kinds:
- *Contents* of a cell: the hazard (the wumpus), poison, the teleporter, or nothing of note (safe).
- *Cues*, sensed at a cell when some adjacent cell holds a matching content: stench, chemicals, and glow.

Exactly one label is sensed at a visited cell, and so the labels are treated as mutually exclusive when recording what is known of a cell.

Each label has a single character representation, used when reading and writing literals.
*/

use std::str::FromStr;

use crate::types::err::{self};

/// A property of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Label {
    /// The (mobile, deadly) hazard.
    Wumpus,

    /// Poison.
    Poison,

    /// The teleporter, the way out.
    Teleporter,

    /// Nothing of note, the cell may be entered.
    Safe,

    /// Sensed next to the wumpus.
    Stench,

    /// Sensed next to poison.
    Chemicals,

    /// Sensed next to the teleporter.
    Glow,
}

impl Label {
    /// Every label, in the order candidate conclusions are tried.
    pub const ALL: [Label; 7] = [
        Label::Wumpus,
        Label::Poison,
        Label::Teleporter,
        Label::Safe,
        Label::Stench,
        Label::Chemicals,
        Label::Glow,
    ];

    /// Labels whose presence at a cell is deadly.
    pub const DEADLY: [Label; 2] = [Label::Wumpus, Label::Poison];

    /// The wumpus, poison, and the teleporter.
    pub const HAZARD_POISON_TELEPORTER: [Label; 3] =
        [Label::Wumpus, Label::Poison, Label::Teleporter];

    /// Labels for the contents of a cell.
    pub const CONTENTS: [Label; 4] = [
        Label::Wumpus,
        Label::Poison,
        Label::Teleporter,
        Label::Safe,
    ];

    /// Labels for cues sensed at a cell.
    pub const CUES: [Label; 3] = [Label::Stench, Label::Chemicals, Label::Glow];

    /// Pairs of a cue and the content it indicates on some adjacent cell.
    pub const CUE_PAIRS: [(Label, Label); 3] = [
        (Label::Stench, Label::Wumpus),
        (Label::Chemicals, Label::Poison),
        (Label::Glow, Label::Teleporter),
    ];

    pub fn is_deadly(&self) -> bool {
        Label::DEADLY.contains(self)
    }

    pub fn is_hazard_poison_or_teleporter(&self) -> bool {
        Label::HAZARD_POISON_TELEPORTER.contains(self)
    }

    pub fn is_safe(&self) -> bool {
        matches!(self, Label::Safe)
    }

    pub fn is_teleporter(&self) -> bool {
        matches!(self, Label::Teleporter)
    }

    pub fn is_cue(&self) -> bool {
        Label::CUES.contains(self)
    }

    pub fn as_char(&self) -> char {
        match self {
            Label::Wumpus => 'w',
            Label::Poison => 'p',
            Label::Teleporter => 't',
            Label::Safe => 'o',
            Label::Stench => 's',
            Label::Chemicals => 'c',
            Label::Glow => 'g',
        }
    }

    pub fn from_char(c: char) -> Option<Label> {
        match c {
            'w' => Some(Label::Wumpus),
            'p' => Some(Label::Poison),
            't' => Some(Label::Teleporter),
            'o' => Some(Label::Safe),
            's' => Some(Label::Stench),
            'c' => Some(Label::Chemicals),
            'g' => Some(Label::Glow),
            _ => None,
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Label {
    type Err = err::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Label::from_char(c).ok_or(err::ParseError::Symbol),
            (None, _) => Err(err::ParseError::Empty),
            _ => Err(err::ParseError::Symbol),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_round_trip() {
        for label in Label::ALL {
            assert_eq!(Label::from_char(label.as_char()), Some(label));
        }
        assert_eq!(Label::from_char('x'), None);
    }

    #[test]
    fn membership() {
        assert!(Label::Wumpus.is_deadly());
        assert!(Label::Poison.is_deadly());
        assert!(!Label::Teleporter.is_deadly());

        assert!(Label::Teleporter.is_hazard_poison_or_teleporter());
        assert!(!Label::Safe.is_hazard_poison_or_teleporter());
        assert!(!Label::Glow.is_hazard_poison_or_teleporter());

        assert!(Label::Safe.is_safe());
        assert!(Label::Teleporter.is_teleporter());
        assert!(Label::Glow.is_cue());
    }

    #[test]
    fn every_label_is_content_or_cue() {
        for label in Label::ALL {
            assert_ne!(Label::CONTENTS.contains(&label), label.is_cue());
        }
    }
}
