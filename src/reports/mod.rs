/*!
Reports from a query.

A query to the [resolution engine](crate::procedures::resolution) always ends in one of two reports.
Neither is an error: both are ordinary answers to the question asked.
*/

/// High-level reports regarding an entailment query.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Entailment {
    /// The empty clause was derived from the premises and the negated goal.
    Entailed,

    /// Resolution saturated without deriving the empty clause.
    NotEntailed,
}

impl Entailment {
    pub fn is_entailed(&self) -> bool {
        matches!(self, Self::Entailed)
    }
}

impl From<bool> for Entailment {
    fn from(value: bool) -> Self {
        match value {
            true => Self::Entailed,
            false => Self::NotEntailed,
        }
    }
}

impl std::fmt::Display for Entailment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Entailed => write!(f, "Entailed"),
            Self::NotEntailed => write!(f, "Not entailed"),
        }
    }
}
