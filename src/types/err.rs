//! Error types used in the library.
//!
//! - None of these arise from a query to the resolution engine, as entailment and non-entailment are both ordinary [reports](crate::reports).
//! - Likewise, an exploration which fails to reach the goal is reported with a [status](crate::explorer::Status) rather than an error.
//! - Errors arise from reading text (literals, clauses, layouts) or from failures external to the reasoning itself.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

/// The general error type, wrapping the specific errors.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Parse(ParseError),
    Layout(LayoutError),
    Explorer(ExplorerError),
}

/// Errors during parsing of literals and clauses.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An empty string, where some non-empty string was required.
    Empty,

    /// A negation character was read, but no candidate for negation was found.
    Negation,

    /// A symbol could not be read.
    Symbol,

    /// A coordinate could not be read, e.g. due to an unclosed bracket or a missing component.
    Coordinate,

    /// Some unspecific problem at a specific line.
    Line(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors when reading a layout for a [grid world](crate::world::grid::GridWorld).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LayoutError {
    /// The layout has no rows.
    Empty,

    /// The row at the given line has a different width to the first row.
    Ragged(usize),

    /// Some character does not stand for any tile.
    UnknownTile(char),

    /// There is no start cell.
    NoStart,

    /// There is more than one start cell.
    MultipleStarts,

    /// The layout is wider or taller than the bound at which cell weights are distinct.
    TooLarge,

    /// Some line could not be read.
    Line(usize),

    /// The probability of a wall is not a finite number.
    WallProbability,
}

impl From<LayoutError> for ErrorKind {
    fn from(e: LayoutError) -> Self {
        ErrorKind::Layout(e)
    }
}

/// Errors during an exploration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExplorerError {
    /// A worker used to answer queries in parallel failed to return.
    QueryWorker,
}

impl From<ExplorerError> for ErrorKind {
    fn from(e: ExplorerError) -> Self {
        ErrorKind::Explorer(e)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "Parse error: {e:?}"),
            Self::Layout(e) => write!(f, "Layout error: {e:?}"),
            Self::Explorer(e) => write!(f, "Explorer error: {e:?}"),
        }
    }
}
