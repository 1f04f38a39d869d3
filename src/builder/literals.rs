use std::str::FromStr;

use crate::{
    structures::{
        clause::Clause,
        coordinate::Coordinate,
        label::Label,
        literal::{Literal, Symbol},
    },
    types::err::{self},
};

/// Reads a coordinate of the form `(x,y)`, with whitespace permitted around each component.
fn parse_coordinate(s: &str) -> Result<Coordinate, err::ParseError> {
    let inner = s
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or(err::ParseError::Coordinate)?;

    let mut components = inner.split(',');
    let mut component = || -> Result<i32, err::ParseError> {
        components
            .next()
            .and_then(|c| c.trim().parse().ok())
            .ok_or(err::ParseError::Coordinate)
    };

    let x = component()?;
    let y = component()?;

    if components.next().is_some() {
        return Err(err::ParseError::Coordinate);
    }

    Ok(Coordinate::new(x, y))
}

/// Reads a symbol, as a label if the symbol is a single label character and otherwise as an atom.
fn parse_symbol(s: &str) -> Result<Symbol, err::ParseError> {
    if s.is_empty() || !s.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Err(err::ParseError::Symbol);
    }

    match Label::from_str(s) {
        Ok(label) => Ok(Symbol::Label(label)),
        Err(_) => Ok(Symbol::Atom(s.into())),
    }
}

impl FromStr for Literal {
    type Err = err::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(err::ParseError::Empty);
        }

        let (polarity, rest) = match s.strip_prefix(['-', '~']) {
            Some(rest) => (false, rest),
            None => (true, s),
        };

        if rest.is_empty() {
            return Err(err::ParseError::Negation);
        }

        let (symbol, coordinate) = match rest.find('(') {
            Some(index) => (&rest[..index], parse_coordinate(&rest[index..])?),
            None => (rest, Coordinate::default()),
        };

        Ok(Literal::from_symbol(parse_symbol(symbol)?, coordinate, polarity))
    }
}

impl FromStr for Clause {
    type Err = err::ParseError;

    /// Reads literals separated by whitespace.
    ///
    /// `|` and `∨` may be used as separators, and are otherwise ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut literals = Vec::default();
        for token in s.split_whitespace() {
            match token {
                "|" | "∨" => continue,
                _ => literals.push(Literal::from_str(token)?),
            }
        }

        match literals.is_empty() {
            true => Err(err::ParseError::Empty),
            false => Ok(Clause::from(literals)),
        }
    }
}
