//! Axioms relating the cues sensed at a cell to the contents of the cells around it.
//!
//! For a cell *c* with successors *n₁ … nₖ*, and each pair of a cue and the content it indicates (stench and the wumpus, chemicals and poison, glow and the teleporter), the cue is sensed at *c* just in case some successor holds the content.
//! As clauses:
//! - `-cue(c) content(n₁) … content(nₖ)`, if the cue is sensed some successor holds the content.
//! - `cue(c) -content(nᵢ)`, for each successor, if the cue is not sensed the successor does not hold the content.
//!
//! The second family could be written as a single clause, but unit-sized steps keep pairwise resolution effective.
//!
//! In addition:
//! - `-w(c) -w(nᵢ)`, for each successor, as the wumpus is in at most one of the cell and the successor.
//! - `s(c) c(c) g(c) o(nᵢ)`, for each successor, as a successor is safe if no cue is sensed.
//!
//! And, optionally, for each successor and each pair of distinct labels, `-l(nᵢ) -l'(nᵢ)`, as at most one label holds of a cell.
//!
//! Axioms depend only on adjacency, and are regenerated for each query.
//!
//! ```rust
//! # use cave_logic::knowledge::axioms::cue_implies_content;
//! # use cave_logic::structures::coordinate::Coordinate;
//! # use cave_logic::structures::label::Label;
//! let here = Coordinate::new(1, 1);
//! let successors = [Coordinate::new(1, 2), Coordinate::new(2, 1)];
//!
//! let clause = cue_implies_content(Label::Stench, Label::Wumpus, here, &successors);
//! assert_eq!(format!("{clause}"), "w(1,2) w(2,1) -s(1,1)");
//! ```

use crate::{
    misc::log::targets::{self},
    structures::{clause::Clause, coordinate::Coordinate, label::Label, literal::Literal},
};

/// `-cue(cell) content(n₁) … content(nₖ)`.
pub fn cue_implies_content(
    cue: Label,
    content: Label,
    cell: Coordinate,
    successors: &[Coordinate],
) -> Clause {
    std::iter::once(Literal::new(cue, cell, false))
        .chain(
            successors
                .iter()
                .map(|successor| Literal::new(content, *successor, true)),
        )
        .collect()
}

/// `cue(cell) -content(nᵢ)`, for each successor.
pub fn no_cue_implies_no_content(
    cue: Label,
    content: Label,
    cell: Coordinate,
    successors: &[Coordinate],
) -> Vec<Clause> {
    successors
        .iter()
        .map(|successor| {
            Clause::from([
                Literal::new(cue, cell, true),
                Literal::new(content, *successor, false),
            ])
        })
        .collect()
}

/// `-w(cell) -w(nᵢ)`, for each successor.
pub fn wumpus_exclusion(cell: Coordinate, successors: &[Coordinate]) -> Vec<Clause> {
    successors
        .iter()
        .map(|successor| {
            Clause::from([
                Literal::new(Label::Wumpus, cell, false),
                Literal::new(Label::Wumpus, *successor, false),
            ])
        })
        .collect()
}

/// `s(cell) c(cell) g(cell) o(nᵢ)`, for each successor.
pub fn passability(cell: Coordinate, successors: &[Coordinate]) -> Vec<Clause> {
    successors
        .iter()
        .map(|successor| {
            Label::CUES
                .iter()
                .map(|cue| Literal::new(*cue, cell, true))
                .chain(std::iter::once(Literal::new(Label::Safe, *successor, true)))
                .collect()
        })
        .collect()
}

/// `-l(cell) -l'(cell)`, for each pair of distinct labels.
pub fn label_exclusivity(cell: Coordinate) -> Vec<Clause> {
    let mut clauses = Vec::default();
    for (index, first) in Label::ALL.iter().enumerate() {
        for second in Label::ALL.iter().skip(index + 1) {
            clauses.push(Clause::from([
                Literal::new(*first, cell, false),
                Literal::new(*second, cell, false),
            ]));
        }
    }
    clauses
}

/// Every axiom for `cell` and its successors.
///
/// If `exclusivity` is set, [label_exclusivity] is included for each successor.
pub fn generate(cell: Coordinate, successors: &[Coordinate], exclusivity: bool) -> Vec<Clause> {
    let mut axioms = Vec::default();

    for (cue, content) in Label::CUE_PAIRS {
        axioms.push(cue_implies_content(cue, content, cell, successors));
        axioms.extend(no_cue_implies_no_content(cue, content, cell, successors));
    }

    axioms.extend(wumpus_exclusion(cell, successors));
    axioms.extend(passability(cell, successors));

    if exclusivity {
        for successor in successors {
            axioms.extend(label_exclusivity(*successor));
        }
    }

    log::trace!(target: targets::AXIOMS, "{} axioms for {cell}", axioms.len());

    axioms
}
