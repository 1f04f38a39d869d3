//! Knowledge used to answer queries about cells.
//!
//! Each query is posed against a fresh collection of clauses made from two parts:
//! - The [axioms] for the current cell and its successors, which relate cues to the contents of adjacent cells.
//! - Facts from [memory], recording what was sensed at visited cells.
//!
//! ```rust
//! # use cave_logic::knowledge::{axioms, memory::BeliefMemory};
//! # use cave_logic::procedures::resolution::resolution;
//! # use cave_logic::structures::{clause::Clause, coordinate::Coordinate, label::Label, literal::Literal};
//! let here = Coordinate::new(1, 1);
//! let successors = [Coordinate::new(1, 2), Coordinate::new(2, 1)];
//!
//! let mut memory = BeliefMemory::default();
//! memory.memorize(here, Label::Safe);
//!
//! let mut premises = axioms::generate(here, &successors, false);
//! premises.extend(memory.clauses_for([here]));
//!
//! let goal = Clause::from(Literal::new(Label::Safe, Coordinate::new(1, 2), true));
//! assert!(resolution(premises, &goal).is_entailed());
//! ```

pub mod axioms;
pub mod memory;
