/*!
What has been sensed at visited cells.

On the first visit to a cell exactly one [Label] is sensed there, and that label is recorded.
A record is never revised, as the contents of a cell and the cues sensed there do not change.

The facts of a record are the recorded label together with the denial of every other label.
So, for a cell where a stench was sensed, the facts are:

```none
(true, s), (false, w), (false, p), (false, t), (false, o), (false, c), (false, g)
```

Each fact is asserted as a unit clause in every query which involves the cell.

```rust
# use cave_logic::knowledge::memory::BeliefMemory;
# use cave_logic::structures::coordinate::Coordinate;
# use cave_logic::structures::label::Label;
let mut memory = BeliefMemory::default();
let here = Coordinate::new(1, 1);

assert!(memory.memorize(here, Label::Stench));
assert!(!memory.memorize(here, Label::Safe));

assert_eq!(memory.sensed(&here), Some(Label::Stench));
assert_eq!(memory.clauses_for([here]).len(), 7);
```
*/

use std::collections::HashMap;

use crate::{
    misc::log::targets::{self},
    structures::{clause::Clause, coordinate::Coordinate, label::Label, literal::Literal},
};

/// A known fact: whether a label holds at some cell.
pub type Fact = (bool, Label);

/// A record of the label sensed at each visited cell.
#[derive(Clone, Debug, Default)]
pub struct BeliefMemory {
    sensed: HashMap<Coordinate, Label>,
}

impl BeliefMemory {
    /// Records `label` as sensed at `cell`, if nothing has been recorded at `cell`.
    ///
    /// Returns true if a record was made.
    pub fn memorize(&mut self, cell: Coordinate, label: Label) -> bool {
        if self.sensed.contains_key(&cell) {
            return false;
        }
        log::debug!(target: targets::MEMORY, "Memorized {label} at {cell}");
        self.sensed.insert(cell, label);
        true
    }

    /// Whether anything has been recorded at `cell`.
    pub fn contains(&self, cell: &Coordinate) -> bool {
        self.sensed.contains_key(cell)
    }

    /// The label recorded at `cell`, if any.
    pub fn sensed(&self, cell: &Coordinate) -> Option<Label> {
        self.sensed.get(cell).copied()
    }

    /// Whether `label` is recorded at `cell`.
    pub fn is_known(&self, cell: &Coordinate, label: Label) -> bool {
        self.sensed(cell) == Some(label)
    }

    /// The count of cells with a record.
    pub fn len(&self) -> usize {
        self.sensed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sensed.is_empty()
    }

    /// The facts known at `cell`, if anything has been recorded there.
    pub fn facts(&self, cell: &Coordinate) -> Option<Vec<Fact>> {
        let sensed = self.sensed(cell)?;
        Some(
            Label::ALL
                .iter()
                .map(|label| (*label == sensed, *label))
                .collect(),
        )
    }

    /// Unit clauses for the facts known at each of `cells`.
    ///
    /// Cells without a record contribute nothing.
    pub fn clauses_for(&self, cells: impl IntoIterator<Item = Coordinate>) -> Vec<Clause> {
        let mut clauses = Vec::default();
        for cell in cells {
            if let Some(facts) = self.facts(&cell) {
                clauses.extend(
                    facts
                        .into_iter()
                        .map(|(holds, label)| Clause::from(Literal::new(label, cell, holds))),
                );
            }
        }
        clauses
    }

    /// Unit clauses for every known fact.
    pub fn all_clauses(&self) -> Vec<Clause> {
        self.clauses_for(self.sensed.keys().copied())
    }

    /// An iterator over each recorded cell and the label sensed there, in no particular order.
    pub fn records(&self) -> impl Iterator<Item = (&Coordinate, &Label)> {
        self.sensed.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_are_append_only() {
        let mut memory = BeliefMemory::default();
        let here = Coordinate::new(3, 2);

        assert!(memory.memorize(here, Label::Glow));
        assert!(!memory.memorize(here, Label::Chemicals));
        assert!(memory.is_known(&here, Label::Glow));
        assert!(!memory.is_known(&here, Label::Chemicals));
        assert_eq!(memory.len(), 1);
    }

    #[test]
    fn one_fact_holds() {
        let mut memory = BeliefMemory::default();
        let here = Coordinate::new(1, 1);
        memory.memorize(here, Label::Safe);

        let facts = memory.facts(&here).unwrap_or_default();
        assert_eq!(facts.len(), Label::ALL.len());
        assert_eq!(facts.iter().filter(|(holds, _)| *holds).count(), 1);
        assert!(facts.contains(&(true, Label::Safe)));
        assert!(facts.contains(&(false, Label::Wumpus)));
    }

    #[test]
    fn clauses_are_restricted() {
        let mut memory = BeliefMemory::default();
        let a = Coordinate::new(1, 1);
        let b = Coordinate::new(1, 2);
        let c = Coordinate::new(5, 5);
        memory.memorize(a, Label::Safe);
        memory.memorize(b, Label::Stench);

        let clauses = memory.clauses_for([a, c]);
        assert_eq!(clauses.len(), 7);
        assert!(clauses.iter().all(|clause| clause.is_unit()));
        assert!(clauses.contains(&Clause::from(Literal::new(Label::Safe, a, true))));
        assert!(!clauses.contains(&Clause::from(Literal::new(Label::Stench, b, true))));

        assert_eq!(memory.all_clauses().len(), 14);
    }

    #[test]
    fn unvisited_cells() {
        let memory = BeliefMemory::default();
        let here = Coordinate::default();
        assert!(memory.is_empty());
        assert!(!memory.contains(&here));
        assert_eq!(memory.facts(&here), None);
        assert!(memory.clauses_for([here]).is_empty());
    }
}
