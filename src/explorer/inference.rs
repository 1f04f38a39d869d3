/*!
Conclusions about the successors of the current cell.

For each successor, and each label in the order of [Label::ALL], the [resolution engine](crate::procedures::resolution) is asked whether the premises entail the label at the successor.
The first label entailed is the conclusion for the successor, and no further labels are tried.
If no label is entailed, the successor has no conclusion.

Premises are fixed for the duration of a step, and so each query is independent of every other.
So, queries may be answered on a pool of [scoped threads](crossbeam::thread::scope), one per successor, with the results returned over a [channel](crossbeam::channel) and placed back in successor order.
Either way, the conclusions are the same.
*/

use crossbeam::channel::unbounded;

use crate::{
    config::{Config, MemoryScope},
    knowledge::{axioms, memory::BeliefMemory},
    misc::log::targets::{self},
    procedures::{counters::Counters, resolution::resolution_with_counters},
    structures::{clause::Clause, coordinate::Coordinate, label::Label, literal::Literal},
    types::err::{self},
};

/// The conclusion for each successor, in successor order, together with counts from the queries made.
#[derive(Clone, Debug, Default)]
pub struct Conclusions {
    pub by_cell: Vec<(Coordinate, Option<Label>)>,

    /// The count of queries made.
    pub queries: usize,

    /// Counts from every query, combined.
    pub counters: Counters,
}

impl Conclusions {
    /// The conclusion for `cell`, if `cell` is a successor with a conclusion.
    pub fn get(&self, cell: &Coordinate) -> Option<Label> {
        self.by_cell
            .iter()
            .find(|(successor, _)| successor == cell)
            .and_then(|(_, conclusion)| *conclusion)
    }

    fn push(&mut self, cell: Coordinate, conclusion: CellConclusion) {
        self.by_cell.push((cell, conclusion.label));
        self.queries += conclusion.queries;
        self.counters.absorb(&conclusion.counters);
    }
}

/// The conclusion for a single cell.
#[derive(Clone, Copy, Debug, Default)]
pub struct CellConclusion {
    pub label: Option<Label>,
    pub queries: usize,
    pub counters: Counters,
}

/// The premises of each query at `cell`.
///
/// Axioms for `cell` and `successors` together with facts from `memory`, limited to `cell` and `successors` unless the configured scope is global.
pub fn premises(
    cell: Coordinate,
    successors: &[Coordinate],
    memory: &BeliefMemory,
    config: &Config,
) -> Vec<Clause> {
    let mut premises = axioms::generate(cell, successors, config.exclusivity_axioms.value);

    match config.memory_scope.value {
        MemoryScope::Local => {
            let relevant = std::iter::once(cell).chain(successors.iter().copied());
            premises.extend(memory.clauses_for(relevant));
        }
        MemoryScope::Global => premises.extend(memory.all_clauses()),
    }

    premises
}

/// The first label entailed at `cell` by `premises`, if any.
pub fn conclude_cell(premises: &[Clause], cell: Coordinate) -> CellConclusion {
    let mut conclusion = CellConclusion::default();

    for label in Label::ALL {
        let goal = Clause::from(Literal::new(label, cell, true));
        let (report, counters) = resolution_with_counters(premises.iter().cloned(), &goal);
        conclusion.queries += 1;
        conclusion.counters.absorb(&counters);

        if report.is_entailed() {
            log::debug!(target: targets::INFERENCE, "Concluded {label} at {cell}");
            conclusion.label = Some(label);
            return conclusion;
        }
    }

    log::debug!(target: targets::INFERENCE, "No conclusion at {cell}");
    conclusion
}

/// Conclusions for each of `successors`, one after another.
pub fn conclude(premises: &[Clause], successors: &[Coordinate]) -> Conclusions {
    let mut conclusions = Conclusions::default();
    for successor in successors {
        conclusions.push(*successor, conclude_cell(premises, *successor));
    }
    conclusions
}

/// Conclusions for each of `successors`, with a scoped thread for each successor.
///
/// Fails if some thread fails to return a conclusion.
pub fn conclude_parallel(
    premises: &[Clause],
    successors: &[Coordinate],
) -> Result<Conclusions, err::ExplorerError> {
    let (tx, rx) = unbounded::<(usize, CellConclusion)>();

    let scoped = crossbeam::thread::scope(|scope| {
        for (index, successor) in successors.iter().enumerate() {
            let tx = tx.clone();
            scope.spawn(move |_| {
                let conclusion = conclude_cell(premises, *successor);
                let _ = tx.send((index, conclusion));
            });
        }
    });

    if scoped.is_err() {
        log::error!(target: targets::INFERENCE, "A query worker panicked");
        return Err(err::ExplorerError::QueryWorker);
    }

    drop(tx);
    let mut received: Vec<(usize, CellConclusion)> = rx.iter().collect();
    if received.len() != successors.len() {
        log::error!(target: targets::INFERENCE, "Missing conclusions from query workers");
        return Err(err::ExplorerError::QueryWorker);
    }
    received.sort_by_key(|(index, _)| *index);

    let mut conclusions = Conclusions::default();
    for (index, conclusion) in received {
        conclusions.push(successors[index], conclusion);
    }
    Ok(conclusions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor() -> (Coordinate, Vec<Coordinate>, BeliefMemory) {
        let here = Coordinate::new(2, 1);
        let successors = vec![Coordinate::new(3, 1), Coordinate::new(1, 1)];
        let mut memory = BeliefMemory::default();
        memory.memorize(Coordinate::new(1, 1), Label::Safe);
        memory.memorize(here, Label::Glow);
        (here, successors, memory)
    }

    #[test]
    fn teleporter_by_elimination() {
        let (here, successors, memory) = corridor();
        let premises = premises(here, &successors, &memory, &Config::default());
        let conclusions = conclude(&premises, &successors);

        assert_eq!(conclusions.get(&Coordinate::new(3, 1)), Some(Label::Teleporter));
        assert_eq!(conclusions.get(&Coordinate::new(1, 1)), Some(Label::Safe));
        // Three failures before the teleporter, and four before safe.
        assert_eq!(conclusions.queries, 3 + 4);
    }

    #[test]
    fn no_conclusion_without_facts() {
        let here = Coordinate::new(1, 1);
        let successors = vec![Coordinate::new(1, 2)];
        let premises = axioms::generate(here, &successors, false);

        let conclusion = conclude_cell(&premises, successors[0]);
        assert_eq!(conclusion.label, None);
        assert_eq!(conclusion.queries, Label::ALL.len());
    }

    #[test]
    fn local_and_global_scope() {
        let (here, successors, mut memory) = corridor();
        memory.memorize(Coordinate::new(9, 9), Label::Stench);

        let mut config = Config::default();
        let local = premises(here, &successors, &memory, &config);
        config.memory_scope.value = MemoryScope::Global;
        let global = premises(here, &successors, &memory, &config);

        assert_eq!(global.len(), local.len() + Label::ALL.len());
    }

    #[test]
    fn parallel_matches_sequential() {
        let (here, successors, memory) = corridor();
        let premises = premises(here, &successors, &memory, &Config::default());

        let sequential = conclude(&premises, &successors);
        let parallel = conclude_parallel(&premises, &successors).unwrap();

        assert_eq!(sequential.by_cell, parallel.by_cell);
        assert_eq!(sequential.queries, parallel.queries);
        assert_eq!(sequential.counters.rounds, parallel.counters.rounds);
    }
}
