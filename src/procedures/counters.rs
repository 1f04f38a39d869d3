/// Counts for various things which count during a query, roughly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// The number of rounds of simplification, selection, and resolution.
    pub rounds: usize,

    /// A count of every pair of clauses resolved.
    pub pairs_resolved: usize,

    /// A count of every resolvent generated, including duplicates.
    pub resolvents: usize,

    /// A count of tautologies removed during simplification.
    pub tautologies_removed: usize,

    /// A count of subsumed clauses removed during simplification.
    pub subsumed_removed: usize,
}

impl Counters {
    /// Adds the counts of `other` to these counts.
    pub fn absorb(&mut self, other: &Counters) {
        self.rounds += other.rounds;
        self.pairs_resolved += other.pairs_resolved;
        self.resolvents += other.resolvents;
        self.tautologies_removed += other.tautologies_removed;
        self.subsumed_removed += other.subsumed_removed;
    }
}

impl std::fmt::Display for Counters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "rounds: {}, pairs: {}, resolvents: {}, tautologies removed: {}, subsumed removed: {}",
            self.rounds,
            self.pairs_resolved,
            self.resolvents,
            self.tautologies_removed,
            self.subsumed_removed
        )
    }
}
