/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for following a query or an exploration.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [resolution engine](crate::procedures::resolution)
    pub const RESOLUTION: &str = "resolution";

    /// Logs related to tautology and subsumption elimination
    pub const SUBSUMPTION: &str = "subsumption";

    /// Logs related to [axiom generation](crate::knowledge::axioms)
    pub const AXIOMS: &str = "axioms";

    /// Logs related to [belief memory](crate::knowledge::memory)
    pub const MEMORY: &str = "memory";

    /// Logs related to [conclusions](crate::explorer::inference) drawn about cells
    pub const INFERENCE: &str = "inference";

    /// Logs related to the [decision policy](crate::explorer::decision)
    pub const DECISION: &str = "decision";

    /// Logs related to [frontier queues](crate::generic::frontier_queue)
    pub const FRONTIER: &str = "frontier";

    /// Logs related to [worlds](crate::world)
    pub const WORLD: &str = "world";
}
