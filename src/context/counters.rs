use std::time::Duration;

/// Counts for various things which count, roughly.
///
/// Counts are kept across solves, and cleared only on a [reset](crate::context::GenericContext::reset).
pub struct Counters {
    /// A count of every conflict seen.
    pub total_conflicts: usize,

    /// A count of conflicts seen since the last restart.
    ///
    /// As u32 rather than a usize for easier interaction with scheduling variables.
    pub fresh_conflicts: u32,

    /// A count of all (free) decisions made.
    pub total_decisions: usize,

    /// A count of all literals propagated.
    pub total_propagations: usize,

    /// The total number of iterations through a solve.
    pub total_iterations: usize,

    /// The number of restarts.
    pub restarts: usize,

    /// The number of reductions of the clause database.
    pub reductions: usize,

    /// The processor time of the process taken by solves.
    pub time: Duration,

    /// The current element in the luby sequence.
    pub luby: crate::generic::luby::Luby,
}

impl Default for Counters {
    fn default() -> Self {
        Counters {
            total_conflicts: 0,
            fresh_conflicts: 0,

            total_decisions: 0,
            total_propagations: 0,
            total_iterations: 0,

            restarts: 0,
            reductions: 0,
            time: Duration::from_secs(0),

            luby: crate::generic::luby::Luby::default(),
        }
    }
}
