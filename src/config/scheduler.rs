/// Schedulers, for reduction of the clause database, etc.
///
/// Note: If two scheduled reductions coincide, only one reduction takes place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scheduler {
    /// Reduce the clause database every `luby` times a luby interrupt happens.
    pub luby: Option<u32>,

    /// Reduce the clause database every `conflict` conflicts.
    pub conflict: Option<u32>,
}
