//! The watch lists of a single atom.

use crate::{db::ClauseKey, structures::literal::CLiteral};

/// A watch on a binary clause.
///
/// As the other literal of a binary clause is fixed, the watch stores the literal to avoid accessing the clause during propagation.
#[derive(Clone, Copy, Debug)]
pub struct BinaryWatch {
    /// The *other* literal of the clause.
    pub literal: CLiteral,

    /// The key of the clause.
    pub key: ClauseKey,
}

/// A watch on a long clause.
#[derive(Clone, Copy, Debug)]
pub struct LongWatch {
    /// The key of the clause.
    pub key: ClauseKey,
}

/// Watch lists of an atom, distinguished by the polarity of the watched literal and the length of the clause.
#[derive(Default)]
pub struct WatchDB {
    pub positive_binary: Vec<BinaryWatch>,
    pub positive_long: Vec<LongWatch>,
    pub negative_binary: Vec<BinaryWatch>,
    pub negative_long: Vec<LongWatch>,
}
