//! A clause as stored in the clause database.

use std::ops::Deref;

use crate::{
    db::ClauseKey,
    structures::{
        clause::{CClause, Clause},
        literal::CLiteral,
    },
};

/// A clause together with the key used to access the clause.
///
/// For a clause which watches literals, the watched literals are at positions `0` and `1`.
/// And, for a clause which is the reason for the value of some atom, the literal of the atom is at position `0`.
#[allow(non_camel_case_types)]
pub struct dbClause {
    key: ClauseKey,
    clause: CClause,
}

impl dbClause {
    /// A stored clause, from a key and the literals of the clause.
    pub fn new(key: ClauseKey, clause: CClause) -> Self {
        dbClause { key, clause }
    }

    /// The key of the clause.
    pub fn key(&self) -> ClauseKey {
        self.key
    }

    /// The literals of the clause.
    pub fn clause(&self) -> &[CLiteral] {
        &self.clause
    }

    /// Swaps the literals at positions `a` and `b`, e.g. to move a watch.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.clause.swap(a, b)
    }
}

impl Deref for dbClause {
    type Target = [CLiteral];

    fn deref(&self) -> &Self::Target {
        &self.clause
    }
}

impl std::fmt::Display for dbClause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.key, self.clause.as_dimacs(false))
    }
}
