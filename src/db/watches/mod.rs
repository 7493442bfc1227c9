/*!
Watch lists, indexed by literals.

A clause *watches* a literal if the clause is in the watch list of the literal.
Every clause of length two or more which is not a tautology watches two of its literals, and for a long clause those are the literals at positions `0` and `1` of the clause.
The watch list of a literal is examined when the literal becomes false, at which point each long clause in the list either moves the watch to some other literal without a false value, or asserts / conflicts on its other watched literal.

Watches on long clauses are removed lazily.
That is, when a clause is removed from the clause database its watches are kept until they are next examined, and dropped then.

During [BCP](crate::procedures::bcp) the watch list under examination is taken from the database and restored afterwards, leaving the database free for other updates.
This is sound, as a clause only moves a watch to a literal without a false value, and so never to the literal whose list is under examination.
*/

pub mod watch_db;
use watch_db::{BinaryWatch, LongWatch, WatchDB};

use crate::{
    db::ClauseKey,
    structures::literal::{CLiteral, Literal},
};

#[derive(Default)]
pub struct Watches {
    pub dbs: Vec<WatchDB>,
}

impl Watches {
    /// Grows the database to hold the watch lists of `atom_count` atoms.
    pub fn grow_to(&mut self, atom_count: usize) -> Result<(), std::collections::TryReserveError> {
        if self.dbs.len() < atom_count {
            self.dbs.try_reserve(atom_count - self.dbs.len())?;
            self.dbs.resize_with(atom_count, WatchDB::default);
        }
        Ok(())
    }

    /// Notes the binary clause `key` watches `literal`, where `other` is the other literal of the clause.
    pub fn watch_binary(&mut self, literal: CLiteral, other: CLiteral, key: ClauseKey) {
        let db = &mut self.dbs[literal.atom() as usize];
        let watch = BinaryWatch {
            literal: other,
            key,
        };
        match literal.polarity() {
            true => db.positive_binary.push(watch),
            false => db.negative_binary.push(watch),
        }
    }

    /// Notes the long clause `key` watches `literal`.
    pub fn watch_long(&mut self, literal: CLiteral, key: ClauseKey) {
        let db = &mut self.dbs[literal.atom() as usize];
        match literal.polarity() {
            true => db.positive_long.push(LongWatch { key }),
            false => db.negative_long.push(LongWatch { key }),
        }
    }

    /// Takes the binary watch list of `literal`, leaving an empty list until the list is [restored](Watches::restore_binary).
    pub fn take_binary(&mut self, literal: CLiteral) -> Vec<BinaryWatch> {
        let db = &mut self.dbs[literal.atom() as usize];
        match literal.polarity() {
            true => std::mem::take(&mut db.positive_binary),
            false => std::mem::take(&mut db.negative_binary),
        }
    }

    /// Restores a binary watch list taken with [take_binary](Watches::take_binary).
    pub fn restore_binary(&mut self, literal: CLiteral, list: Vec<BinaryWatch>) {
        let db = &mut self.dbs[literal.atom() as usize];
        match literal.polarity() {
            true => db.positive_binary = list,
            false => db.negative_binary = list,
        }
    }

    /// Takes the long watch list of `literal`, leaving an empty list until the list is [restored](Watches::restore_long).
    pub fn take_long(&mut self, literal: CLiteral) -> Vec<LongWatch> {
        let db = &mut self.dbs[literal.atom() as usize];
        match literal.polarity() {
            true => std::mem::take(&mut db.positive_long),
            false => std::mem::take(&mut db.negative_long),
        }
    }

    /// Restores a long watch list taken with [take_long](Watches::take_long).
    pub fn restore_long(&mut self, literal: CLiteral, list: Vec<LongWatch>) {
        let db = &mut self.dbs[literal.atom() as usize];
        match literal.polarity() {
            true => db.positive_long = list,
            false => db.negative_long = list,
        }
    }
}
