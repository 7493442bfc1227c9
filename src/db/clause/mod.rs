/*!
A database of clauses, accessed through [clause keys](ClauseKey).

Clauses are distinguished by source and length:
- Original clauses --- given to the context --- of any length, including empty clauses and tautologies.
  Original clauses are never removed.
- Learnt unit clauses and learnt binary clauses.
  These are never removed, as both are cheap to keep and useful for as long as the formula is.
- Learnt long clauses (of length three or more).
  These are stored in reusable slots, ordered on an [IndexHeap] by [ActivityLBD], and removed when [reducing](ClauseDB::reduce_by) the database.

Whether, and how, a clause watches literals is managed by the context, as this depends on the current valuation.
*/

mod activity_glue;
pub use activity_glue::ActivityLBD;

mod db_clause;
pub use db_clause::dbClause;

use crate::{
    config::{dbs::ClauseDBConfig, Activity, Config, LBD},
    db::{keys::FormulaIndex, ClauseKey},
    generic::index_heap::IndexHeap,
    misc::log::targets::{self},
    structures::{clause::CClause, literal::CLiteral},
    types::err::{self, ErrorKind},
};

/// The clause database.
pub struct ClauseDB {
    /// Original clauses, indexed by the order in which they were added.
    original: Vec<dbClause>,

    /// Learnt unit clauses.
    addition_unit: Vec<CLiteral>,

    /// Learnt binary clauses.
    addition_binary: Vec<dbClause>,

    /// Learnt long clauses, with `None` for a slot whose clause has been removed.
    addition: Vec<Option<dbClause>>,

    /// Keys to empty slots of `addition`, already retokened.
    empty_keys: Vec<ClauseKey>,

    /// The activity and lbd of each learnt long clause, where each clause present in the database is active on the heap.
    activity_heap: IndexHeap<ActivityLBD>,

    /// A local configuration, typically derived from the configuration of a context.
    pub config: ClauseDBConfig,
}

impl ClauseDB {
    /// A new [ClauseDB] with local configuration options derived from `config`.
    pub fn new(config: &Config) -> Self {
        ClauseDB {
            original: Vec::default(),
            addition_unit: Vec::default(),
            addition_binary: Vec::default(),
            addition: Vec::default(),
            empty_keys: Vec::default(),
            activity_heap: IndexHeap::default(),

            config: config.clause_db.clone(),
        }
    }

    /// A count of original clauses.
    pub fn original_count(&self) -> usize {
        self.original.len()
    }

    /// A count of learnt long clauses currently in the database.
    pub fn addition_count(&self) -> usize {
        self.activity_heap.active_count()
    }

    /// A count of learnt unit and binary clauses.
    pub fn short_addition_count(&self) -> usize {
        self.addition_unit.len() + self.addition_binary.len()
    }

    /// Stores an original clause, returning the key to the clause.
    pub fn store_original(&mut self, clause: CClause) -> Result<ClauseKey, ErrorKind> {
        let index = FormulaIndex::try_from(self.original.len())
            .map_err(|_| err::ClauseDBError::StorageExhausted)?;
        self.original.try_reserve(1)?;

        let key = ClauseKey::Original(index);
        self.original.push(dbClause::new(key, clause));
        Ok(key)
    }

    /// Stores a learnt clause, returning the key to the clause.
    ///
    /// The order of the literals is preserved.
    pub fn store_addition(&mut self, clause: CClause, lbd: LBD) -> Result<ClauseKey, ErrorKind> {
        match clause.len() {
            0 => {
                log::error!(target: targets::CLAUSE_DB, "Attempt to store an empty learnt clause");
                Err(err::ClauseDBError::UnexpectedLength.into())
            }

            1 => {
                let index = FormulaIndex::try_from(self.addition_unit.len())
                    .map_err(|_| err::ClauseDBError::StorageExhausted)?;
                self.addition_unit.try_reserve(1)?;
                self.addition_unit.push(clause[0]);
                Ok(ClauseKey::AdditionUnit(index))
            }

            2 => {
                let index = FormulaIndex::try_from(self.addition_binary.len())
                    .map_err(|_| err::ClauseDBError::StorageExhausted)?;
                self.addition_binary.try_reserve(1)?;
                let key = ClauseKey::AdditionBinary(index);
                self.addition_binary.push(dbClause::new(key, clause));
                Ok(key)
            }

            _ => {
                let value = ActivityLBD {
                    activity: 1.0,
                    lbd,
                };

                let key = match self.empty_keys.pop() {
                    Some(key) => {
                        self.addition[key.index()] = Some(dbClause::new(key, clause));
                        key
                    }
                    None => {
                        let index = FormulaIndex::try_from(self.addition.len())
                            .map_err(|_| err::ClauseDBError::StorageExhausted)?;
                        self.addition.try_reserve(1)?;
                        self.activity_heap.try_reserve(1)?;
                        let key = ClauseKey::Addition(index, 0);
                        self.addition.push(Some(dbClause::new(key, clause)));
                        key
                    }
                };

                self.activity_heap.add(key.index(), value);
                self.activity_heap.activate(key.index());
                Ok(key)
            }
        }
    }

    /// The literals of the clause with key `key`.
    pub fn get(&self, key: &ClauseKey) -> Result<&[CLiteral], err::ClauseDBError> {
        match key {
            ClauseKey::Original(index) => self
                .original
                .get(*index as usize)
                .map(|stored| stored.clause())
                .ok_or(err::ClauseDBError::InvalidKeyIndex),

            ClauseKey::AdditionUnit(index) => self
                .addition_unit
                .get(*index as usize)
                .map(std::slice::from_ref)
                .ok_or(err::ClauseDBError::InvalidKeyIndex),

            ClauseKey::AdditionBinary(index) => self
                .addition_binary
                .get(*index as usize)
                .map(|stored| stored.clause())
                .ok_or(err::ClauseDBError::InvalidKeyIndex),

            ClauseKey::Addition(index, _) => match self.addition.get(*index as usize) {
                Some(Some(stored)) if stored.key() == *key => Ok(stored.clause()),
                Some(_) => Err(err::ClauseDBError::Missing),
                None => Err(err::ClauseDBError::InvalidKeyIndex),
            },
        }
    }

    /// The stored clause with key `key`, mutably, e.g. to move a watch.
    ///
    /// Unit clauses are not available, as a unit clause has nothing to rearrange.
    pub fn get_mut(&mut self, key: &ClauseKey) -> Result<&mut dbClause, err::ClauseDBError> {
        match key {
            ClauseKey::Original(index) => self
                .original
                .get_mut(*index as usize)
                .ok_or(err::ClauseDBError::InvalidKeyIndex),

            ClauseKey::AdditionUnit(_) => Err(err::ClauseDBError::UnexpectedLength),

            ClauseKey::AdditionBinary(index) => self
                .addition_binary
                .get_mut(*index as usize)
                .ok_or(err::ClauseDBError::InvalidKeyIndex),

            ClauseKey::Addition(index, _) => match self.addition.get_mut(*index as usize) {
                Some(Some(stored)) if stored.key() == *key => Ok(stored),
                Some(_) => Err(err::ClauseDBError::Missing),
                None => Err(err::ClauseDBError::InvalidKeyIndex),
            },
        }
    }

    /// The activity and lbd of the learnt long clause with key `key`, if present.
    pub fn activity_lbd(&self, key: &ClauseKey) -> Option<ActivityLBD> {
        match key {
            ClauseKey::Addition(index, _) if self.activity_heap.is_active(*index as usize) => {
                Some(*self.activity_heap.value_at(*index as usize))
            }
            _ => None,
        }
    }

    /// Bumps the activity of the clause with key `key`, if the key is to a learnt long clause.
    ///
    /// If the bumped activity would be greater than the maximum allowed activity, the activity of every clause is rescored.
    pub fn bump_activity(&mut self, key: &ClauseKey) {
        let ClauseKey::Addition(index, _) = key else {
            return;
        };
        let index = *index as usize;
        if !self.activity_heap.is_active(index) {
            return;
        }

        if self.activity_heap.value_at(index).activity + self.config.bump.value
            > self.config.bump.max
        {
            self.rescore_activity();
        }

        let bump = self.config.bump.value;
        self.activity_heap
            .apply_to_index(index, |value| value.activity += bump);
        self.activity_heap.heapify_if_active(index);
    }

    /// Increase the activity bump applied to clauses by a factor, so past bumps decay relative to future bumps.
    pub fn exponent_activity(&mut self) {
        let factor = 1.0 / (1.0 - self.config.decay.value);
        self.config.bump.value *= factor;
    }

    /// Rescores the activity of every learnt long clause and the activity bump, preserving relative order.
    fn rescore_activity(&mut self) {
        let factor = 1.0 / self.config.bump.max;
        log::trace!(target: targets::CLAUSE_DB, "Rescoring clause activity by {factor}");
        self.activity_heap
            .apply_to_all(|value| value.activity *= factor);
        self.config.bump.value = Activity::max(self.config.bump.value * factor, f64::MIN_POSITIVE);
    }

    /// Removes up to `count` learnt long clauses, in order of least usefulness, returning a count of clauses removed.
    ///
    /// A clause is spared if `locked` holds of the clause, or if `respect_lbd` and the lbd of the clause is within the lbd bound.
    pub fn reduce_by(
        &mut self,
        count: usize,
        respect_lbd: bool,
        locked: impl Fn(&dbClause) -> bool,
    ) -> Result<usize, ErrorKind> {
        let mut spared = Vec::default();
        let mut removed = 0;

        while removed < count {
            let Some(index) = self.activity_heap.pop_max() else {
                break;
            };

            let spare = match &self.addition[index] {
                Some(stored) => {
                    locked(stored)
                        || (respect_lbd
                            && self.activity_heap.value_at(index).lbd
                                <= self.config.lbd_bound.value)
                }
                None => {
                    log::error!(target: targets::REDUCTION, "Empty slot {index} on the activity heap");
                    return Err(err::ClauseDBError::Missing.into());
                }
            };

            match spare {
                true => spared.push(index),
                false => {
                    self.remove_addition(index)?;
                    removed += 1;
                }
            }
        }

        for index in spared {
            self.activity_heap.activate(index);
        }

        log::info!(
            target: targets::REDUCTION,
            "Removed {removed} learnt clauses, keeping {} long and {} short",
            self.addition_count(),
            self.short_addition_count()
        );
        Ok(removed)
    }

    /// Removes the learnt long clause at `index`.
    ///
    /// Watches on the clause are left in place, to be dropped when next examined.
    fn remove_addition(&mut self, index: usize) -> Result<(), ErrorKind> {
        let Some(removed) = self.addition[index].take() else {
            return Err(err::ClauseDBError::Missing.into());
        };
        self.activity_heap.remove(index);
        log::trace!(target: targets::CLAUSE_DB, "Removed {removed}");

        // A slot whose tokens are spent is abandoned.
        if let Ok(fresh_key) = removed.key().retoken() {
            self.empty_keys.push(fresh_key);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_by_length() {
        let mut clause_db = ClauseDB::new(&Config::default());

        assert_eq!(clause_db.store_original(vec![]), Ok(ClauseKey::Original(0)));
        assert_eq!(clause_db.store_original(vec![1, 2]), Ok(ClauseKey::Original(1)));
        assert_eq!(clause_db.store_addition(vec![3], 1), Ok(ClauseKey::AdditionUnit(0)));
        assert_eq!(clause_db.store_addition(vec![3, 4], 2), Ok(ClauseKey::AdditionBinary(0)));
        assert_eq!(clause_db.store_addition(vec![3, 4, 5], 3), Ok(ClauseKey::Addition(0, 0)));
        assert!(clause_db.store_addition(vec![], 0).is_err());

        assert_eq!(clause_db.get(&ClauseKey::AdditionUnit(0)), Ok([3].as_slice()));
        assert_eq!(clause_db.get(&ClauseKey::Original(0)), Ok([].as_slice()));
        assert_eq!(clause_db.original_count(), 2);
        assert_eq!(clause_db.addition_count(), 1);
        assert_eq!(clause_db.short_addition_count(), 2);
    }

    #[test]
    fn reduction_reuses_slots() {
        let mut clause_db = ClauseDB::new(&Config::default());

        let low = clause_db.store_addition(vec![1, 2, 3], 2);
        let high = clause_db.store_addition(vec![1, 2, 4], 5);
        let locked = clause_db.store_addition(vec![1, 2, 5], 7);
        assert_eq!(high, Ok(ClauseKey::Addition(1, 0)));

        let removed = clause_db.reduce_by(3, true, |stored| stored.clause()[2] == 5);
        assert_eq!(removed, Ok(1));
        assert_eq!(clause_db.addition_count(), 2);

        assert_eq!(clause_db.get(&ClauseKey::Addition(1, 0)), Err(err::ClauseDBError::Missing));
        assert!(low.is_ok_and(|key| clause_db.get(&key).is_ok()));
        assert!(locked.is_ok_and(|key| clause_db.get(&key).is_ok()));

        let reused = clause_db.store_addition(vec![6, 7, 8], 3);
        assert_eq!(reused, Ok(ClauseKey::Addition(1, 1)));

        let removed = clause_db.reduce_by(3, false, |_| false);
        assert_eq!(removed, Ok(3));
        assert_eq!(clause_db.addition_count(), 0);
    }

    #[test]
    fn bump_orders_removal() {
        let mut clause_db = ClauseDB::new(&Config::default());

        let first = clause_db.store_addition(vec![1, 2, 3], 4);
        let second = clause_db.store_addition(vec![1, 2, 4], 4);
        if let Ok(key) = first {
            clause_db.bump_activity(&key);
            assert!(clause_db.activity_lbd(&key).is_some_and(|value| value.lbd == 4 && value.activity > 0.0));
        }

        assert_eq!(clause_db.reduce_by(1, false, |_| false), Ok(1));
        assert!(first.is_ok_and(|key| clause_db.get(&key).is_ok()));
        assert!(second.is_ok_and(|key| clause_db.get(&key).is_err()));
    }
}
