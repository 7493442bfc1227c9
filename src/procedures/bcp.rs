/*!
Boolean constraint propagation.

# Overview

Propagation takes a literal which has been valued true and examines each clause watching the negation of the literal, as the watched literal of each such clause has become false.

- Binary clauses are examined first, as the other literal of a binary clause is stored in the watch itself.
  If the other literal is false, the clause is a conflict, and if the other literal has no value the literal is asserted.
- Long clauses are examined second.
  A long clause keeps its watched literals at positions `0` and `1`, and after examination the false watched literal is at position `1`.
  If the literal at position `0` is true, the watch is kept.
  Otherwise, the clause looks for some literal without a false value to watch in place of the false literal.
  If there is no such literal, the clause asserts the literal at position `0`, or is a conflict if that literal is also false.

Watches to clauses removed from the clause database are dropped when examined.

[propagate](GenericContext::propagate) repeats propagation on each literal of the trail yet to be propagated, until either no such literal remains or a conflict is found.

# Soundness

The watch lists under examination are taken from the watch database for the duration of propagation on a literal, and restored afterwards.
This is safe, as a clause only moves a watch to some literal which is not false, and so never to the list under examination.
*/

use crate::{
    context::GenericContext,
    db::ClauseKey,
    misc::log::targets::{self},
    structures::literal::CLiteral,
    types::err::{self},
};

/// The result of examining a long clause watching a false literal.
enum LongWatchOk {
    /// The other watched literal is true, so the watch is kept.
    Satisfied,

    /// The watch moved to some other literal of the clause.
    Moved,

    /// Every unwatched literal is false, and the other watched literal has no value.
    Unit(CLiteral),

    /// Every literal of the clause is false.
    Conflict,
}

impl<R: rand::Rng + rand::SeedableRng> GenericContext<R> {
    /// Propagates each literal on the trail yet to be propagated.
    ///
    /// On a conflict, returns the key of the conflicting clause, as a [BCPError::Conflict](err::BCPError::Conflict).
    pub fn propagate(&mut self) -> Result<(), err::BCPError> {
        while let Some(literal) = self.trail.next_to_propagate() {
            self.counters.total_propagations += 1;
            self.bcp(literal)?;
        }
        Ok(())
    }

    /// Propagates `literal`, which is true on the current valuation.
    ///
    /// For documentation, see [procedures::bcp](crate::procedures::bcp).
    pub fn bcp(&mut self, literal: CLiteral) -> Result<(), err::BCPError> {
        let false_literal = -literal;

        let binary_list = self.watches.take_binary(false_literal);
        let mut result = Ok(());

        for watch in &binary_list {
            match self.atom_db.value_of_literal(watch.literal) {
                Some(true) => {}

                Some(false) => {
                    log::trace!(target: targets::PROPAGATION, "Binary conflict on {}", watch.key);
                    result = Err(err::BCPError::Conflict(watch.key));
                    break;
                }

                None => self.assign(watch.literal, Some(watch.key)),
            }
        }

        self.watches.restore_binary(false_literal, binary_list);
        result?;

        let mut long_list = self.watches.take_long(false_literal);
        let mut index = 0;

        while index < long_list.len() {
            let key = long_list[index].key;

            match self.examine_long_watch(key, false_literal) {
                Ok(LongWatchOk::Satisfied) => index += 1,

                Ok(LongWatchOk::Moved) => {
                    long_list.swap_remove(index);
                }

                Ok(LongWatchOk::Unit(asserted)) => {
                    self.assign(asserted, Some(key));
                    index += 1;
                }

                Ok(LongWatchOk::Conflict) => {
                    log::trace!(target: targets::PROPAGATION, "Long conflict on {key}");
                    result = Err(err::BCPError::Conflict(key));
                    break;
                }

                Err(err::ClauseDBError::Missing) => {
                    log::trace!(target: targets::PROPAGATION, "Dropped watch to removed clause {key}");
                    long_list.swap_remove(index);
                }

                Err(e) => {
                    log::error!(target: targets::PROPAGATION, "Watch to {key} failed: {e:?}");
                    result = Err(err::BCPError::CorruptWatch);
                    break;
                }
            }
        }

        self.watches.restore_long(false_literal, long_list);
        result
    }

    /// Examines the long clause `key`, which watches `false_literal`.
    fn examine_long_watch(
        &mut self,
        key: ClauseKey,
        false_literal: CLiteral,
    ) -> Result<LongWatchOk, err::ClauseDBError> {
        let clause = self.clause_db.get_mut(&key)?;

        if clause[0] == false_literal {
            clause.swap(0, 1);
        }
        if clause[1] != false_literal {
            return Err(err::ClauseDBError::UnexpectedLength);
        }

        let other = clause[0];
        if self.atom_db.value_of_literal(other) == Some(true) {
            return Ok(LongWatchOk::Satisfied);
        }

        for position in 2..clause.len() {
            let candidate = clause[position];
            if self.atom_db.value_of_literal(candidate) != Some(false) {
                clause.swap(1, position);
                self.watches.watch_long(candidate, key);
                return Ok(LongWatchOk::Moved);
            }
        }

        match self.atom_db.value_of_literal(other) {
            None => Ok(LongWatchOk::Unit(other)),
            _ => Ok(LongWatchOk::Conflict),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{config::Config, context::Context};

    use super::*;

    fn context_with(atoms: usize, clauses: &[&[CLiteral]]) -> Context {
        let mut ctx = Context::from_config(Config::default());
        for _ in 0..atoms {
            assert!(ctx.increase_max_var().is_ok());
        }
        for clause in clauses {
            for literal in clause.iter() {
                assert!(ctx.add(*literal).is_ok());
            }
            assert!(ctx.add(0).is_ok());
        }
        ctx
    }

    #[test]
    fn binary_chain() {
        let mut ctx = context_with(3, &[&[-1, 2], &[-2, 3]]);

        ctx.trail.new_level();
        ctx.assign(1, None);
        assert_eq!(ctx.propagate(), Ok(()));
        assert_eq!(ctx.atom_db.value_of(3), Some(true));
        assert_eq!(ctx.atom_db.reason_of(3), Some(ClauseKey::Original(1)));
    }

    #[test]
    fn long_unit_and_conflict() {
        let mut ctx = context_with(4, &[&[1, 2, 3], &[1, 2, -3]]);

        ctx.trail.new_level();
        ctx.assign(-1, None);
        assert_eq!(ctx.propagate(), Ok(()));
        assert_eq!(ctx.atom_db.value_of(3), None);

        ctx.trail.new_level();
        ctx.assign(-2, None);
        let result = ctx.propagate();
        assert!(matches!(result, Err(err::BCPError::Conflict(_))));
    }

    #[test]
    fn watch_moves() {
        let mut ctx = context_with(4, &[&[1, 2, 3, 4]]);

        ctx.trail.new_level();
        ctx.assign(-1, None);
        ctx.assign(-2, None);
        assert_eq!(ctx.propagate(), Ok(()));
        assert_eq!(ctx.atom_db.value_of(3), None);

        ctx.trail.new_level();
        ctx.assign(-3, None);
        assert_eq!(ctx.propagate(), Ok(()));
        assert_eq!(ctx.atom_db.value_of(4), Some(true));
    }
}
