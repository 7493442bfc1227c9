/*!
Schedulers, used to interrupt a solve for some task.

These return true if an interrupt is due, and false otherwise.

- Restarts follow the luby sequence: a restart is due once the conflicts since the last restart reach the current element of the sequence, scaled by [luby_u](crate::config::Config::luby_u).
- Reductions of the clause database are due every [scheduler.luby](crate::config::Scheduler::luby) restarts, and every [scheduler.conflict](crate::config::Scheduler::conflict) conflicts.
*/

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::literal::Literal,
    types::err::ErrorKind,
};

impl<R: rand::Rng + rand::SeedableRng> GenericContext<R> {
    /// Returns whether it is time for a restart, based on whether fresh conflicts have reached the scaled luby element.
    pub fn luby_fresh_conflict_interrupt(&self) -> bool {
        let interval = self.config.luby_u.value.saturating_mul(self.counters.luby.current());
        self.counters.fresh_conflicts >= interval
    }

    /// Returns whether it is time for a reduction, based on whether total conflicts is a multiple of the configured interval.
    pub fn conflict_total_interrupt(&self) -> bool {
        match self.config.scheduler.conflict {
            Some(0) | None => false,
            Some(interval) => self.counters.total_conflicts % (interval as usize) == 0,
        }
    }

    /// Returns whether it is time for a reduction, based on whether total restarts is a multiple of the configured interval.
    pub fn restart_interrupt(&self) -> bool {
        match self.config.scheduler.luby {
            Some(0) | None => false,
            Some(interval) => self.counters.restarts % (interval as usize) == 0,
        }
    }

    /// Restarts the solve, forgetting every decision and assumption, and moves to the next element of the luby sequence.
    pub fn restart(&mut self) {
        log::info!(target: targets::RESTART, "Restart after {} conflicts", self.counters.fresh_conflicts);
        self.backjump(0);
        self.counters.luby.next();
        self.counters.fresh_conflicts = 0;
        self.counters.restarts += 1;
    }

    /// Removes half of the learnt clauses of length three or more, sparing those with an lbd within the lbd bound and those which are the reason for some value.
    pub fn reduce(&mut self) -> Result<usize, ErrorKind> {
        let count = self.clause_db.addition_count() / 2;
        self.reduce_learned(count, true)
    }

    /// Removes up to `count` learnt clauses of length three or more, sparing any clause which is the reason for some value.
    pub(crate) fn reduce_learned(&mut self, count: usize, respect_lbd: bool) -> Result<usize, ErrorKind> {
        let atom_db = &self.atom_db;
        let removed = self.clause_db.reduce_by(count, respect_lbd, |stored| {
            stored
                .first()
                .is_some_and(|literal| atom_db.reason_of(literal.atom()) == Some(stored.key()))
        })?;
        self.counters.reductions += 1;
        Ok(removed)
    }
}
