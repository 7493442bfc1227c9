/*!
A procedure to obtain the unsatisfiable core of an unsatisfiable solve.

The core is read from the [trace](crate::db::trace): every original clause reachable from the premises of the final conflict is in the core.
If the formula is unsatisfiable without assumptions the final conflict is the conflict found at level `0`, and otherwise the conflict with the failed assumptions.

The core is stored as flags over original clauses and atoms, so [coreclause](GenericContext::coreclause) and [corelit](GenericContext::corelit) are lookups.
*/

use crate::{
    context::GenericContext,
    db::ClauseKey,
    misc::log::targets::{self},
    structures::literal::Literal,
    types::err::ErrorKind,
};

impl<R: rand::Rng + rand::SeedableRng> GenericContext<R> {
    /// Computes and stores the core of an unsatisfiable solve, if trace generation is enabled.
    pub fn compute_core(&mut self) -> Result<(), ErrorKind> {
        let Some(trace) = self.trace.as_ref() else {
            return Ok(());
        };

        let Some(conflict) = trace.final_conflict() else {
            log::warn!(target: targets::CORE, "No conflict noted for an unsatisfiable solve");
            return Ok(());
        };
        let originals = trace.reachable_originals(conflict);

        let mut core_clauses = Vec::default();
        core_clauses.try_reserve(self.clause_db.original_count())?;
        core_clauses.resize(self.clause_db.original_count(), false);

        let mut core_atoms = Vec::default();
        core_atoms.try_reserve(self.atom_db.count())?;
        core_atoms.resize(self.atom_db.count(), false);

        for index in originals {
            core_clauses[index] = true;
            let clause = self.clause_db.get(&ClauseKey::Original(index as u32))?;
            for literal in clause {
                core_atoms[literal.atom() as usize] = true;
            }
        }

        log::info!(target: targets::CORE, "Core of {} clauses", core_clauses.iter().filter(|in_core| **in_core).count());

        if let Some(trace) = self.trace.as_mut() {
            trace.set_core(core_clauses, core_atoms);
        }
        Ok(())
    }
}
