/*!
Adjustments to the heuristics of a context.

None of these affect the satisfiability of a formula, only the order in which a solve explores valuations.
*/

use crate::{
    config::{Activity, PhaseDefault},
    db::atom::Importance,
    misc::log::targets::{self},
    structures::literal::{CLiteral, Literal},
    types::err::ErrorKind,
};

use super::GenericContext;

impl<R: rand::Rng + rand::SeedableRng> GenericContext<R> {
    /// Sets the phase used when deciding on an atom without a saved or set phase.
    pub fn set_global_default_phase(&mut self, phase: PhaseDefault) {
        log::info!(target: targets::DECISION, "Default phase: {phase}");
        self.atom_db.config.default_phase.set(phase);
    }

    /// Sets the value to decide on for the atom of `literal`.
    ///
    /// A positive `phase` prefers `literal` true, a negative `phase` prefers `literal` false, and `0` clears any preference.
    pub fn set_default_phase_lit(&mut self, literal: CLiteral, phase: i32) -> Result<(), ErrorKind> {
        let atom = self.check_literal(literal)?;
        let preference = match phase.signum() {
            1 => Some(literal.polarity()),
            -1 => Some(!literal.polarity()),
            _ => None,
        };
        self.atom_db.set_phase_override(atom, preference);
        Ok(())
    }

    /// Forgets the saved phase of every atom.
    pub fn reset_phases(&mut self) {
        self.atom_db.clear_saved_phases();
    }

    /// Sets the activity of every atom to zero, leaving importance untouched.
    pub fn reset_scores(&mut self) {
        let initial_bump = self.config.atom_db.bump.value;
        self.atom_db.reset_scores(initial_bump);
    }

    /// Decides on the atom of `literal` before any atom of normal importance.
    pub fn set_more_important_lit(&mut self, literal: CLiteral) -> Result<(), ErrorKind> {
        let atom = self.check_literal(literal)?;
        self.atom_db.set_importance(atom, Importance::More);
        Ok(())
    }

    /// Decides on the atom of `literal` after every atom of normal importance.
    pub fn set_less_important_lit(&mut self, literal: CLiteral) -> Result<(), ErrorKind> {
        let atom = self.check_literal(literal)?;
        self.atom_db.set_importance(atom, Importance::Less);
        Ok(())
    }

    /// Sets the activity above which atom activities are rescored.
    pub fn adjust(&mut self, max_score: Activity) {
        self.atom_db.set_activity_ceiling(max_score);
    }

    /// Removes learnt clauses of length three or more until `keep_percent` percent remain, least useful first.
    ///
    /// Clauses which are the reason for some value are kept regardless.
    pub fn remove_learned(&mut self, keep_percent: u32) -> Result<usize, ErrorKind> {
        self.check_usable()?;
        let keep_percent = keep_percent.min(100) as usize;
        let count = self.clause_db.addition_count() * (100 - keep_percent) / 100;

        self.reduce_learned(count, false)
            .map_err(|e| self.note_error(e))
    }
}
