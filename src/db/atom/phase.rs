/*!
Methods for choosing the value of an atom when deciding on the atom.

The value is the first of:
1. The saved phase of the atom, if phase saving is enabled and the atom has been valued before.
2. The phase set for the atom, if any.
3. The [default phase](crate::config::PhaseDefault) of the database.
*/

use crate::{
    config::{Activity, PhaseDefault},
    db::atom::AtomDB,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
};

impl AtomDB {
    /// The value of `atom` before the atom was last cleared, if any.
    pub fn saved_phase(&self, atom: Atom) -> Option<bool> {
        self.saved_phases[atom as usize]
    }

    /// Forgets the saved phase of every atom.
    pub fn clear_saved_phases(&mut self) {
        for phase in self.saved_phases.iter_mut().skip(1) {
            *phase = None;
        }
    }

    /// Sets the value to decide on for `atom`, or clears the value with `None`.
    ///
    /// The saved phase of the atom is forgotten, so the set value applies to the next decision on the atom.
    pub fn set_phase_override(&mut self, atom: Atom, phase: Option<bool>) {
        self.phase_overrides[atom as usize] = phase;
        self.saved_phases[atom as usize] = None;
    }

    /// The value to decide on for `atom`, if set.
    pub fn phase_override(&self, atom: Atom) -> Option<bool> {
        self.phase_overrides[atom as usize]
    }

    /// Adds the Jeroslow-Wang weight of an original clause of length `length` to each of the given literals.
    pub fn note_occurrences<'l>(&mut self, literals: impl Iterator<Item = &'l CLiteral>, length: usize) {
        let weight = (2.0 as Activity).powi(-(length.min(i32::MAX as usize) as i32));
        for literal in literals {
            self.jeroslow_wang[literal.atom() as usize][literal.polarity() as usize] += weight;
        }
    }

    /// The Jeroslow-Wang weight of `literal`.
    pub fn jeroslow_wang_weight(&self, literal: CLiteral) -> Activity {
        self.jeroslow_wang[literal.atom() as usize][literal.polarity() as usize]
    }

    /// The value to decide on for `atom`.
    ///
    /// `rng` is used only if the default phase is random and neither a saved phase nor a set phase applies.
    pub fn decision_phase(&self, atom: Atom, phase_saving: bool, rng: &mut impl rand::Rng) -> bool {
        if phase_saving {
            if let Some(saved) = self.saved_phase(atom) {
                return saved;
            }
        }

        if let Some(set) = self.phase_override(atom) {
            return set;
        }

        match self.config.default_phase.value {
            PhaseDefault::Negative => false,
            PhaseDefault::Positive => true,
            PhaseDefault::JeroslowWang => {
                let positive = self.jeroslow_wang_weight(CLiteral::new(atom, true));
                let negative = self.jeroslow_wang_weight(CLiteral::new(atom, false));
                positive > negative
            }
            PhaseDefault::Random => rng.random_bool(0.5),
        }
    }
}
