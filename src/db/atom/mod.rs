/*!
A database of 'atom related' things, accessed via fields on an [AtomDB] struct.

Things include:
- A current (often partial) [valuation](Valuation), together with the level and reason of each value.
- The previous value of each atom (its 'saved phase'), and any phase set for the atom.
- An [IndexHeap] recording the [priority](Priority) of atoms, where any atom without a value is 'active' on the heap.
- A record of which atoms were valued during the most recent solve.

Every per-atom structure is indexed by atoms directly.
The atom `0` is valued true on creation of the database, and is never removed from the valuation or placed on the heap.
*/

pub mod activity;
pub mod phase;

use crate::{
    config::{dbs::AtomDBConfig, Activity, Config},
    db::{ClauseKey, LevelIndex},
    generic::index_heap::IndexHeap,
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX, TOP_ATOM},
        literal::{CLiteral, Literal},
        valuation::{VValuation, Valuation},
    },
    types::err::{self, ErrorKind},
};

/// How important an atom is when choosing an atom to decide on.
///
/// Every atom of a higher importance is decided on before any atom of a lower importance, regardless of activity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Importance {
    Less,
    #[default]
    Normal,
    More,
}

/// The priority of an atom when choosing an atom to decide on.
///
/// Priorities are ordered by importance, then activity, with ties broken in favour of the lower atom.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Priority {
    pub importance: Importance,
    pub activity: Activity,
    atom: Atom,
}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        match self.importance.cmp(&other.importance) {
            std::cmp::Ordering::Equal => {}
            order => return Some(order),
        }
        match self.activity.partial_cmp(&other.activity)? {
            std::cmp::Ordering::Equal => {}
            order => return Some(order),
        }
        Some(other.atom.cmp(&self.atom))
    }
}

/// The atom database.
pub struct AtomDB {
    /// A current (often partial) [valuation](Valuation).
    valuation: VValuation,

    /// The level at which each atom was valued, if valued.
    levels: Vec<Option<LevelIndex>>,

    /// The clause from which the value of each atom was derived, if valued by propagation.
    reasons: Vec<Option<ClauseKey>>,

    /// The value of each atom before the atom was last cleared.
    saved_phases: Vec<Option<bool>>,

    /// A value to decide on for each atom, taking precedence over the default phase.
    phase_overrides: Vec<Option<bool>>,

    /// The Jeroslow-Wang weight of each literal, as a pair of the negative and positive literal weights.
    jeroslow_wang: Vec<[Activity; 2]>,

    /// An [IndexHeap] recording the priority of atoms, where any atom without a value is 'active' on the heap.
    priority_heap: IndexHeap<Priority>,

    /// Whether each atom was valued during the most recent solve.
    used: Vec<bool>,

    /// A local configuration, typically derived from the configuration of a context.
    pub config: AtomDBConfig,
}

impl AtomDB {
    /// A new [AtomDB] with local configuration options derived from `config`.
    pub fn new(config: &Config) -> Self {
        let mut db = AtomDB {
            valuation: vec![Some(true)],
            levels: vec![Some(0)],
            reasons: vec![None],
            saved_phases: vec![Some(true)],
            phase_overrides: vec![None],
            jeroslow_wang: vec![[0.0, 0.0]],
            priority_heap: IndexHeap::default(),
            used: vec![false],

            config: config.atom_db.clone(),
        };
        db.priority_heap.add(
            TOP_ATOM as usize,
            Priority {
                atom: TOP_ATOM,
                ..Default::default()
            },
        );
        db
    }

    /// A count of atoms in the [AtomDB], including the internal atom `0`.
    pub fn count(&self) -> usize {
        self.valuation.len()
    }

    /// The current valuation.
    pub fn valuation(&self) -> &VValuation {
        &self.valuation
    }

    /// A fresh atom --- on Ok the atom is part of the language of the context.
    ///
    /// Space for the atom is reserved in each structure before any structure is updated.
    /// So, on an error, the database is unchanged.
    pub fn fresh_atom(&mut self) -> Result<Atom, ErrorKind> {
        let atom = match Atom::try_from(self.valuation.len()) {
            Ok(atom) if atom <= ATOM_MAX => atom,
            _ => return Err(err::AtomDBError::AtomsExhausted.into()),
        };

        self.valuation.try_reserve(1)?;
        self.levels.try_reserve(1)?;
        self.reasons.try_reserve(1)?;
        self.saved_phases.try_reserve(1)?;
        self.phase_overrides.try_reserve(1)?;
        self.jeroslow_wang.try_reserve(1)?;
        self.used.try_reserve(1)?;
        self.priority_heap.try_reserve(1)?;

        self.valuation.push(None);
        self.levels.push(None);
        self.reasons.push(None);
        self.saved_phases.push(None);
        self.phase_overrides.push(None);
        self.jeroslow_wang.push([0.0, 0.0]);
        self.used.push(false);

        self.priority_heap.add(
            atom as usize,
            Priority {
                atom,
                ..Default::default()
            },
        );
        self.priority_heap.activate(atom as usize);

        Ok(atom)
    }

    /// The value of `atom`, if valued.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.valuation.value_of(atom)
    }

    /// The value of `literal`, if the atom of `literal` is valued.
    pub fn value_of_literal(&self, literal: CLiteral) -> Option<bool> {
        self.value_of(literal.atom())
            .map(|value| value == literal.polarity())
    }

    /// The level at which `atom` was valued, if valued.
    pub fn level_of(&self, atom: Atom) -> Option<LevelIndex> {
        self.levels[atom as usize]
    }

    /// The clause from which the value of `atom` was derived, if valued by propagation.
    pub fn reason_of(&self, atom: Atom) -> Option<ClauseKey> {
        self.reasons[atom as usize]
    }

    /// Values the atom of `literal` to match the polarity of `literal`, noting the level and reason of the value.
    ///
    /// # Soundness
    /// Does not store the literal on the trail.
    pub fn set_value(&mut self, literal: CLiteral, level: LevelIndex, reason: Option<ClauseKey>) {
        let atom = literal.atom() as usize;
        log::trace!(target: targets::VALUATION, "Set {literal} at level {level}");
        self.valuation[atom] = Some(literal.polarity());
        self.levels[atom] = Some(level);
        self.reasons[atom] = reason;
        self.used[atom] = true;
    }

    /// Clears the value of `atom`, saving the value as the phase of the atom and returning the atom to the priority heap.
    pub fn drop_value(&mut self, atom: Atom) {
        let index = atom as usize;
        if let Some(value) = self.valuation[index].take() {
            self.saved_phases[index] = Some(value);
        }
        self.levels[index] = None;
        self.reasons[index] = None;
        self.priority_heap.activate(index);
    }

    /// Forgets which atoms were valued during the previous solve, noting only those atoms currently valued.
    pub fn refresh_used(&mut self) {
        for (used, value) in self.used.iter_mut().zip(self.valuation.iter()) {
            *used = value.is_some();
        }
    }

    /// Whether `atom` was valued during the most recent solve.
    pub fn was_used(&self, atom: Atom) -> bool {
        self.used[atom as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_atoms_are_unvalued() {
        let mut atom_db = AtomDB::new(&Config::default());
        assert_eq!(atom_db.count(), 1);
        assert_eq!(atom_db.value_of(TOP_ATOM), Some(true));

        assert_eq!(atom_db.fresh_atom(), Ok(1));
        assert_eq!(atom_db.fresh_atom(), Ok(2));
        assert_eq!(atom_db.value_of(2), None);
        assert_eq!(atom_db.level_of(2), None);
    }

    #[test]
    fn drop_saves_phase() {
        let mut atom_db = AtomDB::new(&Config::default());
        let _ = atom_db.fresh_atom();

        atom_db.set_value(-1, 3, None);
        assert_eq!(atom_db.value_of_literal(-1), Some(true));
        assert_eq!(atom_db.value_of_literal(1), Some(false));
        assert_eq!(atom_db.level_of(1), Some(3));

        atom_db.drop_value(1);
        assert_eq!(atom_db.value_of(1), None);
        assert_eq!(atom_db.saved_phase(1), Some(false));
        assert!(atom_db.was_used(1));

        atom_db.refresh_used();
        assert!(!atom_db.was_used(1));
    }

    #[test]
    fn priority_order() {
        let low_atom = Priority {
            importance: Importance::Normal,
            activity: 1.0,
            atom: 1,
        };
        let high_atom = Priority { atom: 2, ..low_atom };
        assert!(low_atom > high_atom);

        let more_important = Priority {
            importance: Importance::More,
            activity: 0.0,
            atom: 3,
        };
        assert!(more_important > low_atom);

        let more_active = Priority {
            activity: 2.0,
            ..high_atom
        };
        assert!(more_active > low_atom);
    }
}
