use crate::{
    config::Activity,
    db::atom::{AtomDB, Importance},
    misc::log::targets::{self},
    structures::atom::Atom,
};

/// Methods for inspecting and mutating the priority of atoms.
///
/// The role of these methods is tied to the use of [VSIDS](crate::config::vsids).
impl AtomDB {
    /// Bumps the activities of each atom in the given iterator.
    ///
    /// If the bumped activity would be greater than the maximum allowed activity, the activity of every atom is rescored.
    pub fn bump_relative<A: Iterator<Item = Atom>>(&mut self, atoms: A) {
        for atom in atoms {
            if self.activity_of(atom) + self.config.bump.value > self.config.bump.max {
                self.rescore_activity()
            }
            self.bump_activity(atom);
        }
    }

    /// Pops the atom of highest priority from the heap.
    ///
    /// The atom may have a value, as atoms are not removed from the heap when valued.
    pub fn heap_pop_most_active(&mut self) -> Option<Atom> {
        self.priority_heap.pop_max().map(|index| index as Atom)
    }

    /// The activity of an atom, regardless of whether it is on the heap.
    pub fn activity_of(&self, atom: Atom) -> Activity {
        self.priority_heap.value_at(atom as usize).activity
    }

    /// The importance of an atom, regardless of whether it is on the heap.
    pub fn importance_of(&self, atom: Atom) -> Importance {
        self.priority_heap.value_at(atom as usize).importance
    }

    /// Bumps the activity of an atom and updates its position on the heap, if the atom is on the heap.
    pub fn bump_activity(&mut self, atom: Atom) {
        let bump = self.config.bump.value;
        self.priority_heap
            .apply_to_index(atom as usize, |priority| priority.activity += bump);
        self.priority_heap.heapify_if_active(atom as usize);
    }

    /// Increase the activity bump applied to atoms by a factor, so past bumps decay relative to future bumps.
    pub fn exponent_activity(&mut self) {
        let factor = 1.0 / (1.0 - self.config.decay.value);
        self.config.bump.value *= factor
    }

    /// Rescores the activity of all atoms and the activity bump, so the greatest of these is `1`.
    ///
    /// Relative order is preserved, and so the heap does not need to be rebuilt.
    pub fn rescore_activity(&mut self) {
        let mut greatest = self.config.bump.value;
        for atom in 0..self.count() {
            greatest = Activity::max(greatest, self.activity_of(atom as Atom));
        }

        log::trace!(target: targets::VALUATION, "Rescoring activity by {greatest}");
        let factor = 1.0 / greatest;
        self.priority_heap
            .apply_to_all(|priority| priority.activity *= factor);
        self.config.bump.value *= factor;
    }

    /// Sets the activity above which the activity of every atom is rescored, rescoring immediately if some activity is above the ceiling.
    ///
    /// Ceilings which are not finite and positive are ignored.
    pub fn set_activity_ceiling(&mut self, ceiling: Activity) {
        if !(ceiling.is_finite() && ceiling > 0.0) {
            log::warn!(target: targets::VALUATION, "Ignored activity ceiling {ceiling}");
            return;
        }
        self.config.bump.max = ceiling;

        let over = (0..self.count()).any(|atom| self.activity_of(atom as Atom) > ceiling);
        if over || self.config.bump.value > ceiling {
            self.rescore_activity();
        }
    }

    /// Sets the activity of every atom to zero, and restores the activity bump to its initial value.
    pub fn reset_scores(&mut self, initial_bump: Activity) {
        self.priority_heap
            .apply_to_all(|priority| priority.activity = 0.0);
        self.config.bump.value = initial_bump;
        self.priority_heap.heapify();
    }

    /// Sets the importance of an atom, and updates its position on the heap, if the atom is on the heap.
    pub fn set_importance(&mut self, atom: Atom, importance: Importance) {
        self.priority_heap
            .apply_to_index(atom as usize, |priority| priority.importance = importance);
        self.priority_heap.heapify_if_active(atom as usize);
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Config;

    use super::*;

    #[test]
    fn importance_before_activity() {
        let mut atom_db = AtomDB::new(&Config::default());
        for _ in 0..3 {
            let _ = atom_db.fresh_atom();
        }

        atom_db.bump_relative([1, 1, 2].into_iter());
        atom_db.set_importance(3, Importance::More);
        atom_db.set_importance(1, Importance::Less);
        assert_eq!(atom_db.importance_of(3), Importance::More);
        assert_eq!(atom_db.importance_of(2), Importance::Normal);

        assert_eq!(atom_db.heap_pop_most_active(), Some(3));
        assert_eq!(atom_db.heap_pop_most_active(), Some(2));
        assert_eq!(atom_db.heap_pop_most_active(), Some(1));
        assert_eq!(atom_db.heap_pop_most_active(), None);
    }

    #[test]
    fn ceiling_rescores() {
        let mut atom_db = AtomDB::new(&Config::default());
        for _ in 0..2 {
            let _ = atom_db.fresh_atom();
        }

        for _ in 0..8 {
            atom_db.bump_activity(1);
            atom_db.exponent_activity();
        }
        assert!(atom_db.activity_of(1) > 4.0);

        atom_db.set_activity_ceiling(4.0);
        assert!(atom_db.activity_of(1) < 1.0 + 1e-9);
        assert!(atom_db.activity_of(1) > atom_db.activity_of(2));

        atom_db.set_activity_ceiling(-1.0);
        assert_eq!(atom_db.config.bump.max, 4.0);
    }

    #[test]
    fn reset_scores() {
        let mut atom_db = AtomDB::new(&Config::default());
        for _ in 0..2 {
            let _ = atom_db.fresh_atom();
        }

        atom_db.bump_relative([2, 2].into_iter());
        atom_db.exponent_activity();
        atom_db.reset_scores(1.0);

        assert_eq!(atom_db.activity_of(2), 0.0);
        assert_eq!(atom_db.config.bump.value, 1.0);
        assert_eq!(atom_db.heap_pop_most_active(), Some(1));
    }
}
