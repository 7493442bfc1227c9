/*!
Methods for choosing the value of an atom.

# Overview

A decision is made only after every assumption holds, and is to value some atom without a value.

# Decisions as literals

Strictly a decision is to value some atom *a* with value *v*.
Still, it is convenient to represent such a decision as a literal with atom *a* and polarity *v*.
For example, a decision to value *p* with value *false* can be represented with the literal *-p*.

# Heuristics

## Activity

Atoms are selected by [priority](crate::db::atom::Priority): first by importance, and then by activity.
The [atom database](crate::db::atom) stores atoms without a value on a max priority heap in order to support quick access to the atom of highest priority without a value.
Though, as atoms are not removed from the heap when valued, it may take some work to find the relevant atom.

```rust,ignore
while let Some(atom) = self.atom_db.heap_pop_most_active() {
    if self.atom_db.value_of(atom).is_none() {
        return Some(atom);
    }
}
```

## Phase

The value of a chosen atom is, in order of preference, the saved phase of the atom (if phase saving is enabled), the phase set for the atom, or the [default phase](crate::config::PhaseDefault).
See [db::atom::phase](crate::db::atom::phase) for details.
*/

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::literal::{CLiteral, Literal},
};

/// Possible 'Ok' results from choosing a truth value to assign an atom.
#[derive(Debug, PartialEq, Eq)]
pub enum DecisionOk {
    /// Some truth value was assigned to some atom, represented as a literal.
    Literal(CLiteral),

    /// All atoms had already been assigned truth values, so no decision could be made.
    Exhausted,
}

impl<R: rand::Rng + rand::SeedableRng> GenericContext<R> {
    /// Makes a decision on the atom of highest priority without a value, at a fresh level.
    ///
    /// For documentation, see [procedures::decision](crate::procedures::decision).
    pub fn make_decision(&mut self) -> DecisionOk {
        while let Some(atom) = self.atom_db.heap_pop_most_active() {
            if self.atom_db.value_of(atom).is_some() {
                continue;
            }

            let polarity =
                self.atom_db
                    .decision_phase(atom, self.config.phase_saving.value, &mut self.rng);
            let decision = CLiteral::new(atom, polarity);

            self.counters.total_decisions += 1;
            self.trail.new_level();
            log::trace!(target: targets::DECISION, "Decided {decision} at level {}", self.trail.level());
            self.assign(decision, None);

            return DecisionOk::Literal(decision);
        }

        DecisionOk::Exhausted
    }
}
