/*!
The trail: the order in which atoms were valued, split into decision levels.

Each decision level is a (possibly empty) contiguous run of literals on the trail.
Level `0` begins at the start of the trail, and each further level begins with a decision --- or, for the levels reserved for assumptions, with an assumption (or nothing, if the assumption already holds).

Alongside the literals the trail notes which literals have been propagated, through the index of the first literal yet to be propagated.

```rust
# use kestrel_sat::db::trail::Trail;
let mut trail = Trail::default();
trail.store_assignment(1);
trail.new_level();
trail.store_assignment(-2);
trail.store_assignment(3);

assert_eq!(trail.level(), 1);
assert_eq!(trail.level_assignments(1), &[-2, 3]);
assert_eq!(trail.level_assignments(0), &[1]);
```
*/

use crate::structures::literal::CLiteral;

use super::LevelIndex;

/// The trail struct.
#[derive(Default)]
pub struct Trail {
    /// Literals, in order of assignment.
    pub literals: Vec<CLiteral>,

    /// The index on the trail at which each level (above level `0`) begins.
    pub level_indicies: Vec<usize>,

    /// The index of the first literal on the trail yet to be propagated.
    pub q_head: usize,
}

impl Trail {
    /// Stores a consequence of the top decision level.
    pub fn store_assignment(&mut self, literal: CLiteral) {
        self.literals.push(literal);
    }

    /// The current level.
    pub fn level(&self) -> LevelIndex {
        self.level_indicies.len() as LevelIndex
    }

    /// Opens a fresh level, whose first assignment (if any) will be the next assignment stored.
    pub fn new_level(&mut self) {
        self.level_indicies.push(self.literals.len());
    }

    /// The index of the start of `level` on the trail.
    pub fn level_start(&self, level: LevelIndex) -> usize {
        match level {
            0 => 0,
            _ => self.level_indicies[level as usize - 1],
        }
    }

    /// The assignments made at `level`, in order of assignment.
    pub fn level_assignments(&self, level: LevelIndex) -> &[CLiteral] {
        let start = self.level_start(level);
        let end = match self.level_indicies.get(level as usize) {
            Some(&next_start) => next_start,
            None => self.literals.len(),
        };
        &self.literals[start..end]
    }

    /// Removes every level above `level` from the trail, returning the removed literals in order of assignment.
    ///
    /// # Soundness
    /// Does not clear the *valuation* of the removed literals.
    pub fn clear_above(&mut self, level: LevelIndex) -> std::vec::Drain<'_, CLiteral> {
        let start = match self.level_indicies.get(level as usize) {
            Some(&start) => start,
            None => self.literals.len(),
        };
        self.level_indicies.truncate(level as usize);
        self.q_head = std::cmp::min(self.q_head, start);
        self.literals.drain(start..)
    }

    /// The literal yet to be propagated, if one exists, noting the literal as propagated.
    pub fn next_to_propagate(&mut self) -> Option<CLiteral> {
        let literal = *self.literals.get(self.q_head)?;
        self.q_head += 1;
        Some(literal)
    }

    /// Reserves space on the trail for `additional` literals.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), std::collections::TryReserveError> {
        self.literals.try_reserve(additional)
    }
}
