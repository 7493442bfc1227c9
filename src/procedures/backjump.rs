//! Recovery from a conflict.
//!
//! # Overview
//!
//! A backjump is a 'jump' from some (higher) decision level to some previous (lower) decision level.
//!
//! Typically, a backjump is made from level *l* to level *l - i* because a conflict was found at level *l* and analysis produced a clause which asserts some literal at level *l - i*.
//! In this case, every assignment made above level *l - i* is undone.
//! The value of each atom cleared is saved as the phase of the atom, and the atom is returned to the priority heap.
//!
//! Passing a target level greater than the current level is safe --- nothing will happen.
//!
//! # Literature
//!
//! See [Chronological Backtracking](https://doi.org/10.1007/978-3-319-94144-8_7) for a discussion of chronological and non-chronological backjumping --- and a follow-up: [Backing Backtracking](https://www.doi.org/10.1007/978-3-030-24258-9_18).

use crate::{
    context::GenericContext,
    db::LevelIndex,
    misc::log::targets::{self},
    structures::literal::Literal,
};

impl<R: rand::Rng + rand::SeedableRng> GenericContext<R> {
    /// Backjumps to the given target level.
    ///
    /// For documentation, see [procedures::backjump](crate::procedures::backjump).
    pub fn backjump(&mut self, target: LevelIndex) {
        if target >= self.trail.level() {
            return;
        }
        log::trace!(target: targets::BACKJUMP, "Backjump from {} to {target}", self.trail.level());

        for literal in self.trail.clear_above(target) {
            self.atom_db.drop_value(literal.atom());
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{config::Config, context::Context};

    use super::*;

    #[test]
    fn backjump_clears_values() {
        let mut ctx = Context::from_config(Config::default());
        for _ in 0..3 {
            assert!(ctx.increase_max_var().is_ok());
        }

        ctx.trail.new_level();
        ctx.assign(1, None);
        ctx.trail.new_level();
        ctx.assign(-2, None);
        ctx.assign(3, None);

        ctx.backjump(1);
        assert_eq!(ctx.trail.level(), 1);
        assert_eq!(ctx.atom_db.value_of(1), Some(true));
        assert_eq!(ctx.atom_db.value_of(2), None);
        assert_eq!(ctx.atom_db.saved_phase(2), Some(false));

        ctx.backjump(4);
        assert_eq!(ctx.trail.level(), 1);

        ctx.backjump(0);
        assert_eq!(ctx.atom_db.value_of(1), None);
        assert!(ctx.trail.literals.is_empty());
    }
}
