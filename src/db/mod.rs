/*!
Databases for holding information relevant to a solve.

- [The clause database](crate::db::clause)
  + A collection of clauses, each indexed by a [clause key](ClauseKey).
- [The atom database](crate::db::atom)
  + Properties of atoms, such as their current value, the level at which they were valued, the reason for the value, and their priority for a decision.
- [The trail](crate::db::trail)
  + The order in which atoms were valued, split into decision levels.
- [Watches](crate::db::watches)
  + For each literal, the clauses watching the literal.
- [The trace](crate::db::trace)
  + If enabled, the premises from which each derived clause or fixed atom follows, used to extract unsatisfiable cores.

Databases are kept as separate fields of a context so a method may borrow more than one at a time.
*/

pub mod atom;
pub mod clause;
mod keys;
pub use keys::*;
pub mod trace;
pub mod trail;
pub mod watches;

/// The representation of a decision level.
///
/// Level `0` holds whatever follows from the formula alone, and each further level begins with a decision.
pub type LevelIndex = u32;
