/*!
(The internal representation of) an atom (aka. a 'variable').

Each atom is a u32 *u* such that either:
- *u* is 0, or:
- *u - 1* is an atom.

That is, the atoms of a context are [0..*m*) for some *m*, and so atoms may be used as the indices of per-atom structures directly.

The atom `0` is internal to a context and fixed with a value of true.
As a consequence, the atoms which may appear in a literal given to a context are 1..*m*, and the count of such atoms is *m - 1*.

# Notes
In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The atom fixed internally with a value of true.
pub const TOP_ATOM: Atom = 0;

/// The maximum instance of an atom.
///
/// Limited by the representation of [literals](crate::structures::literal) as signed integers.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
