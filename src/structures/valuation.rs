//! A valuation is a (partial) function from atoms to booleans.
//!
//! The canonical representation of a valuation is a vector of optional booleans, indexed by atoms.
//! As the atom `0` is fixed internally with a value of true, methods of the [Valuation] trait skip the atom.
//!
//! ```rust
//! # use kestrel_sat::structures::valuation::{Valuation, VValuation};
//! let valuation: VValuation = vec![Some(true), Some(false), None, Some(true)];
//!
//! assert_eq!(valuation.value_of(1), Some(false));
//! assert_eq!(valuation.value_of(2), None);
//! assert_eq!(valuation.true_literals().collect::<Vec<_>>(), vec![-1, 3]);
//! ```

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
};

/// The canonical representation of a valuation.
pub type VValuation = Vec<Option<bool>>;

/// Methods for inspecting a valuation.
pub trait Valuation {
    /// The value of an atom, if the atom has some value on the valuation.
    fn value_of(&self, atom: Atom) -> Option<bool>;

    /// The literals true on the valuation, in order of atom.
    fn true_literals(&self) -> impl Iterator<Item = CLiteral>;

    /// True if every atom has some value on the valuation.
    fn is_complete(&self) -> bool;
}

impl Valuation for [Option<bool>] {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        self.get(atom as usize).copied().flatten()
    }

    fn true_literals(&self) -> impl Iterator<Item = CLiteral> {
        self.iter()
            .enumerate()
            .skip(1)
            .filter_map(|(atom, value)| value.map(|v| CLiteral::new(atom as Atom, v)))
    }

    fn is_complete(&self) -> bool {
        self.iter().all(|value| value.is_some())
    }
}

impl Valuation for VValuation {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        self.as_slice().value_of(atom)
    }

    fn true_literals(&self) -> impl Iterator<Item = CLiteral> {
        self.as_slice().true_literals()
    }

    fn is_complete(&self) -> bool {
        self.as_slice().is_complete()
    }
}
