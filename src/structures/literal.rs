//! Literals are atoms paired with a (boolean) polarity.
//!
//! The canonical representation of a literal is as a signed integer, with the sign of the integer indicating polarity and the absolute value the atom.
//! `0` is not a literal, as the atom `0` is reserved.
//!
//! Methods on literals are given through the [Literal] trait.
//!
//! ```rust
//! # use kestrel_sat::structures::literal::{CLiteral, Literal};
//! let literal = CLiteral::new(79, false);
//!
//! assert_eq!(literal, -79);
//! assert_eq!(literal.atom(), 79);
//! assert!(!literal.polarity());
//! assert!(literal.negate().polarity());
//! ```

use crate::structures::atom::Atom;

/// The canonical representation of a literal.
pub type CLiteral = i32;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: Copy + Ord + std::hash::Hash {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;
}

impl Literal for CLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        match polarity {
            true => atom as CLiteral,
            false => -(atom as CLiteral),
        }
    }

    fn negate(&self) -> Self {
        -self
    }

    fn atom(&self) -> Atom {
        self.unsigned_abs()
    }

    fn polarity(&self) -> bool {
        self.is_positive()
    }
}
