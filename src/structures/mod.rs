//! Abstract elements of a solve and their representation.
//!
//! - [atoms](atom), aka. variables.
//! - [literals](literal), an atom paired with a polarity.
//! - [clauses](clause), a disjunction of literals.
//! - [valuations](valuation), a (partial) function from atoms to booleans.

pub mod atom;
pub mod clause;
pub mod literal;
pub mod valuation;
