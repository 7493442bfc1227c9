//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals, and the methods of the [Clause] trait are given for any slice of literals.
//!
//! ```rust
//! # use kestrel_sat::structures::clause::Clause;
//! let clause = vec![23, -41, -3, 15];
//!
//! assert_eq!(clause.size(), 4);
//! assert_eq!(clause.as_dimacs(true), "23 -41 -3 15 0");
//! assert_eq!(clause.atoms().max(), Some(41));
//! ```
//!
//! - The empty clause is always false (never true).
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause --- where the 'unit' is the literal).

use crate::{
    config::LBD,
    db::atom::AtomDB,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
};

/// The canonical representation of a clause.
pub type CClause = Vec<CLiteral>;

/// The clause trait.
pub trait Clause {
    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// The Literal Block Distance of the clause.
    /// That is, the number of (distinct) decision levels on which atoms of the clause were valued.
    ///
    /// Atoms without a value are ignored.
    fn lbd(&self, atom_db: &AtomDB) -> LBD;

    /// An iterator over all literals in the clause, order is not guaranteed.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over all atoms in the clause, order is not guaranteed.
    fn atoms(&self) -> impl Iterator<Item = Atom>;
}

impl Clause for [CLiteral] {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = String::default();
        for literal in self {
            the_string.push_str(&format!("{literal} "));
        }
        match zero {
            true => the_string.push('0'),
            false => {
                the_string.pop();
            }
        }
        the_string
    }

    fn lbd(&self, atom_db: &AtomDB) -> LBD {
        let mut levels = self
            .iter()
            .filter_map(|literal| atom_db.level_of(literal.atom()))
            .collect::<Vec<_>>();
        levels.sort_unstable();
        levels.dedup();

        levels.len().try_into().unwrap_or(LBD::MAX)
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }
}

impl Clause for CClause {
    fn as_dimacs(&self, zero: bool) -> String {
        self.as_slice().as_dimacs(zero)
    }

    fn lbd(&self, atom_db: &AtomDB) -> LBD {
        self.as_slice().lbd(atom_db)
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }
}
