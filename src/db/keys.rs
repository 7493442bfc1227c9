use crate::{
    misc::log::targets::{self},
    types::err::{self},
};

/// The index to a formula.
pub type FormulaIndex = u32;

/// The token of a formula index, used to distinguish re-use of the same [FormulaIndex].
pub type FormulaToken = u16;

/// A key to access a clause stored in the clause database.
///
/// Within the clause database clauses are stored in some indexed structure (e.g. a vector) and keys contain the index to the clause together with a token to distinguish reuse of the same index, where relevant.
///
/// Original clauses are never removed, and so the index of an original clause is the count of original clauses added before the clause.
/// This index is stable across solves, and is used to report on membership of an unsatisfiable core.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClauseKey {
    /// The key to an original clause, of any length.
    Original(FormulaIndex),

    /// The key to a learnt unit clause.
    AdditionUnit(FormulaIndex),

    /// The key to a learnt binary clause.
    AdditionBinary(FormulaIndex),

    /// The key to a learnt clause of length three or more.
    Addition(FormulaIndex, FormulaToken),
}

impl ClauseKey {
    /// Extracts the index from a key.
    pub fn index(&self) -> usize {
        match self {
            Self::Original(i) | Self::AdditionUnit(i) | Self::AdditionBinary(i) => *i as usize,
            Self::Addition(i, _) => *i as usize,
        }
    }

    /// Retokens an addition key to distinguish multiple uses of the same index.
    ///
    /// Returns an error if used on any other key, or if the token limit has been reached.
    pub fn retoken(&self) -> Result<Self, err::ClauseDBError> {
        match self {
            Self::Original(_) => {
                log::error!(target: targets::CLAUSE_DB, "Original keys have a unique token");
                Err(err::ClauseDBError::InvalidKeyToken)
            }

            Self::AdditionUnit(_) | Self::AdditionBinary(_) => {
                log::error!(target: targets::CLAUSE_DB, "Short addition keys have a unique token");
                Err(err::ClauseDBError::InvalidKeyToken)
            }

            Self::Addition(index, token) => {
                if *token == FormulaToken::MAX {
                    return Err(err::ClauseDBError::StorageExhausted);
                }
                Ok(ClauseKey::Addition(*index, token + 1))
            }
        }
    }
}

impl std::fmt::Display for ClauseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Original(key) => write!(f, "Original({key})"),
            Self::AdditionUnit(key) => write!(f, "AdditionUnit({key})"),
            Self::AdditionBinary(key) => write!(f, "AdditionBinary({key})"),
            Self::Addition(key, token) => write!(f, "Addition({key}, {token})"),
        }
    }
}
