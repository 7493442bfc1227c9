//! Error types used in the library.
//!
//! - Usage errors (a query in the wrong state, a literal outside the known atoms) are returned to the caller, and leave the context as it was.
//! - Resource errors and internal errors leave the context [unusable](crate::context::ContextState::Unusable), and a [reset](crate::context::GenericContext::reset) is required.
//! - Some of these are internally expected --- e.g. BCP errors are used to control the flow of a solve.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::db::ClauseKey;

/// The error type of the library, wrapping errors specific to some part of a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Analysis(AnalysisError),
    AtomDB(AtomDBError),
    BCP(BCPError),
    Bounds(BoundsError),
    ClauseDB(ClauseDBError),
    Resource(ResourceError),
    State(StateError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Analysis(e) => write!(f, "Analysis error: {e:?}"),
            Self::AtomDB(e) => write!(f, "Atom database error: {e:?}"),
            Self::BCP(e) => write!(f, "Propagation error: {e:?}"),
            Self::Bounds(e) => write!(f, "Bounds error: {e:?}"),
            Self::ClauseDB(e) => write!(f, "Clause database error: {e:?}"),
            Self::Resource(e) => write!(f, "Resource error: {e:?}"),
            Self::State(e) => write!(f, "State error: {e:?}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Noted errors during conflict analysis.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnalysisError {
    /// Resolution failed to terminate with an asserting clause.
    NoAssertion,

    /// Some atom valued during a solve was missing a reason.
    MissingReason,
}

impl From<AnalysisError> for ErrorKind {
    fn from(e: AnalysisError) -> Self {
        ErrorKind::Analysis(e)
    }
}

/// Noted errors in the atom database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AtomDBError {
    /// There are no more fresh atoms.
    AtomsExhausted,
}

impl From<AtomDBError> for ErrorKind {
    fn from(e: AtomDBError) -> Self {
        ErrorKind::AtomDB(e)
    }
}

/// Noted errors during boolean constraint propagation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BCPError {
    /// A conflict was found.
    /// This is expected from time to time, and a learning opportunity.
    Conflict(ClauseKey),

    /// Some corruption in the watched literals of a clause.
    /// This is unexpected.
    CorruptWatch,
}

impl From<BCPError> for ErrorKind {
    fn from(e: BCPError) -> Self {
        ErrorKind::BCP(e)
    }
}

/// Something given to a context is outside of what the context knows.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BoundsError {
    /// `0` was used as a literal where `0` does not terminate a clause.
    ZeroLiteral,

    /// The atom of a literal is greater than the maximum atom of the context.
    UnknownAtom,

    /// The index does not belong to some original clause.
    ClauseIndex,

    /// The code does not name a default phase.
    PhaseCode,
}

impl From<BoundsError> for ErrorKind {
    fn from(e: BoundsError) -> Self {
        ErrorKind::Bounds(e)
    }
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// A learnt clause is missing.
    Missing,

    /// An invalid key token.
    InvalidKeyToken,

    /// An invalid key index.
    InvalidKeyIndex,

    /// An attempt was made to store a clause as a learnt clause of the wrong length.
    UnexpectedLength,

    /// All possible keys have been used for some clause type.
    StorageExhausted,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

/// Some resource could not be obtained.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResourceError {
    /// Memory could not be reserved to grow some structure.
    Allocation,
}

impl From<ResourceError> for ErrorKind {
    fn from(e: ResourceError) -> Self {
        ErrorKind::Resource(e)
    }
}

impl From<std::collections::TryReserveError> for ErrorKind {
    fn from(_: std::collections::TryReserveError) -> Self {
        ErrorKind::Resource(ResourceError::Allocation)
    }
}

/// A method was called on a context in a state which does not support the method.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StateError {
    /// Trace generation may only be enabled before any literal is added.
    TraceAfterInput,

    /// A query requires trace generation, which was not enabled.
    TraceDisabled,

    /// A query requires the last solve to have returned satisfiable.
    NotSatisfiable,

    /// A query requires the last solve to have returned unsatisfiable.
    NotUnsatisfiable,

    /// A solve was requested while a clause was under construction.
    IncompleteClause,

    /// The context hit an error it could not recover from, and must be reset.
    Unusable,
}

impl From<StateError> for ErrorKind {
    fn from(e: StateError) -> Self {
        ErrorKind::State(e)
    }
}
