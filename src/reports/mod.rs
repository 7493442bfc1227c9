/*!
Reports for the context.
*/

use crate::context::ContextState;

/// High-level reports regarding a solve.
///
/// Each report has an integer code, following the convention of SAT competitions.
///
/// ```rust
/// # use kestrel_sat::reports::Report;
/// assert_eq!(Report::Satisfiable.code(), 10);
/// assert_eq!(Report::Unsatisfiable.code(), 20);
/// assert_eq!(Report::Unknown.code(), 0);
/// ```
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The formula of the context is satisfiable.
    Satisfiable,

    /// The formula of the context is unsatisfiable.
    Unsatisfiable,

    /// Satisfiability of the formula of the context is unknown, for some reason.
    Unknown,
}

impl Report {
    /// The integer code of the report.
    pub fn code(&self) -> i32 {
        match self {
            Self::Satisfiable => 10,
            Self::Unsatisfiable => 20,
            Self::Unknown => 0,
        }
    }
}

impl From<ContextState> for Report {
    fn from(value: ContextState) -> Self {
        match value {
            ContextState::Configuration
            | ContextState::Input
            | ContextState::Solving
            | ContextState::Unknown
            | ContextState::Unusable => Self::Unknown,
            ContextState::Satisfiable => Self::Satisfiable,
            ContextState::Unsatisfiable => Self::Unsatisfiable,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}
