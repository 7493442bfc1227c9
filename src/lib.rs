//! An incremental engine for determining the satisfiability of boolean formulas written in conjunctive normal form.
//!
//! kestrel_sat is a conflict-driven clause-learning solver designed to be driven through a narrow, stateful session.
//! Clauses are added a literal at a time, assumptions may be given ahead of each solve, and learned information is kept between solves.
//! After a solve, the session can be queried for a model, for the assumptions responsible for unsatisfiability, or (if trace generation was enabled) for an unsatisfiable core of the original clauses.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! - Literals are signed integers, and atoms (aka. variables) are the positive integers up to [variables](crate::context::GenericContext::variables).
//!   Atoms are introduced through [increase_max_var](crate::context::GenericContext::increase_max_var).
//! - Clauses are built with [add](crate::context::GenericContext::add), where `0` closes the clause under construction.
//! - Assumptions are given with [assume](crate::context::GenericContext::assume) and hold for the next [solve](crate::context::GenericContext::solve) only.
//!
//! Internally, a solve is viewed in terms of a handful of databases:
//! - The formula is stored in a [clause database](crate::db::clause).
//! - The current valuation, together with the heuristics for extending it, is stored in an [atom database](crate::db::atom).
//! - The order in which the valuation was built is stored on a [trail](crate::db::trail).
//!
//! Useful starting points may be:
//! - The [solve procedure](crate::procedures::solve) to inspect the dynamics of a solve.
//! - The [configuration](crate::config) to see what may be adjusted.
//! - The [builder] to see how a formula is given to a context.
//!
//! # Example
//!
//! ```rust
//! # use kestrel_sat::config::Config;
//! # use kestrel_sat::context::Context;
//! # use kestrel_sat::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//! for _ in 0..2 {
//!     assert!(the_context.increase_max_var().is_ok());
//! }
//!
//! for literal in [1, 2, 0, -1, 2, 0, 1, -2, 0] {
//!     assert!(the_context.add(literal).is_ok());
//! }
//!
//! assert_eq!(the_context.solve(0), Ok(Report::Satisfiable));
//! assert_eq!(the_context.deref(2), Ok(Some(true)));
//!
//! the_context.assume(-2).expect("a known atom");
//! assert_eq!(the_context.solve(0), Ok(Report::Unsatisfiable));
//! assert_eq!(the_context.failed_assumptions(), Ok(vec![-2]));
//! assert!(!the_context.inconsistent());
//! ```
//!
//! # Logs
//!
//! Calls to the [log] macros are made throughout the library, grouped by the [targets](crate::misc::log::targets).
//! No logger is installed by the library.

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::derivable_impls)]

pub mod builder;
pub mod config;
pub mod context;
pub mod db;
pub mod generic;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod resolution_buffer;
pub mod structures;
pub mod types;
