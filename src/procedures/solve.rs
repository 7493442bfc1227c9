//! Determines the satisfiability of the formula in a context, under the assumptions given since the previous solve.
//!
//! # Overview
//!
//! A solve alternates propagation with assumptions and decisions until either every atom is valued, or a conflict is found which does not depend on any decision.
//!
//! Roughly, the loop is as diagrammed:
//!
//! ```none
//!                           +-------------------+
//!   +-----------------------| assert assumption |<-----------+
//!   |                       +-------------------+            |
//!   |                                 |                      |
//!   |                                 +----> unsatisfiable,  |
//!   |                                        if an assumption fails
//!   ⌄   +-----------+                                        |
//! --+-->| propagate |----------------------------------------+
//!   ⌃   +-----------+   if no conflict          +---------------+
//!   |         |         and assumptions hold -->| make_decision |---> satisfiable, if every atom is valued
//!   |         |                                 +---------------+
//!   |         | if a conflict is found                  |
//!   |         ⌄                                         |
//!   |   +-------------------+                           |
//!   +---| conflict_analysis |---> unsatisfiable,        |
//!   |   +-------------------+     if at level 0         |
//!   |                                                   |
//!   +---------------------------------------------------+
//! ```
//!
//! Between iterations a solve may restart, or reduce the clause database, as [scheduled](crate::procedures::schedulers).
//!
//! A solve ends early with an [unknown](crate::reports::Report::Unknown) result if a decision limit is given and reached.
//! Only free decisions count toward the limit, and a limit of `0` (or less) is no limit.
//! If the limit is reached when every atom is valued, the solve is satisfiable regardless.
//!
//! # Example
//!
//! ```rust
//! # use kestrel_sat::context::Context;
//! # use kestrel_sat::reports::Report;
//! let mut the_context = Context::default();
//! for _ in 0..3 {
//!     assert!(the_context.increase_max_var().is_ok());
//! }
//!
//! for literal in [-1, 2, 0, -1, 3, 0, -2, -3, 0] {
//!     assert!(the_context.add(literal).is_ok());
//! }
//!
//! assert_eq!(the_context.solve(0), Ok(Report::Satisfiable));
//!
//! assert!(the_context.assume(1).is_ok());
//! assert_eq!(the_context.solve(0), Ok(Report::Unsatisfiable));
//! assert_eq!(the_context.failed_assumptions(), Ok(vec![1]));
//!
//! // Assumptions hold for a single solve.
//! assert_eq!(the_context.solve(0), Ok(Report::Satisfiable));
//! ```
//!
//! # Literature
//!
//! The core solve procedure was developed by reading [Decision Procedures](https://doi.org/10.1007/978-3-662-50497-0)
//! and the [Handbook of satisfiability](https://www.iospress.com/catalog/books/handbook-of-satisfiability-2).

use crate::{
    context::{ContextState, GenericContext},
    misc::log::targets::{self},
    procedures::{analysis::AnalysisResult, assumptions::AssumptionOk, decision::DecisionOk},
    reports::Report,
    structures::valuation::Valuation,
    types::err::{self, ErrorKind},
};

impl<R: rand::Rng + rand::SeedableRng> GenericContext<R> {
    /// Determines the satisfiability of the formula in the context under the current assumptions, making at most `decision_limit` free decisions if `decision_limit` is positive.
    ///
    /// For documentation, see [procedures::solve](crate::procedures::solve).
    pub fn solve(&mut self, decision_limit: i32) -> Result<Report, ErrorKind> {
        self.check_usable()?;
        if !self.clause_buffer.is_empty() {
            return Err(err::StateError::IncompleteClause.into());
        }

        let start = cpu_time::ProcessTime::try_now();
        self.prepare_solve();

        let result = self.solve_given(decision_limit);
        match start.and_then(|start| start.try_elapsed()) {
            Ok(elapsed) => self.counters.time += elapsed,
            Err(e) => log::warn!("Processor time of solve unavailable: {e}"),
        }

        let report = match result {
            Ok(report) => report,
            Err(e) => return Err(self.note_error(e)),
        };
        log::info!("Solve: {report}");

        self.state = match report {
            Report::Satisfiable => ContextState::Satisfiable,
            Report::Unsatisfiable => ContextState::Unsatisfiable,
            Report::Unknown => ContextState::Unknown,
        };

        if report == Report::Unsatisfiable {
            if let Err(e) = self.compute_core() {
                return Err(self.note_error(e));
            }
        }

        Ok(report)
    }

    /// Clears the results of any previous solve, and takes the assumptions given since.
    fn prepare_solve(&mut self) {
        self.backjump(0);
        self.solve_assumptions = std::mem::take(&mut self.assumptions);
        self.failed_assumptions.clear();
        if let Some(trace) = self.trace.as_mut() {
            trace.clear_assumption_conflict();
            trace.clear_core();
        }
        self.atom_db.refresh_used();
        self.state = ContextState::Solving;
        log::info!(target: targets::ASSUMPTION, "Solve with assumptions {:?}", self.solve_assumptions);
    }

    /// The solve loop.
    fn solve_given(&mut self, decision_limit: i32) -> Result<Report, ErrorKind> {
        if self.inconsistent {
            return Ok(Report::Unsatisfiable);
        }

        let limit = usize::try_from(decision_limit).ok().filter(|limit| *limit > 0);
        let decisions_before = self.counters.total_decisions;

        'solve_loop: loop {
            self.counters.total_iterations += 1;

            match self.propagate() {
                Ok(()) => {}

                Err(err::BCPError::Conflict(key)) => {
                    self.counters.total_conflicts += 1;
                    self.counters.fresh_conflicts = self.counters.fresh_conflicts.saturating_add(1);

                    match self.conflict_analysis(&key)? {
                        AnalysisResult::FundamentalConflict => return Ok(Report::Unsatisfiable),

                        AnalysisResult::UnitClause { key, literal }
                        | AnalysisResult::AssertingClause { key, literal } => {
                            self.assign(literal, Some(key));
                        }
                    }

                    if self.conflict_total_interrupt() {
                        self.reduce()?;
                    }
                    continue 'solve_loop;
                }

                Err(e) => return Err(e.into()),
            }

            if self.config.restart.value && self.luby_fresh_conflict_interrupt() {
                self.restart();
                if self.restart_interrupt() {
                    self.reduce()?;
                }
            }

            match self.assert_assumptions()? {
                AssumptionOk::Asserted(_) => continue 'solve_loop,
                AssumptionOk::Failed => return Ok(Report::Unsatisfiable),
                AssumptionOk::Complete => {}
            }

            if limit.is_some_and(|limit| self.counters.total_decisions - decisions_before >= limit)
                && !self.atom_db.valuation().is_complete()
            {
                log::info!(target: targets::DECISION, "Decision limit reached");
                return Ok(Report::Unknown);
            }

            match self.make_decision() {
                DecisionOk::Literal(_) => continue 'solve_loop,
                DecisionOk::Exhausted => return Ok(Report::Satisfiable),
            }
        }
    }
}
