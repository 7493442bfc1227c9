/*!
Assumptions, and the analysis of a failed assumption.

# Overview

The assumptions of a solve are asserted one per level before any free decision is made, so that for `k` assumptions levels `1` through `k` are reserved for assumptions.
- If an assumption already holds when asserted, an empty level is opened in its place, so the level of an assumption is fixed.
- If an assumption has no value, a level is opened and the assumption is valued at the level.
- If the negation of an assumption holds, the formula is unsatisfiable together with the assumptions.

In the final case the assumptions responsible are found by *final analysis*.
Final analysis walks back along the trail from the falsified assumption, through the reason of each literal met, collecting each assumption met without a reason.
As only assumptions are valued without a reason on levels `1` through `k`, the collected literals are exactly the assumptions on which the negation of the falsified assumption depends.

The failed assumptions are then the falsified assumption together with the collected assumptions, given in the order the assumptions were made.
If trace generation is enabled, the clauses and level `0` values met are noted as the premises of the conflict.

# Literature

Final analysis follows `analyzeFinal` of [MiniSat](https://doi.org/10.1007/978-3-540-24605-3_37).
*/

use crate::{
    context::GenericContext,
    db::trace::Node,
    misc::log::targets::{self},
    structures::literal::{CLiteral, Literal},
    types::err::{self, ErrorKind},
};

/// Possible 'Ok' results from asserting assumptions.
#[derive(Debug, PartialEq, Eq)]
pub enum AssumptionOk {
    /// An assumption was valued, and requires propagation.
    Asserted(CLiteral),

    /// The negation of an assumption holds, and the failed assumptions have been noted.
    Failed,

    /// Every assumption holds.
    Complete,
}

impl<R: rand::Rng + rand::SeedableRng> GenericContext<R> {
    /// Asserts the assumption of the next assumption level, if one exists.
    ///
    /// For documentation, see [procedures::assumptions](crate::procedures::assumptions).
    pub fn assert_assumptions(&mut self) -> Result<AssumptionOk, ErrorKind> {
        while (self.trail.level() as usize) < self.solve_assumptions.len() {
            let assumption = self.solve_assumptions[self.trail.level() as usize];

            match self.atom_db.value_of_literal(assumption) {
                Some(true) => {
                    log::trace!(target: targets::ASSUMPTION, "Assumption {assumption} already holds");
                    self.trail.new_level();
                }

                Some(false) => {
                    log::info!(target: targets::ASSUMPTION, "Assumption {assumption} failed");
                    self.analyze_final(assumption)?;
                    return Ok(AssumptionOk::Failed);
                }

                None => {
                    self.trail.new_level();
                    self.assign(assumption, None);
                    return Ok(AssumptionOk::Asserted(assumption));
                }
            }
        }

        Ok(AssumptionOk::Complete)
    }

    /// Notes the assumptions responsible for the negation of `assumption`, together with `assumption`.
    ///
    /// For documentation, see [procedures::assumptions](crate::procedures::assumptions).
    pub fn analyze_final(&mut self, assumption: CLiteral) -> Result<(), ErrorKind> {
        let tracing = self.trace.is_some();
        let mut premises = Vec::default();

        let mut failed = vec![assumption];
        let atom = assumption.atom();

        match self.atom_db.level_of(atom) {
            Some(0) => {
                if tracing {
                    premises.push(Node::Fixed(atom));
                }
            }

            Some(_) => {
                self.resolution_buffer.mark(atom);
                let start = self.trail.level_start(1);

                for index in (start..self.trail.literals.len()).rev() {
                    let literal = self.trail.literals[index];
                    if !self.resolution_buffer.is_marked(literal.atom()) {
                        continue;
                    }

                    match self.atom_db.reason_of(literal.atom()) {
                        None => failed.push(literal),

                        Some(reason) => {
                            if tracing {
                                premises.push(Node::Clause(reason));
                            }
                            let clause = match self.clause_db.get(&reason) {
                                Ok(clause) => clause,
                                Err(e) => {
                                    self.resolution_buffer.clear();
                                    return Err(e.into());
                                }
                            };

                            for other in clause {
                                match self.atom_db.level_of(other.atom()) {
                                    Some(0) => {
                                        if tracing {
                                            premises.push(Node::Fixed(other.atom()));
                                        }
                                    }
                                    Some(_) => {
                                        self.resolution_buffer.mark(other.atom());
                                    }
                                    None => {
                                        self.resolution_buffer.clear();
                                        return Err(err::AnalysisError::MissingReason.into());
                                    }
                                }
                            }
                        }
                    }
                }

                self.resolution_buffer.clear();
            }

            None => return Err(err::AnalysisError::NoAssertion.into()),
        }

        // In order of assumption, without duplicates.
        let mut ordered = Vec::default();
        for assumption in &self.solve_assumptions {
            if failed.contains(assumption) && !ordered.contains(assumption) {
                ordered.push(*assumption);
            }
        }
        log::info!(target: targets::ASSUMPTION, "Failed assumptions: {ordered:?}");
        self.failed_assumptions = ordered;

        if let Some(trace) = self.trace.as_mut() {
            trace.note_assumption_conflict(premises);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{config::Config, context::Context};

    use super::*;

    #[test]
    fn final_analysis() {
        let mut ctx = Context::from_config(Config::default());
        for _ in 0..4 {
            assert!(ctx.increase_max_var().is_ok());
        }
        for literal in [-1, 3, 0, -2, -3, 4, 0] {
            assert!(ctx.add(literal).is_ok());
        }

        ctx.solve_assumptions = vec![1, 2, -4];

        assert_eq!(ctx.assert_assumptions(), Ok(AssumptionOk::Asserted(1)));
        assert_eq!(ctx.propagate(), Ok(()));
        assert_eq!(ctx.assert_assumptions(), Ok(AssumptionOk::Asserted(2)));
        assert_eq!(ctx.propagate(), Ok(()));
        assert_eq!(ctx.atom_db.value_of(4), Some(true));

        assert_eq!(ctx.assert_assumptions(), Ok(AssumptionOk::Failed));
        assert_eq!(ctx.failed_assumptions, vec![1, 2, -4]);
    }

    #[test]
    fn assumptions_which_hold_take_a_level() {
        let mut ctx = Context::from_config(Config::default());
        for _ in 0..2 {
            assert!(ctx.increase_max_var().is_ok());
        }
        for literal in [-1, 2, 0] {
            assert!(ctx.add(literal).is_ok());
        }

        ctx.solve_assumptions = vec![1, 2];
        assert_eq!(ctx.assert_assumptions(), Ok(AssumptionOk::Asserted(1)));
        assert_eq!(ctx.propagate(), Ok(()));
        assert_eq!(ctx.assert_assumptions(), Ok(AssumptionOk::Complete));
        assert_eq!(ctx.trail.level(), 2);
        assert!(ctx.trail.level_assignments(2).is_empty());
    }
}
