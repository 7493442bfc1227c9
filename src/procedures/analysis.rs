/*!
Analysis of an unsatisfiable clause.

Takes a key to a clause which is unsatisfiable on the current valuation and returns an asserting clause, stored in the clause database.

In other words, conflict analysis takes a key to a clause which is unsatisfiable on the current valuation and applies resolution using the clauses used to (eventually) make the observation of a conflict given decisions made.

# Overview

Analysis resolves the conflict clause with the reasons of literals valued at the level of the conflict, in reverse order of assignment, until exactly one literal of the level remains: the first unique implication point (UIP).
The learnt clause is the negation of the UIP together with every literal from a lower level met along the way.
Literals valued at level `0` are dropped, as their negations hold on every valuation of interest.

Met literals are marked on the [resolution buffer](crate::resolution_buffer), and after resolution the marks are used to minimize the learnt clause.
Specifically, a literal is removed if every other literal of its reason is marked, or valued at level `0`, as the literal then follows from the rest of the clause.

After analysis the context has backjumped to the highest level at which the clause asserts the negation of the UIP, and the learnt clause is stored and watched, though the asserted literal is not valued.

If the conflict clause has no literal valued at the current level, the context first backjumps to the highest level of any literal in the clause.
And, if that level is `0` the formula is unsatisfiable.

# Example

```rust, ignore
match self.conflict_analysis(&key)? {
    AnalysisResult::FundamentalConflict => return Ok(Report::Unsatisfiable),

    AnalysisResult::UnitClause { key, literal }
    | AnalysisResult::AssertingClause { key, literal } => {
        self.assign(literal, Some(key));
    }
}
```

# Literature

The first UIP scheme and minimization follow [MiniSat](https://doi.org/10.1007/978-3-540-24605-3_37), and its later revisions.
*/

use crate::{
    config::vsids::VSIDS,
    context::GenericContext,
    db::{trace::Node, ClauseKey, LevelIndex},
    misc::log::targets::{self},
    structures::{
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

/// Possible 'Ok' results from conflict analysis.
#[derive(Debug, PartialEq, Eq)]
pub enum AnalysisResult {
    /// A conflict at level `0` was found, and so the formula is unsatisfiable.
    FundamentalConflict,

    /// The result of analysis is a unit clause, and the context is at level `0`.
    UnitClause {
        /// The key of the clause.
        key: ClauseKey,

        /// The literal of the clause.
        literal: CLiteral,
    },

    /// The result of analysis is a (non-unit) asserting clause.
    AssertingClause {
        /// The key of the asserting clause.
        key: ClauseKey,

        /// The literal asserted by the clause.
        literal: CLiteral,
    },
}

impl<R: rand::Rng + rand::SeedableRng> GenericContext<R> {
    /// For details on conflict analysis see the [analysis](crate::procedures::analysis) procedure.
    pub fn conflict_analysis(&mut self, key: &ClauseKey) -> Result<AnalysisResult, ErrorKind> {
        let conflict_level = self.highest_level_of(key)?;
        log::info!(target: targets::ANALYSIS, "Analysis of {key} at level {conflict_level}");

        if conflict_level == 0 {
            let premises = self.level_zero_conflict_premises(*key);
            self.note_inconsistent(premises);
            return Ok(AnalysisResult::FundamentalConflict);
        }

        if conflict_level < self.trail.level() {
            log::trace!(target: targets::ANALYSIS, "Missed propagation on {key}");
            self.backjump(conflict_level);
        }

        let tracing = self.trace.is_some();
        let mut premises = Vec::default();

        let resolution = self.resolve_to_uip(*key, conflict_level, tracing.then_some(&mut premises));
        let (uip, mut lower) = match resolution {
            Ok(pair) => pair,
            Err(e) => {
                self.resolution_buffer.clear();
                return Err(e);
            }
        };

        match self.config.vsids_variant.value {
            VSIDS::MiniSAT => {
                let marked = self.resolution_buffer.marked().to_vec();
                self.atom_db.bump_relative(marked.into_iter());
            }
            VSIDS::Chaff => {
                let atoms = lower.iter().map(|literal| literal.atom()).chain([uip.atom()]);
                let atoms = atoms.collect::<Vec<_>>();
                self.atom_db.bump_relative(atoms.into_iter());
            }
        }

        if self.config.minimization.value {
            self.minimize(&mut lower, tracing.then_some(&mut premises))?;
        }
        self.resolution_buffer.clear();

        self.atom_db.exponent_activity();
        self.clause_db.exponent_activity();

        let asserted = -uip;
        let mut clause: CClause = Vec::default();
        clause.try_reserve(lower.len() + 1)?;
        clause.push(asserted);
        clause.append(&mut lower);

        // The literal of the highest level after the asserted literal, so the clause watches the literal unvalued last.
        let mut backjump_level = 0;
        let mut highest = 1;
        for (position, literal) in clause.iter().enumerate().skip(1) {
            let level = self.atom_db.level_of(literal.atom()).unwrap_or(0);
            if level > backjump_level {
                backjump_level = level;
                highest = position;
            }
        }
        if clause.len() > 1 {
            clause.swap(1, highest);
        }

        let lbd = clause.lbd(&self.atom_db);
        log::info!(target: targets::ANALYSIS, "Learnt {} with lbd {lbd}, backjump to {backjump_level}", clause.as_dimacs(false));

        self.backjump(backjump_level);

        let length = clause.len();
        let learnt_key = self.clause_db.store_addition(clause, lbd)?;
        if let Some(trace) = self.trace.as_mut() {
            trace.note_premises(Node::Clause(learnt_key), premises);
        }
        self.watch_clause(learnt_key)?;

        match length {
            1 => Ok(AnalysisResult::UnitClause {
                key: learnt_key,
                literal: asserted,
            }),
            _ => Ok(AnalysisResult::AssertingClause {
                key: learnt_key,
                literal: asserted,
            }),
        }
    }

    /// The highest level of any literal in the clause `key`.
    fn highest_level_of(&self, key: &ClauseKey) -> Result<LevelIndex, ErrorKind> {
        let clause = self.clause_db.get(key)?;
        let mut highest = 0;
        for literal in clause {
            match self.atom_db.level_of(literal.atom()) {
                Some(level) => highest = std::cmp::max(highest, level),
                None => {
                    log::error!(target: targets::ANALYSIS, "Unvalued {literal} in conflict {key}");
                    return Err(err::AnalysisError::NoAssertion.into());
                }
            }
        }
        Ok(highest)
    }

    /// Resolves from the conflict `key` through the reasons of literals at `level`, until a single literal of `level` remains.
    ///
    /// Returns the remaining literal, together with the literals met from levels between `0` and `level`.
    /// Every atom met is left marked on the resolution buffer.
    fn resolve_to_uip(
        &mut self,
        key: ClauseKey,
        level: LevelIndex,
        mut premises: Option<&mut Vec<Node>>,
    ) -> Result<(CLiteral, CClause), ErrorKind> {
        let mut lower: CClause = Vec::default();
        let mut open = 0_usize;
        let mut trail_index = self.trail.literals.len();
        let mut reason = key;

        if let Some(premises) = premises.as_mut() {
            premises.push(Node::Clause(key));
        }

        loop {
            self.clause_db.bump_activity(&reason);

            let clause = self.clause_db.get(&reason)?;
            for literal in clause {
                let atom = literal.atom();
                if !self.resolution_buffer.mark(atom) {
                    continue;
                }

                match self.atom_db.level_of(atom) {
                    Some(0) => {
                        if let Some(premises) = premises.as_mut() {
                            premises.push(Node::Fixed(atom));
                        }
                    }
                    Some(literal_level) if literal_level == level => open += 1,
                    Some(_) => {
                        lower.try_reserve(1)?;
                        lower.push(*literal);
                    }
                    None => return Err(err::AnalysisError::NoAssertion.into()),
                }
            }

            let resolved = loop {
                if trail_index == 0 {
                    return Err(err::AnalysisError::NoAssertion.into());
                }
                trail_index -= 1;
                let literal = self.trail.literals[trail_index];
                if self.resolution_buffer.is_marked(literal.atom())
                    && self.atom_db.level_of(literal.atom()) == Some(level)
                {
                    break literal;
                }
            };

            open = match open.checked_sub(1) {
                Some(remaining) => remaining,
                None => return Err(err::AnalysisError::NoAssertion.into()),
            };
            if open == 0 {
                return Ok((resolved, lower));
            }

            reason = match self.atom_db.reason_of(resolved.atom()) {
                Some(reason) => reason,
                None => {
                    log::error!(target: targets::ANALYSIS, "No reason for {resolved} before a UIP");
                    return Err(err::AnalysisError::MissingReason.into());
                }
            };
            if let Some(premises) = premises.as_mut() {
                premises.push(Node::Clause(reason));
            }
        }
    }

    /// Removes each literal from `lower` whose reason is subsumed by the marked literals and literals valued at level `0`.
    fn minimize(
        &mut self,
        lower: &mut CClause,
        mut premises: Option<&mut Vec<Node>>,
    ) -> Result<(), ErrorKind> {
        let mut index = 0;
        while index < lower.len() {
            let atom = lower[index].atom();
            let Some(reason) = self.atom_db.reason_of(atom) else {
                index += 1;
                continue;
            };

            let reason_clause = self.clause_db.get(&reason)?;
            let redundant = reason_clause.iter().all(|other| {
                other.atom() == atom
                    || self.resolution_buffer.is_marked(other.atom())
                    || self.atom_db.level_of(other.atom()) == Some(0)
            });

            match redundant {
                true => {
                    if let Some(premises) = premises.as_mut() {
                        premises.push(Node::Clause(reason));
                        premises.extend(
                            reason_clause
                                .iter()
                                .filter(|other| self.atom_db.level_of(other.atom()) == Some(0))
                                .map(|other| Node::Fixed(other.atom())),
                        );
                    }
                    log::trace!(target: targets::ANALYSIS, "Minimized away {}", lower[index]);
                    lower.swap_remove(index);
                }
                false => index += 1,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{config::Config, context::Context};

    use super::*;

    fn context_with(atoms: usize, clauses: &[&[CLiteral]]) -> Context {
        let mut ctx = Context::from_config(Config::default());
        for _ in 0..atoms {
            assert!(ctx.increase_max_var().is_ok());
        }
        for clause in clauses {
            for literal in clause.iter() {
                assert!(ctx.add(*literal).is_ok());
            }
            assert!(ctx.add(0).is_ok());
        }
        ctx
    }

    fn decide(ctx: &mut Context, literal: CLiteral) -> Result<(), err::BCPError> {
        ctx.trail.new_level();
        ctx.assign(literal, None);
        ctx.propagate()
    }

    #[test]
    fn first_uip() {
        // Deciding 1 then 2 leads to a conflict, with 3 as the first UIP at level 2.
        let mut ctx = context_with(5, &[&[-2, 3], &[-3, -1, 4], &[-3, 5], &[-4, -5]]);

        assert_eq!(decide(&mut ctx, 1), Ok(()));
        let Err(err::BCPError::Conflict(key)) = decide(&mut ctx, 2) else {
            panic!("expected a conflict");
        };

        let result = ctx.conflict_analysis(&key);
        let Ok(AnalysisResult::AssertingClause { key, literal }) = result else {
            panic!("expected an asserting clause");
        };

        assert_eq!(literal, -3);
        assert_eq!(ctx.trail.level(), 1);
        assert_eq!(ctx.clause_db.get(&key), Ok([-3, -1].as_slice()));
        assert_eq!(ctx.atom_db.value_of(3), None);
    }

    #[test]
    fn unit_learnt_at_level_zero() {
        let mut ctx = context_with(2, &[&[-1, 2], &[-1, -2]]);

        let Err(err::BCPError::Conflict(key)) = decide(&mut ctx, 1) else {
            panic!("expected a conflict");
        };

        let result = ctx.conflict_analysis(&key);
        assert_eq!(
            result,
            Ok(AnalysisResult::UnitClause {
                key: ClauseKey::AdditionUnit(0),
                literal: -1
            })
        );
        assert_eq!(ctx.trail.level(), 0);
        assert!(ctx.trail.literals.is_empty());
    }

    #[test]
    fn conflict_at_level_zero() {
        // The unit clause is added last, so the conflict is found on propagation.
        let mut ctx = context_with(2, &[&[-1, 2], &[-1, -2], &[1]]);
        assert!(!ctx.inconsistent());

        let Err(err::BCPError::Conflict(key)) = ctx.propagate() else {
            panic!("expected a conflict");
        };
        assert_eq!(ctx.conflict_analysis(&key), Ok(AnalysisResult::FundamentalConflict));
        assert!(ctx.inconsistent());
    }
}
