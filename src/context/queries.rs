/*!
Queries on a context, e.g. for the value of a literal or membership of an unsatisfiable core.

Queries about the result of a solve are answered only while the context is in the matching state.
In any other state a [StateError](crate::types::err::StateError) is returned, rather than information about some earlier result.
*/

use crate::{
    context::ContextState,
    db::trace::Trace,
    structures::{literal::CLiteral, valuation::Valuation},
    types::err::{self, ErrorKind},
};

use super::GenericContext;

impl<R: rand::Rng + rand::SeedableRng> GenericContext<R> {
    /// A count of atoms in the context, excluding the internal atom.
    pub fn variables(&self) -> usize {
        self.atom_db.count() - 1
    }

    /// A count of original clauses added to the context, including any empty clauses or tautologies.
    pub fn added_original_clauses(&self) -> usize {
        self.clause_db.original_count()
    }

    /// The processor time of the process spent within solves, in seconds.
    pub fn seconds(&self) -> f64 {
        self.counters.time.as_secs_f64()
    }

    /// Whether the formula is unsatisfiable without any assumptions.
    pub fn inconsistent(&self) -> bool {
        self.inconsistent
    }

    /// The value of `literal` in the model found by the most recent solve.
    ///
    /// ```rust
    /// # use kestrel_sat::context::Context;
    /// # use kestrel_sat::reports::Report;
    /// let mut the_context = Context::default();
    /// let p = the_context.increase_max_var().expect("a fresh atom") as i32;
    /// assert!(the_context.deref(p).is_err());
    ///
    /// assert!(the_context.add(-p).is_ok());
    /// assert!(the_context.add(0).is_ok());
    /// assert_eq!(the_context.solve(0), Ok(Report::Satisfiable));
    /// assert_eq!(the_context.deref(-p), Ok(Some(true)));
    /// ```
    pub fn deref(&self, literal: CLiteral) -> Result<Option<bool>, ErrorKind> {
        self.check_literal(literal)?;
        match self.state {
            ContextState::Satisfiable => Ok(self.atom_db.value_of_literal(literal)),
            _ => Err(err::StateError::NotSatisfiable.into()),
        }
    }

    /// The value of `literal`, if the value is fixed at level `0` (i.e. without any decision or assumption).
    pub fn deref_toplevel(&self, literal: CLiteral) -> Result<Option<bool>, ErrorKind> {
        self.check_usable()?;
        let atom = self.check_literal(literal)?;
        match self.atom_db.level_of(atom) {
            Some(0) => Ok(self.atom_db.value_of_literal(literal)),
            _ => Ok(None),
        }
    }

    /// Whether `literal` is an assumption responsible for the most recent solve being unsatisfiable.
    pub fn failed_assumption(&self, literal: CLiteral) -> Result<bool, ErrorKind> {
        self.check_literal(literal)?;
        self.check_unsatisfiable()?;
        Ok(self.failed_assumptions.contains(&literal))
    }

    /// The assumptions responsible for the most recent solve being unsatisfiable, in the order the assumptions were given.
    pub fn failed_assumptions(&self) -> Result<Vec<CLiteral>, ErrorKind> {
        self.check_unsatisfiable()?;
        Ok(self.failed_assumptions.clone())
    }

    /// Whether the model of the most recent solve differs from the model seen at the previous call.
    ///
    /// The first call after a satisfiable solve is always true.
    pub fn changed(&mut self) -> Result<bool, ErrorKind> {
        if self.state != ContextState::Satisfiable {
            return Err(err::StateError::NotSatisfiable.into());
        }

        let model = self.atom_db.valuation().true_literals().collect::<Vec<_>>();
        let changed = self.observed_model.as_ref() != Some(&model);
        self.observed_model = Some(model);
        Ok(changed)
    }

    /// Whether the original clause at `index` is part of the unsatisfiable core of the most recent solve.
    pub fn coreclause(&self, index: usize) -> Result<bool, ErrorKind> {
        let trace = self.core_trace()?;
        match index < self.clause_db.original_count() {
            true => Ok(trace.in_core(index)),
            false => Err(err::BoundsError::ClauseIndex.into()),
        }
    }

    /// Whether the atom of `literal` occurs in some clause of the unsatisfiable core of the most recent solve.
    pub fn corelit(&self, literal: CLiteral) -> Result<bool, ErrorKind> {
        let atom = self.check_literal(literal)?;
        Ok(self.core_trace()?.atom_in_core(atom))
    }

    /// Whether the atom of `literal` was valued at some point during the most recent solve.
    pub fn usedlit(&self, literal: CLiteral) -> Result<bool, ErrorKind> {
        let atom = self.check_literal(literal)?;
        self.core_trace()?;
        Ok(self.atom_db.was_used(atom))
    }

    fn check_unsatisfiable(&self) -> Result<(), ErrorKind> {
        match self.state {
            ContextState::Unsatisfiable => Ok(()),
            _ => Err(err::StateError::NotUnsatisfiable.into()),
        }
    }

    /// The trace, if trace generation is enabled and the most recent solve was unsatisfiable.
    fn core_trace(&self) -> Result<&Trace, ErrorKind> {
        let Some(trace) = self.trace.as_ref() else {
            return Err(err::StateError::TraceDisabled.into());
        };
        self.check_unsatisfiable()?;
        Ok(trace)
    }
}
