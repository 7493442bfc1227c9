use crate::{
    context::GenericContext,
    db::trace::Trace,
    misc::log::targets::{self},
    structures::literal::CLiteral,
    types::err::{self, ErrorKind},
};

impl<R: rand::Rng + rand::SeedableRng> GenericContext<R> {
    /// Assumes `literal` holds for the next solve, and only the next solve.
    pub fn assume(&mut self, literal: CLiteral) -> Result<(), ErrorKind> {
        self.check_usable()?;
        self.check_literal(literal)?;
        self.touch();

        if let Err(e) = self.assumptions.try_reserve(1) {
            return Err(self.note_error(e.into()));
        }
        log::trace!(target: targets::ASSUMPTION, "Assumed {literal}");
        self.assumptions.push(literal);
        Ok(())
    }

    /// Enables generation of a trace, from which unsatisfiable cores are extracted.
    ///
    /// A trace must be enabled before any literal is added to the context.
    pub fn enable_trace_generation(&mut self) -> Result<(), ErrorKind> {
        self.check_usable()?;
        if self.literal_added {
            return Err(err::StateError::TraceAfterInput.into());
        }

        if self.trace.is_none() {
            self.trace = Some(Trace::default());
        }
        Ok(())
    }

    /// Returns the context to the state of a fresh context with the same configuration.
    ///
    /// Every atom, clause, assumption, count, and trace is forgotten, and the source of rng is reseeded.
    pub fn reset(&mut self) {
        log::info!("Reset");
        *self = Self::from_config(self.config.clone());
    }
}

#[cfg(test)]
mod tests {
    use crate::{config::Config, context::Context};

    use super::*;

    #[test]
    fn trace_before_input() {
        let mut ctx = Context::from_config(Config::default());
        assert!(ctx.increase_max_var().is_ok());
        assert!(ctx.enable_trace_generation().is_ok());

        assert!(ctx.add(1).is_ok());
        assert_eq!(
            ctx.enable_trace_generation(),
            Err(err::StateError::TraceAfterInput.into())
        );

        ctx.reset();
        assert!(ctx.trace.is_none());
        assert!(ctx.enable_trace_generation().is_ok());
    }
}
