use kestrel_sat::{
    config::{Config, PhaseDefault},
    context::Context,
    reports::Report,
    types::err,
};

mod common;
use common::*;

/// A context with `atoms` atoms, the given clauses, and a positive default phase.
fn positive_context_with(atoms: usize, clauses: &[&[i32]]) -> Context {
    let mut config = Config::default();
    config.atom_db.default_phase.set(PhaseDefault::Positive);
    let mut ctx = Context::from_config(config);
    for _ in 0..atoms {
        assert!(ctx.increase_max_var().is_ok());
    }
    add_clauses(&mut ctx, clauses);
    ctx
}

mod phases {
    use super::*;

    #[test]
    fn global_default() {
        let mut ctx = context_with(3, &[]);
        ctx.set_global_default_phase(PhaseDefault::Negative);
        assert_eq!(ctx.solve(0), Ok(Report::Satisfiable));
        for atom in 1..=3 {
            assert_eq!(ctx.deref(atom), Ok(Some(false)));
        }

        // Saved phases are preferred to the default.
        ctx.set_global_default_phase(PhaseDefault::Positive);
        assert_eq!(ctx.solve(0), Ok(Report::Satisfiable));
        assert_eq!(ctx.deref(1), Ok(Some(false)));

        ctx.reset_phases();
        assert_eq!(ctx.solve(0), Ok(Report::Satisfiable));
        for atom in 1..=3 {
            assert_eq!(ctx.deref(atom), Ok(Some(true)));
        }
    }

    #[test]
    fn phase_codes() {
        assert_eq!(PhaseDefault::try_from(0), Ok(PhaseDefault::Negative));
        assert_eq!(PhaseDefault::try_from(1), Ok(PhaseDefault::Positive));
        assert_eq!(PhaseDefault::try_from(3), Ok(PhaseDefault::Random));
        assert_eq!(PhaseDefault::try_from(-1), Err(err::BoundsError::PhaseCode));
    }

    #[test]
    fn literal_phase() {
        let mut ctx = positive_context_with(3, &[]);
        assert!(ctx.set_default_phase_lit(-2, 1).is_ok());
        assert!(ctx.set_default_phase_lit(3, -1).is_ok());
        assert_eq!(ctx.solve(0), Ok(Report::Satisfiable));
        assert_eq!(ctx.deref(1), Ok(Some(true)));
        assert_eq!(ctx.deref(2), Ok(Some(false)));
        assert_eq!(ctx.deref(3), Ok(Some(false)));

        // A set phase replaces the saved phase.
        assert!(ctx.set_default_phase_lit(2, 1).is_ok());
        assert_eq!(ctx.solve(0), Ok(Report::Satisfiable));
        assert_eq!(ctx.deref(2), Ok(Some(true)));

        assert!(ctx.set_default_phase_lit(2, 0).is_ok());
        assert_eq!(
            ctx.set_default_phase_lit(4, 1),
            Err(err::BoundsError::UnknownAtom.into())
        );
        assert_eq!(
            ctx.set_default_phase_lit(0, 1),
            Err(err::BoundsError::ZeroLiteral.into())
        );
    }

    #[test]
    fn jeroslow_wang() {
        let mut ctx = context_with(3, &[&[-1, 2], &[-1, 3], &[1, 2, 3]]);
        ctx.set_global_default_phase(PhaseDefault::JeroslowWang);
        assert_eq!(ctx.solve(0), Ok(Report::Satisfiable));
        assert_eq!(ctx.deref(1), Ok(Some(false)));
        assert_eq!(ctx.deref(2), Ok(Some(true)));
        assert_eq!(ctx.deref(3), Ok(Some(true)));
    }

    #[test]
    fn random_phase_models() {
        let clauses = vec![vec![1, 2, 3], vec![-1, -2], vec![-2, -3], vec![-1, -3]];
        let mut ctx = context_with(3, &[&[1, 2, 3], &[-1, -2], &[-2, -3], &[-1, -3]]);
        ctx.set_global_default_phase(PhaseDefault::Random);
        for _ in 0..4 {
            ctx.reset_phases();
            assert_eq!(ctx.solve(0), Ok(Report::Satisfiable));
            assert!(model_satisfies(&ctx, &clauses));
        }
    }
}

mod importance {
    use super::*;

    #[test]
    fn lowest_atom_by_default() {
        let mut ctx = positive_context_with(2, &[&[-1, -2]]);
        assert_eq!(ctx.solve(0), Ok(Report::Satisfiable));
        assert_eq!(ctx.deref(1), Ok(Some(true)));
        assert_eq!(ctx.deref(2), Ok(Some(false)));
    }

    #[test]
    fn more_important() {
        let mut ctx = positive_context_with(2, &[&[-1, -2]]);
        assert!(ctx.set_more_important_lit(-2).is_ok());
        assert_eq!(ctx.solve(0), Ok(Report::Satisfiable));
        assert_eq!(ctx.deref(1), Ok(Some(false)));
        assert_eq!(ctx.deref(2), Ok(Some(true)));
    }

    #[test]
    fn less_important() {
        let mut ctx = positive_context_with(3, &[&[-1, -2], &[-1, -3]]);
        assert!(ctx.set_less_important_lit(1).is_ok());
        assert_eq!(ctx.solve(0), Ok(Report::Satisfiable));
        assert_eq!(ctx.deref(1), Ok(Some(false)));
        assert_eq!(ctx.deref(2), Ok(Some(true)));
        assert_eq!(ctx.deref(3), Ok(Some(true)));
    }

    #[test]
    fn unknown_atoms() {
        let mut ctx = context_with(1, &[]);
        assert_eq!(
            ctx.set_more_important_lit(2),
            Err(err::BoundsError::UnknownAtom.into())
        );
        assert_eq!(
            ctx.set_less_important_lit(-2),
            Err(err::BoundsError::UnknownAtom.into())
        );
    }
}

mod scores {
    use super::*;

    /// Four pigeons, three holes, where each pigeon is placed only if the selector `13` holds.
    fn selected_pigeons() -> Context {
        let mut ctx = context_with(13, &[]);
        let atom = |pigeon: i32, hole: i32| 3 * (pigeon - 1) + hole;

        for pigeon in 1..=4 {
            add_clauses(&mut ctx, &[&[-13, atom(pigeon, 1), atom(pigeon, 2), atom(pigeon, 3)]]);
        }
        for hole in 1..=3 {
            for a in 1..=4 {
                for b in (a + 1)..=4 {
                    add_clauses(&mut ctx, &[&[-atom(a, hole), -atom(b, hole)]]);
                }
            }
        }
        ctx
    }

    #[test]
    fn removal_keeps_results() {
        init_logging();
        let mut ctx = selected_pigeons();

        assert!(ctx.assume(13).is_ok());
        assert_eq!(ctx.solve(0), Ok(Report::Unsatisfiable));
        assert_eq!(ctx.failed_assumptions(), Ok(vec![13]));

        assert_eq!(ctx.remove_learned(100), Ok(0));
        assert!(ctx.remove_learned(0).is_ok());

        assert!(ctx.assume(13).is_ok());
        assert_eq!(ctx.solve(0), Ok(Report::Unsatisfiable));
        assert_eq!(ctx.solve(0), Ok(Report::Satisfiable));
        assert_eq!(ctx.deref(13), Ok(Some(false)));
    }

    #[test]
    fn rescoring_keeps_results() {
        let mut ctx = selected_pigeons();
        ctx.adjust(1.0);
        ctx.adjust(f64::NAN);

        assert!(ctx.assume(13).is_ok());
        assert_eq!(ctx.solve(0), Ok(Report::Unsatisfiable));

        ctx.reset_scores();
        assert!(ctx.assume(13).is_ok());
        assert_eq!(ctx.solve(0), Ok(Report::Unsatisfiable));
        assert!(ctx.counters.total_conflicts > 0);
    }
}
