use kestrel_sat::{reports::Report, types::err};

mod common;
use common::*;

mod assumptions {
    use super::*;

    #[test]
    fn direct() {
        let mut ctx = context_with(2, &[&[-1, 2], &[-2]]);

        assert!(ctx.assume(1).is_ok());
        assert_eq!(ctx.solve(0), Ok(Report::Unsatisfiable));
        assert_eq!(ctx.failed_assumption(1), Ok(true));
        assert_eq!(ctx.failed_assumptions(), Ok(vec![1]));
        assert!(!ctx.inconsistent());
    }

    #[test]
    fn small_chain() {
        let mut ctx = context_with(5, &[&[-1, 2], &[-2, 3], &[-3, 4], &[-4, 5], &[-5]]);

        assert!(ctx.assume(1).is_ok());
        assert_eq!(ctx.solve(0), Ok(Report::Unsatisfiable));
        assert_eq!(ctx.failed_assumptions(), Ok(vec![1]));
    }

    #[test]
    fn contradictory_assumptions() {
        let mut ctx = context_with(2, &[&[1, 2], &[-1, 2]]);

        assert!(ctx.assume(1).is_ok());
        assert!(ctx.assume(-1).is_ok());
        assert_eq!(ctx.solve(0), Ok(Report::Unsatisfiable));
        assert_eq!(ctx.failed_assumptions(), Ok(vec![1, -1]));
        assert!(!ctx.inconsistent());
    }

    #[test]
    fn only_responsible_assumptions_fail() {
        let mut ctx = context_with(4, &[&[-1, -2, 3], &[-3, -4]]);

        for assumption in [4, 1, 2] {
            assert!(ctx.assume(assumption).is_ok());
        }
        assert_eq!(ctx.solve(0), Ok(Report::Unsatisfiable));
        assert_eq!(ctx.failed_assumptions(), Ok(vec![4, 1, 2]));

        for assumption in [1, 4] {
            assert!(ctx.assume(assumption).is_ok());
        }
        assert_eq!(ctx.solve(0), Ok(Report::Satisfiable));
        assert_eq!(ctx.deref(2), Ok(Some(false)));
    }

    #[test]
    fn irrelevant_assumption_excluded() {
        let mut ctx = context_with(3, &[&[-1, 2], &[-2]]);

        assert!(ctx.assume(3).is_ok());
        assert!(ctx.assume(1).is_ok());
        assert_eq!(ctx.solve(0), Ok(Report::Unsatisfiable));
        assert_eq!(ctx.failed_assumption(3), Ok(false));
        assert_eq!(ctx.failed_assumptions(), Ok(vec![1]));
    }

    #[test]
    fn assumptions_are_consumed() {
        let mut ctx = context_with(2, &[&[-1, 2]]);

        assert!(ctx.assume(1).is_ok());
        assert!(ctx.assume(-2).is_ok());
        assert_eq!(ctx.solve(0), Ok(Report::Unsatisfiable));

        assert_eq!(ctx.solve(0), Ok(Report::Satisfiable));
        assert_eq!(
            ctx.failed_assumptions(),
            Err(err::ErrorKind::State(err::StateError::NotUnsatisfiable))
        );
    }

    #[test]
    fn satisfiable_assumptions_hold() {
        let mut ctx = context_with(3, &[&[1, 2, 3]]);

        assert!(ctx.assume(-1).is_ok());
        assert!(ctx.assume(-2).is_ok());
        assert_eq!(ctx.solve(0), Ok(Report::Satisfiable));
        assert_eq!(ctx.deref(-1), Ok(Some(true)));
        assert_eq!(ctx.deref(-2), Ok(Some(true)));
        assert_eq!(ctx.deref(3), Ok(Some(true)));
    }

    #[test]
    fn repeated_assumption() {
        let mut ctx = context_with(2, &[&[-1, 2], &[-2]]);

        assert!(ctx.assume(1).is_ok());
        assert!(ctx.assume(1).is_ok());
        assert_eq!(ctx.solve(0), Ok(Report::Unsatisfiable));
        assert_eq!(ctx.failed_assumptions(), Ok(vec![1]));
    }

    #[test]
    fn monotonic() {
        let mut ctx = context_with(3, &[&[-1, 2], &[-2, 3], &[-1, -3]]);

        assert!(ctx.assume(1).is_ok());
        assert_eq!(ctx.solve(0), Ok(Report::Unsatisfiable));

        for extra in [2, -2, 3, -3] {
            assert!(ctx.assume(1).is_ok());
            assert!(ctx.assume(extra).is_ok());
            assert_eq!(ctx.solve(0), Ok(Report::Unsatisfiable));
        }
    }
}
