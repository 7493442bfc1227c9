#![allow(dead_code)]

use kestrel_sat::{
    config::Config,
    context::Context,
    structures::literal::{CLiteral, Literal},
};

/// Installs a logger for the test harness, with output filtered by `RUST_LOG`.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A context with `atoms` atoms and the given clauses.
pub fn context_with(atoms: usize, clauses: &[&[CLiteral]]) -> Context {
    let mut ctx = Context::from_config(Config::default());
    for _ in 0..atoms {
        assert!(ctx.increase_max_var().is_ok());
    }
    add_clauses(&mut ctx, clauses);
    ctx
}

pub fn add_clauses(ctx: &mut Context, clauses: &[&[CLiteral]]) {
    for clause in clauses {
        for literal in clause.iter() {
            assert!(ctx.add(*literal).is_ok());
        }
        assert!(ctx.add(0).is_ok());
    }
}

/// Whether each clause has some literal true on the model of the most recent (satisfiable) solve.
pub fn model_satisfies(ctx: &Context, clauses: &[Vec<CLiteral>]) -> bool {
    clauses.iter().all(|clause| {
        clause
            .iter()
            .any(|literal| ctx.deref(*literal) == Ok(Some(true)))
    })
}

/// Satisfiability of the clauses over `atoms` atoms, by trying every valuation.
pub fn brute_force(atoms: usize, clauses: &[Vec<CLiteral>]) -> bool {
    (0..(1_u64 << atoms)).any(|valuation| {
        clauses.iter().all(|clause| {
            clause.iter().any(|literal| {
                let value = (valuation >> (literal.atom() - 1)) & 1 == 1;
                value == literal.polarity()
            })
        })
    })
}
