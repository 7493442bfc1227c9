use kestrel_sat::{config::Config, context::Context, reports::Report, structures::literal::CLiteral};

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

mod common;
use common::*;

const MAX_ATOMS: usize = 6;

fn arbitrary_literal(g: &mut Gen, atoms: usize) -> CLiteral {
    let atom = (usize::arbitrary(g) % atoms) as CLiteral + 1;
    match bool::arbitrary(g) {
        true => atom,
        false => -atom,
    }
}

/// A small formula, over few enough atoms to check by brute force.
#[derive(Clone, Debug)]
struct Formula {
    atoms: usize,
    clauses: Vec<Vec<CLiteral>>,
}

impl Arbitrary for Formula {
    fn arbitrary(g: &mut Gen) -> Self {
        let atoms = usize::arbitrary(g) % MAX_ATOMS + 1;
        let clause_count = usize::arbitrary(g) % (4 * atoms + 1);
        let clauses = (0..clause_count)
            .map(|_| {
                let length = usize::arbitrary(g) % 4 + 1;
                (0..length).map(|_| arbitrary_literal(g, atoms)).collect()
            })
            .collect();
        Formula { atoms, clauses }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let atoms = self.atoms;
        Box::new(
            self.clauses
                .shrink()
                .filter(|clauses| {
                    clauses
                        .iter()
                        .all(|clause| !clause.is_empty() && !clause.contains(&0))
                })
                .map(move |clauses| Formula { atoms, clauses }),
        )
    }
}

/// A formula together with assumptions over the atoms of the formula.
#[derive(Clone, Debug)]
struct Assumed {
    formula: Formula,
    assumptions: Vec<CLiteral>,
}

impl Arbitrary for Assumed {
    fn arbitrary(g: &mut Gen) -> Self {
        let formula = Formula::arbitrary(g);
        let count = usize::arbitrary(g) % (formula.atoms + 1);
        let assumptions = (0..count)
            .map(|_| arbitrary_literal(g, formula.atoms))
            .collect();
        Assumed {
            formula,
            assumptions,
        }
    }
}

fn load(ctx: &mut Context, formula: &Formula) {
    for _ in 0..formula.atoms {
        assert!(ctx.increase_max_var().is_ok());
    }
    for clause in &formula.clauses {
        for literal in clause {
            assert!(ctx.add(*literal).is_ok());
        }
        assert!(ctx.add(0).is_ok());
    }
}

/// The clauses of `formula` together with a unit clause for each of `literals`.
fn with_units(formula: &Formula, literals: &[CLiteral]) -> Vec<Vec<CLiteral>> {
    let mut clauses = formula.clauses.clone();
    clauses.extend(literals.iter().map(|literal| vec![*literal]));
    clauses
}

#[quickcheck]
fn agrees_with_brute_force(formula: Formula) -> bool {
    init_logging();
    let mut ctx = Context::from_config(Config::default());
    load(&mut ctx, &formula);

    match ctx.solve(0) {
        Ok(Report::Satisfiable) => model_satisfies(&ctx, &formula.clauses),
        Ok(Report::Unsatisfiable) => !brute_force(formula.atoms, &formula.clauses),
        _ => false,
    }
}

#[quickcheck]
fn incremental_agrees_with_brute_force(formula: Formula) -> bool {
    init_logging();
    let mut ctx = Context::from_config(Config::default());
    load(
        &mut ctx,
        &Formula {
            atoms: formula.atoms,
            clauses: Vec::default(),
        },
    );

    for (count, clause) in formula.clauses.iter().enumerate() {
        for literal in clause {
            assert!(ctx.add(*literal).is_ok());
        }
        assert!(ctx.add(0).is_ok());

        let added = &formula.clauses[..=count];
        let agrees = match ctx.solve(0) {
            Ok(Report::Satisfiable) => model_satisfies(&ctx, added),
            Ok(Report::Unsatisfiable) => !brute_force(formula.atoms, added),
            _ => false,
        };
        if !agrees {
            return false;
        }
    }
    true
}

#[quickcheck]
fn failed_assumptions_suffice(assumed: Assumed) -> bool {
    let Assumed {
        formula,
        assumptions,
    } = assumed;
    let mut ctx = Context::from_config(Config::default());
    load(&mut ctx, &formula);
    for assumption in &assumptions {
        assert!(ctx.assume(*assumption).is_ok());
    }

    match ctx.solve(0) {
        Ok(Report::Satisfiable) => {
            model_satisfies(&ctx, &with_units(&formula, &assumptions))
        }

        Ok(Report::Unsatisfiable) => {
            let Ok(failed) = ctx.failed_assumptions() else {
                return false;
            };
            failed.iter().all(|literal| assumptions.contains(literal))
                && !brute_force(formula.atoms, &with_units(&formula, &failed))
        }

        _ => false,
    }
}

#[quickcheck]
fn cores_are_unsatisfiable(assumed: Assumed) -> bool {
    init_logging();
    let Assumed {
        formula,
        assumptions,
    } = assumed;
    let mut ctx = Context::from_config(Config::default());
    assert!(ctx.enable_trace_generation().is_ok());
    load(&mut ctx, &formula);
    for assumption in &assumptions {
        assert!(ctx.assume(*assumption).is_ok());
    }

    match ctx.solve(0) {
        Ok(Report::Satisfiable) => true,

        Ok(Report::Unsatisfiable) => {
            let Ok(failed) = ctx.failed_assumptions() else {
                return false;
            };
            let mut core = Vec::default();
            for (index, clause) in formula.clauses.iter().enumerate() {
                match ctx.coreclause(index) {
                    Ok(true) => core.push(clause.clone()),
                    Ok(false) => {}
                    Err(_) => return false,
                }
            }
            core.extend(failed.iter().map(|literal| vec![*literal]));
            !brute_force(formula.atoms, &core)
        }

        _ => false,
    }
}

/// A configuration under which restarts and reductions follow after few conflicts.
fn eager_schedule_config() -> Config {
    let mut config = Config::default();
    config.luby_u.set(1);
    config.scheduler.luby = Some(1);
    config.scheduler.conflict = Some(3);
    config.clause_db.lbd_bound.value = 0;
    config
}

/// The clauses added and assumptions given ahead of one solve.
#[derive(Clone, Debug)]
struct Round {
    clauses: Vec<Vec<CLiteral>>,
    assumptions: Vec<CLiteral>,
}

/// A sequence of solves on a single context.
#[derive(Clone, Debug)]
struct Session {
    atoms: usize,
    rounds: Vec<Round>,
}

impl Arbitrary for Session {
    fn arbitrary(g: &mut Gen) -> Self {
        let atoms = usize::arbitrary(g) % 5 + 6;
        let round_count = usize::arbitrary(g) % 6 + 1;
        let rounds = (0..round_count)
            .map(|_| {
                let clause_count = usize::arbitrary(g) % atoms + 1;
                let clauses = (0..clause_count)
                    .map(|_| (0..3).map(|_| arbitrary_literal(g, atoms)).collect())
                    .collect();
                let assumption_count = usize::arbitrary(g) % 4;
                let assumptions = (0..assumption_count)
                    .map(|_| arbitrary_literal(g, atoms))
                    .collect();
                Round {
                    clauses,
                    assumptions,
                }
            })
            .collect();
        Session { atoms, rounds }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let atoms = self.atoms;
        let rounds = self.rounds.clone();
        Box::new(
            (0..rounds.len())
                .rev()
                .map(move |length| Session {
                    atoms,
                    rounds: rounds[..length].to_vec(),
                })
                .filter(|session| !session.rounds.is_empty()),
        )
    }
}

/// Whether the result of the most recent solve is consistent with the clauses and assumptions.
fn result_agrees(ctx: &Context, atoms: usize, clauses: &[Vec<CLiteral>], assumptions: &[CLiteral]) -> bool {
    match ctx.report() {
        Report::Satisfiable => {
            model_satisfies(ctx, clauses)
                && assumptions
                    .iter()
                    .all(|literal| ctx.deref(*literal) == Ok(Some(true)))
        }

        Report::Unsatisfiable => {
            let Ok(failed) = ctx.failed_assumptions() else {
                return false;
            };
            if !failed.iter().all(|literal| assumptions.contains(literal)) {
                return false;
            }

            let mut core = Vec::default();
            for (index, clause) in clauses.iter().enumerate() {
                match ctx.coreclause(index) {
                    Ok(true) => core.push(clause.clone()),
                    Ok(false) => {}
                    Err(_) => return false,
                }
            }
            core.extend(failed.iter().map(|literal| vec![*literal]));
            !brute_force(atoms, &core)
        }

        Report::Unknown => false,
    }
}

#[quickcheck]
fn eager_schedules_agree_with_brute_force(session: Session) -> bool {
    init_logging();
    let mut ctx = Context::from_config(eager_schedule_config());
    assert!(ctx.enable_trace_generation().is_ok());
    for _ in 0..session.atoms {
        assert!(ctx.increase_max_var().is_ok());
    }

    let mut added = Vec::default();
    for (count, round) in session.rounds.iter().enumerate() {
        if count % 3 == 2 && ctx.remove_learned(10).is_err() {
            return false;
        }

        for clause in &round.clauses {
            for literal in clause {
                assert!(ctx.add(*literal).is_ok());
            }
            assert!(ctx.add(0).is_ok());
        }
        added.extend(round.clauses.iter().cloned());

        for assumption in &round.assumptions {
            assert!(ctx.assume(*assumption).is_ok());
        }

        if ctx.solve(0).is_err() || !result_agrees(&ctx, session.atoms, &added, &round.assumptions) {
            return false;
        }
    }
    true
}

#[test]
fn eager_schedules_restart_and_reduce() {
    init_logging();
    // Five pigeons, four holes: atom 4(p - 1) + h for pigeon p in hole h.
    // Each pigeon is placed only if the selector 21 holds.
    let atom = |pigeon: i32, hole: i32| 4 * (pigeon - 1) + hole;
    let selector = 21;

    let mut clauses = Vec::default();
    for pigeon in 1..=5 {
        let mut clause = vec![-selector];
        clause.extend((1..=4).map(|hole| atom(pigeon, hole)));
        clauses.push(clause);
    }
    for hole in 1..=4 {
        for a in 1..=5 {
            for b in (a + 1)..=5 {
                clauses.push(vec![-atom(a, hole), -atom(b, hole)]);
            }
        }
    }

    let mut ctx = Context::from_config(eager_schedule_config());
    assert!(ctx.enable_trace_generation().is_ok());
    for _ in 0..selector {
        assert!(ctx.increase_max_var().is_ok());
    }
    let clause_refs = clauses.iter().map(|clause| clause.as_slice()).collect::<Vec<_>>();
    add_clauses(&mut ctx, &clause_refs);

    assert!(ctx.assume(selector).is_ok());
    assert_eq!(ctx.solve(0), Ok(Report::Unsatisfiable));
    assert_eq!(ctx.failed_assumptions(), Ok(vec![selector]));
    assert!(ctx.counters.restarts > 0);
    assert!(ctx.counters.reductions > 0);

    let selector_unit = [selector];
    let mut core = clauses
        .iter()
        .enumerate()
        .filter(|(index, _)| ctx.coreclause(*index) == Ok(true))
        .map(|(_, clause)| clause.as_slice())
        .collect::<Vec<_>>();
    core.push(&selector_unit);
    let mut fresh = context_with(selector as usize, &core);
    assert_eq!(fresh.solve(0), Ok(Report::Unsatisfiable));

    // Learnt clauses removed while the selector is fixed false leave later solves intact.
    assert!(ctx.remove_learned(10).is_ok());
    assert_eq!(ctx.solve(0), Ok(Report::Satisfiable));
    assert_eq!(ctx.deref(selector), Ok(Some(false)));
    assert!(model_satisfies(&ctx, &clauses));

    assert!(ctx.assume(selector).is_ok());
    assert_eq!(ctx.solve(0), Ok(Report::Unsatisfiable));
    assert_eq!(ctx.failed_assumptions(), Ok(vec![selector]));
}
