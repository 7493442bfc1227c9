use crate::{
    config::Config,
    db::{
        atom::AtomDB,
        clause::ClauseDB,
        trace::{Node, Trace},
        trail::Trail,
        watches::Watches,
        ClauseKey,
    },
    misc::log::targets::{self},
    reports::Report,
    resolution_buffer::ResolutionBuffer,
    structures::{
        atom::Atom,
        clause::CClause,
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

use super::{ContextState, Counters};

/// A generic context, parameratised to a source of randomness.
///
/// Requires a source of [rng](rand::Rng) which (also) implements [SeedableRng](rand::SeedableRng), so the source may be reseeded from the configuration on a [reset](GenericContext::reset).
///
/// # Example
///
/// ```rust
/// # use kestrel_sat::context::GenericContext;
/// # use kestrel_sat::generic::random::MinimalPCG32;
/// # use kestrel_sat::config::Config;
/// let context = GenericContext::<MinimalPCG32>::from_config(Config::default());
/// ```
pub struct GenericContext<R: rand::Rng + rand::SeedableRng> {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context/solve.
    pub counters: Counters,

    /// The atom database.
    /// See [db::atom](crate::db::atom) for details.
    pub atom_db: AtomDB,

    /// Watch lists for each literal.
    /// See [db::watches](crate::db::watches) for details.
    pub watches: Watches,

    /// The clause database.
    /// See [db::clause](crate::db::clause) for details.
    pub clause_db: ClauseDB,

    /// The trail of assignments.
    /// See [db::trail](crate::db::trail) for details.
    pub trail: Trail,

    /// The trace, if trace generation is enabled.
    /// See [db::trace](crate::db::trace) for details.
    pub trace: Option<Trace>,

    /// The status of the context.
    pub state: ContextState,

    /// The source of rng.
    pub rng: R,

    /// A buffer for resolution.
    pub resolution_buffer: ResolutionBuffer,

    /// The clause under construction.
    pub(crate) clause_buffer: CClause,

    /// Assumptions for the next solve.
    pub(crate) assumptions: Vec<CLiteral>,

    /// Assumptions of the current (or most recent) solve.
    pub(crate) solve_assumptions: Vec<CLiteral>,

    /// Assumptions responsible for unsatisfiability of the most recent solve.
    pub(crate) failed_assumptions: Vec<CLiteral>,

    /// Whether the formula is unsatisfiable, regardless of any assumptions.
    pub(crate) inconsistent: bool,

    /// Whether some literal has been added to the context.
    pub(crate) literal_added: bool,

    /// The model observed at the previous call to [changed](GenericContext::changed).
    pub(crate) observed_model: Option<Vec<CLiteral>>,
}

impl<R: rand::Rng + rand::SeedableRng> GenericContext<R> {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        let atom_db = AtomDB::new(&config);
        let mut watches = Watches::default();
        let mut resolution_buffer = ResolutionBuffer::default();

        // Space for the internal atom, so failure is not a concern.
        let _ = watches.grow_to(atom_db.count());
        let _ = resolution_buffer.grow_to(atom_db.count());

        Self {
            atom_db,
            clause_db: ClauseDB::new(&config),
            watches,
            trail: Trail::default(),
            trace: None,

            counters: Counters::default(),
            rng: R::seed_from_u64(config.seed.value),
            state: ContextState::Configuration,
            resolution_buffer,

            clause_buffer: CClause::default(),
            assumptions: Vec::default(),
            solve_assumptions: Vec::default(),
            failed_assumptions: Vec::default(),
            inconsistent: false,
            literal_added: false,
            observed_model: None,

            config,
        }
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(self.state)
    }

    /// An error if the context is unusable.
    pub(crate) fn check_usable(&self) -> Result<(), ErrorKind> {
        match self.state {
            ContextState::Unusable => Err(err::StateError::Unusable.into()),
            _ => Ok(()),
        }
    }

    /// The atom of `literal`, or an error if `literal` is not a literal of the context.
    pub(crate) fn check_literal(&self, literal: CLiteral) -> Result<Atom, ErrorKind> {
        if literal == 0 {
            return Err(err::BoundsError::ZeroLiteral.into());
        }
        let atom = literal.atom();
        match (atom as usize) < self.atom_db.count() {
            true => Ok(atom),
            false => Err(err::BoundsError::UnknownAtom.into()),
        }
    }

    /// Notes an error, marking the context unusable unless the error leaves the context as it was.
    pub(crate) fn note_error(&mut self, error: ErrorKind) -> ErrorKind {
        match error {
            ErrorKind::AtomDB(_) | ErrorKind::Bounds(_) | ErrorKind::State(_) => {}

            ErrorKind::Analysis(_)
            | ErrorKind::BCP(_)
            | ErrorKind::ClauseDB(_)
            | ErrorKind::Resource(_) => {
                log::error!("Context unusable after: {error}");
                self.state = ContextState::Unusable;
            }
        }
        error
    }

    /// Prepares the context for input, abandoning the result of any previous solve.
    pub(crate) fn touch(&mut self) {
        match self.state {
            ContextState::Configuration => self.state = ContextState::Input,

            ContextState::Satisfiable | ContextState::Unsatisfiable | ContextState::Unknown => {
                log::trace!(target: targets::VALUATION, "Input after {}", self.state);
                self.backjump(0);
                if let Some(trace) = self.trace.as_mut() {
                    trace.clear_core();
                }
                self.state = ContextState::Input;
            }

            ContextState::Input | ContextState::Solving | ContextState::Unusable => {}
        }
    }

    /// Values `literal` at the current level, and stores the literal on the trail.
    ///
    /// If trace generation is enabled, premises of a value fixed at level `0` by propagation are noted.
    pub(crate) fn assign(&mut self, literal: CLiteral, reason: Option<ClauseKey>) {
        let level = self.trail.level();
        self.atom_db.set_value(literal, level, reason);
        self.trail.store_assignment(literal);

        if level == 0 {
            if let (Some(trace), Some(key)) = (self.trace.as_mut(), reason) {
                if let Ok(clause) = self.clause_db.get(&key) {
                    let mut premises = vec![Node::Clause(key)];
                    premises.extend(
                        clause
                            .iter()
                            .filter(|other| other.atom() != literal.atom())
                            .map(|other| Node::Fixed(other.atom())),
                    );
                    trace.note_premises(Node::Fixed(literal.atom()), premises);
                }
            }
        }
    }

    /// Notes the formula is unsatisfiable regardless of assumptions, with the given premises for the conflict.
    pub(crate) fn note_inconsistent(&mut self, premises: Vec<Node>) {
        log::info!(target: targets::ANALYSIS, "Formula found to be unsatisfiable");
        self.inconsistent = true;
        if let Some(trace) = self.trace.as_mut() {
            trace.note_fundamental_conflict(premises);
        }
    }

    /// Premises of a conflict at level `0` on the clause `key`: the clause itself, and the value of each atom in the clause.
    pub(crate) fn level_zero_conflict_premises(&self, key: ClauseKey) -> Vec<Node> {
        let mut premises = vec![Node::Clause(key)];
        if let Ok(clause) = self.clause_db.get(&key) {
            premises.extend(clause.iter().map(|literal| Node::Fixed(literal.atom())));
        }
        premises
    }
}
