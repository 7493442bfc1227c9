use crate::{
    context::GenericContext,
    db::ClauseKey,
    misc::log::targets::{self},
    structures::{clause::Clause, literal::CLiteral},
    types::err::ErrorKind,
};

use super::preprocess::{preprocess_clause, PreprocessingOk};

impl<R: rand::Rng + rand::SeedableRng> GenericContext<R> {
    /// Adds `literal` to the clause under construction, or adds the clause under construction to the context if `literal` is `0`.
    ///
    /// A clause is added to the context as an original clause, and the index of the clause is the count of original clauses added before the clause.
    /// Adding `0` to an empty clause under construction adds the empty clause.
    pub fn add(&mut self, literal: CLiteral) -> Result<(), ErrorKind> {
        self.check_usable()?;

        if literal != 0 {
            self.check_literal(literal)?;
        }

        self.touch();
        self.literal_added = true;

        let result = match literal {
            0 => self.commit_clause(),

            _ => match self.clause_buffer.try_reserve(1) {
                Ok(()) => {
                    self.clause_buffer.push(literal);
                    Ok(())
                }
                Err(e) => Err(ErrorKind::from(e)),
            },
        };

        result.map_err(|e| self.note_error(e))
    }

    /// Adds the clause under construction to the context, on the valuation at level `0`.
    fn commit_clause(&mut self) -> Result<(), ErrorKind> {
        if self.trail.level() > 0 {
            self.backjump(0);
        }

        let mut clause = std::mem::take(&mut self.clause_buffer);

        if preprocess_clause(&mut clause) == PreprocessingOk::Tautology {
            let key = self.clause_db.store_original(clause)?;
            log::trace!(target: targets::CLAUSE_DB, "Tautology {key} stored without watches");
            return Ok(());
        }

        self.atom_db.note_occurrences(clause.iter(), clause.len());

        // True literals first, then unvalued literals, then false literals.
        clause.sort_by_key(|literal| match self.atom_db.value_of_literal(*literal) {
            Some(true) => 0,
            None => 1,
            Some(false) => 2,
        });

        let non_false = clause
            .iter()
            .take_while(|literal| self.atom_db.value_of_literal(**literal) != Some(false))
            .count();

        log::trace!(target: targets::CLAUSE_DB, "Original clause {}", clause.as_dimacs(false));
        let key = self.clause_db.store_original(clause)?;

        match non_false {
            0 => {
                let premises = self.level_zero_conflict_premises(key);
                self.note_inconsistent(premises);
            }

            1 => {
                let literal = self.clause_db.get(&key)?[0];
                if self.atom_db.value_of_literal(literal).is_none() {
                    self.assign(literal, Some(key));
                }
            }

            _ => {}
        }

        self.watch_clause(key)
    }

    /// Sets up watches for a stored clause on the literals at positions `0` and `1`.
    ///
    /// Clauses of length two are watched on the binary watch lists, and longer clauses on the long watch lists.
    pub(crate) fn watch_clause(&mut self, key: ClauseKey) -> Result<(), ErrorKind> {
        let clause = self.clause_db.get(&key)?;
        match clause {
            [] | [_] => {}

            [a, b] => {
                let (a, b) = (*a, *b);
                self.watches.watch_binary(a, b, key);
                self.watches.watch_binary(b, a, key);
            }

            [a, b, ..] => {
                let (a, b) = (*a, *b);
                self.watches.watch_long(a, key);
                self.watches.watch_long(b, key);
            }
        }
        Ok(())
    }
}
