use crate::structures::{clause::CClause, literal::Literal};

/// Primarily to distinguish tautologies from other clauses.
#[derive(Debug, PartialEq, Eq)]
pub enum PreprocessingOk {
    /// A tautology.
    Tautology,

    /// Any other clause, including the empty clause.
    Clause,
}

/// Preprocess a clause to remove duplicate literals, noting whether the clause is a tautology.
///
/// The literals of a tautology are kept, though duplicates may be removed.
pub(super) fn preprocess_clause(clause: &mut CClause) -> PreprocessingOk {
    let mut index = 0;
    let mut max = clause.len();
    let mut tautology = false;

    'clause_loop: while index < max {
        let literal = clause[index];

        for other_index in 0..index {
            let other_literal = clause[other_index];
            if other_literal.atom() == literal.atom() {
                if other_literal.polarity() == literal.polarity() {
                    clause.swap_remove(index);
                    max -= 1;
                    continue 'clause_loop;
                } else {
                    tautology = true;
                }
            }
        }
        index += 1
    }

    match tautology {
        true => PreprocessingOk::Tautology,
        false => PreprocessingOk::Clause,
    }
}
