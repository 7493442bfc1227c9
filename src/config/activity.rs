/// Representation used for the activity of atoms and clauses.
pub type Activity = f64;
