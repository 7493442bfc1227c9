use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::atom::Atom,
    types::err::ErrorKind,
};

impl<R: rand::Rng + rand::SeedableRng> GenericContext<R> {
    /// Extends the language of the context by a fresh atom, returning the atom.
    ///
    /// As atoms are introduced in order, the returned atom is also the count of atoms in the context.
    pub fn increase_max_var(&mut self) -> Result<Atom, ErrorKind> {
        self.check_usable()?;
        self.touch();

        match self.fresh_atom() {
            Ok(atom) => {
                log::trace!(target: targets::VALUATION, "Fresh atom {atom}");
                Ok(atom)
            }
            Err(e) => Err(self.note_error(e)),
        }
    }

    /// Obtains a fresh atom from the atom database and grows every other per-atom structure to include the atom.
    fn fresh_atom(&mut self) -> Result<Atom, ErrorKind> {
        let atom = self.atom_db.fresh_atom()?;
        let count = self.atom_db.count();
        self.watches.grow_to(count)?;
        self.resolution_buffer.grow_to(count)?;
        self.trail.try_reserve(1)?;
        Ok(atom)
    }
}
