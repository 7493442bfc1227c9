/*!
A buffer for marking atoms during resolution-based analysis.

Conflict analysis, minimization of a learnt clause, and analysis of a failed assumption each walk some part of the implication graph, and each needs to know whether an atom has already been met on the walk.
The buffer keeps a flag for every atom of the context, together with a list of the atoms flagged, so clearing the buffer costs only as much as the walk.

```rust
# use kestrel_sat::resolution_buffer::ResolutionBuffer;
let mut buffer = ResolutionBuffer::default();
assert!(buffer.grow_to(8).is_ok());

assert!(buffer.mark(3));
assert!(!buffer.mark(3));
assert!(buffer.is_marked(3));

buffer.clear();
assert!(!buffer.is_marked(3));
```
*/

use crate::structures::atom::Atom;

/// The resolution buffer struct.
#[derive(Default)]
pub struct ResolutionBuffer {
    /// Whether each atom is marked.
    marks: Vec<bool>,

    /// The atoms marked since the buffer was last cleared, in order of marking.
    marked: Vec<Atom>,
}

impl ResolutionBuffer {
    /// Grows the buffer to hold a mark for each of `atom_count` atoms.
    pub fn grow_to(&mut self, atom_count: usize) -> Result<(), std::collections::TryReserveError> {
        if self.marks.len() < atom_count {
            let additional = atom_count - self.marks.len();
            self.marks.try_reserve(additional)?;
            self.marked.try_reserve(additional)?;
            self.marks.resize(atom_count, false);
        }
        Ok(())
    }

    /// Marks `atom`, returning true if the atom was not already marked.
    pub fn mark(&mut self, atom: Atom) -> bool {
        let mark = &mut self.marks[atom as usize];
        match *mark {
            true => false,
            false => {
                *mark = true;
                self.marked.push(atom);
                true
            }
        }
    }

    /// Whether `atom` is marked.
    pub fn is_marked(&self, atom: Atom) -> bool {
        self.marks[atom as usize]
    }

    /// The atoms marked since the buffer was last cleared, in order of marking.
    pub fn marked(&self) -> &[Atom] {
        &self.marked
    }

    /// Clears every mark.
    pub fn clear(&mut self) {
        for atom in self.marked.drain(..) {
            self.marks[atom as usize] = false;
        }
    }
}
