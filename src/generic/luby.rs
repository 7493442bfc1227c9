/*!
An iterator to generate the luby sequence.

See <https://oeis.org/A182105> for details on the luby sequence.

The *n*th element of the sequence is found by splitting the sequence into runs, where each run is a doubling sequence 1, 2, 4, … whose final element is the lowest set bit of the run count.
So, the iterator tracks the count of runs and the last element yielded.
*/

/// Representation used for numbers in a luby sequence.
pub type LubyRepresentation = u32;

/// Foundation of the iterator.
pub struct Luby {
    /// The count of runs started.
    run: LubyRepresentation,

    /// The element most recently yielded.
    current: LubyRepresentation,
}

// The default iterator is on the first element of the sequence.
impl Default for Luby {
    fn default() -> Self {
        let mut luby = Luby::fresh();
        luby.next();
        luby
    }
}

impl Iterator for Luby {
    type Item = LubyRepresentation;

    fn next(&mut self) -> Option<Self::Item> {
        if self.run & self.run.wrapping_neg() == self.current {
            self.run = self.run.checked_add(1)?;
            self.current = 1;
        } else {
            self.current = self.current.checked_add(self.current)?;
        }

        Some(self.current)
    }
}

impl Luby {
    /// An iterator whose first call to [next](Iterator::next) yields the first element of the sequence.
    fn fresh() -> Self {
        Luby { run: 0, current: 0 }
    }

    /// The element most recently yielded.
    pub fn current(&self) -> LubyRepresentation {
        self.current
    }
}
