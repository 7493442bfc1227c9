/*!
The value given to an atom when freely deciding on the atom, absent a saved phase or a phase set for the atom.

Codes follow the order of the variants, and so a phase may be given as an integer:

```rust
# use kestrel_sat::config::PhaseDefault;
assert_eq!(PhaseDefault::try_from(2), Ok(PhaseDefault::JeroslowWang));
assert!(PhaseDefault::try_from(4).is_err());
```
*/

use crate::types::err::BoundsError;

/// Supported default phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PhaseDefault {
    /// Decide the atom is false.
    Negative = 0,

    /// Decide the atom is true.
    Positive = 1,

    /// Decide on the polarity with the greater [Jeroslow-Wang](https://doi.org/10.1007/BF01531077) weight.
    /// The weight of a literal is the sum of 2<sup>-|C|</sup> for each original clause C containing the literal.
    JeroslowWang = 2,

    /// Decide on a polarity at random, with the source of randomness of the context.
    Random = 3,
}

impl PhaseDefault {
    pub const MIN: PhaseDefault = PhaseDefault::Negative;
    pub const MAX: PhaseDefault = PhaseDefault::Random;
}

impl TryFrom<i32> for PhaseDefault {
    type Error = BoundsError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Negative),
            1 => Ok(Self::Positive),
            2 => Ok(Self::JeroslowWang),
            3 => Ok(Self::Random),
            _ => Err(BoundsError::PhaseCode),
        }
    }
}

impl std::fmt::Display for PhaseDefault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negative => write!(f, "Negative"),
            Self::Positive => write!(f, "Positive"),
            Self::JeroslowWang => write!(f, "Jeroslow-Wang"),
            Self::Random => write!(f, "Random"),
        }
    }
}
