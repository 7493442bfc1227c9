/*!
The context --- to which formulas are added and within which solves take place, etc.

Strictly, a [GenericContext] and a [Context].

The generic context is designed to be generic over various parameters.
Though, for the moment this is limited to the source of randomness.

# States

A context moves through states as it is used:

```none
                  add / assume / increase_max_var
Configuration -----------------------------------> Input
                                                     |
                                                     | solve
                                                     ⌄
                              Satisfiable / Unsatisfiable / Unknown
```

- Trace generation may be enabled only before any literal is added.
- From any result state, adding a literal, an assumption, or an atom returns the context to [Input](ContextState::Input), and queries about the previous result are no longer available.
- If the context hits an error it cannot recover from, the context is [Unusable](ContextState::Unusable) until [reset](GenericContext::reset).

# Example
```rust
# use kestrel_sat::context::Context;
# use kestrel_sat::config::Config;
# use kestrel_sat::reports::Report;
let mut the_context = Context::from_config(Config::default());

let p = the_context.increase_max_var().expect("a fresh atom") as i32;
let q = the_context.increase_max_var().expect("a fresh atom") as i32;

for literal in [p, q, 0, -p, 0] {
    assert!(the_context.add(literal).is_ok());
}

assert_eq!(the_context.solve(0), Ok(Report::Satisfiable));
assert_eq!(the_context.deref(p), Ok(Some(false)));
assert_eq!(the_context.deref(q), Ok(Some(true)));
```
*/

mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericContext;
mod heuristics;
mod queries;
mod specific;
pub use specific::Context;

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows for configuration, e.g. enabling trace generation.
    Configuration,

    /// The context allows input.
    Input,

    /// A solve is underway.
    Solving,

    /// The formula is satisfiable under the assumptions of the most recent solve, with a complete valuation.
    Satisfiable,

    /// The formula is unsatisfiable under the assumptions of the most recent solve.
    Unsatisfiable,

    /// The most recent solve ended before satisfiability was determined.
    Unknown,

    /// The context hit an error it could not recover from, and must be reset.
    Unusable,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Unknown => write!(f, "Unknown"),
            Self::Unusable => write!(f, "Unusable"),
        }
    }
}
