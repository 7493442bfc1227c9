/*!
Configuration of a context.

All configuration of a context is contained within a [Config], given when the context is built.
Databases copy the parts of the configuration relevant to them, and heuristic adjustments made through a context (e.g. [set_global_default_phase](crate::context::GenericContext::set_global_default_phase)) revise those copies.

# Example

```rust
# use kestrel_sat::config::{Config, PhaseDefault};
# use kestrel_sat::context::Context;
let mut config = Config::default();
config.atom_db.default_phase.set(PhaseDefault::Positive);
config.restart.value = false;

let the_context = Context::from_config(config);
```
*/

mod activity;
pub use activity::Activity;

mod config_option;
pub use config_option::ConfigOption;

pub mod dbs;
use dbs::{AtomDBConfig, ClauseDBConfig};

mod lbd;
pub use lbd::LBD;

mod phase;
pub use phase::PhaseDefault;

mod scheduler;
pub use scheduler::Scheduler;

pub mod vsids;
use vsids::VSIDS;

use crate::generic::luby::LubyRepresentation;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Configuration of the atom database.
    pub atom_db: AtomDBConfig,

    /// Configuration of the clause database.
    pub clause_db: ClauseDBConfig,

    /// The `u` value to multiply the luby sequence by when determining whether to perform a restart.
    pub luby_u: ConfigOption<LubyRepresentation>,

    /// Remove literals from a learnt clause when implied by other literals of the clause.
    pub minimization: ConfigOption<bool>,

    /// Default to the last set value of an atom when choosing a value for the atom.
    pub phase_saving: ConfigOption<bool>,

    /// Permit (scheduled) restarts.
    pub restart: ConfigOption<bool>,

    /// A scheduler for things such as reductions.
    pub scheduler: Scheduler,

    /// The seed of the source of rng of a context.
    pub seed: ConfigOption<u64>,

    /// Which VSIDS variant to use during resolution based analysis.
    pub vsids_variant: ConfigOption<VSIDS>,
}

impl Default for Config {
    /// The default context is (roughly) configured to provide quick, deterministic, results.
    fn default() -> Self {
        Config {
            atom_db: AtomDBConfig::default(),
            clause_db: ClauseDBConfig::default(),

            luby_u: ConfigOption {
                name: "luby",
                min: 1,
                max: LubyRepresentation::MAX,
                value: 128,
            },

            minimization: ConfigOption {
                name: "minimization",
                min: false,
                max: true,
                value: true,
            },

            phase_saving: ConfigOption {
                name: "phase_saving",
                min: false,
                max: true,
                value: true,
            },

            restart: ConfigOption {
                name: "restart",
                min: false,
                max: true,
                value: true,
            },

            scheduler: Scheduler {
                luby: Some(2),
                conflict: Some(50_000),
            },

            seed: ConfigOption {
                name: "seed",
                min: u64::MIN,
                max: u64::MAX,
                value: 0,
            },

            vsids_variant: ConfigOption {
                name: "vsids",
                min: VSIDS::MIN,
                max: VSIDS::MAX,
                value: VSIDS::MiniSAT,
            },
        }
    }
}
