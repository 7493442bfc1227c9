//! Configuration of databases, typically derived from the configuration of a context.
//!
//! A database holds a copy of its configuration, and some methods of a context revise the copy.
//! For example, [adjust](crate::context::GenericContext::adjust) revises the maximum activity of an atom.
//! As the configuration of the context is untouched, a [reset](crate::context::GenericContext::reset) restores the original configuration.

use super::{Activity, ConfigOption, PhaseDefault, LBD};

/// Configuration for the atom database.
#[derive(Clone, Debug)]
pub struct AtomDBConfig {
    /// The activity with which the next atom bumped will be bumped by, dynamically adjusted.
    ///
    /// The maximum of the option is the activity above which the activity of every atom is rescaled.
    pub bump: ConfigOption<Activity>,

    /// The decay to the activity of an atom each conflict.
    pub decay: ConfigOption<Activity>,

    /// The value to decide on for an atom, absent a saved phase or a phase set for the atom.
    pub default_phase: ConfigOption<PhaseDefault>,
}

impl Default for AtomDBConfig {
    fn default() -> Self {
        AtomDBConfig {
            bump: ConfigOption {
                name: "atom_bump",
                min: Activity::MIN,
                max: (2.0 as Activity).powi(512),
                value: 1.0,
            },

            decay: ConfigOption {
                name: "atom_decay",
                min: 0.0,
                max: 0.5,
                value: 50.0 * 1e-3,
            },

            default_phase: ConfigOption {
                name: "default_phase",
                min: PhaseDefault::MIN,
                max: PhaseDefault::MAX,
                value: PhaseDefault::JeroslowWang,
            },
        }
    }
}

/// Configuration for the clause database.
#[derive(Clone, Debug)]
pub struct ClauseDBConfig {
    /// The activity with which the next clause bumped will be bumped by, dynamically adjusted.
    ///
    /// The maximum of the option is the activity above which the activity of every clause is rescaled.
    pub bump: ConfigOption<Activity>,

    /// The decay to the activity of a clause each conflict.
    pub decay: ConfigOption<Activity>,

    /// Any clauses with lbd within the lbd bound (lbd ≤ bound) will not be removed from the clause database by a scheduled reduction.
    pub lbd_bound: ConfigOption<LBD>,
}

impl Default for ClauseDBConfig {
    fn default() -> Self {
        ClauseDBConfig {
            bump: ConfigOption {
                name: "clause_bump",
                min: Activity::MIN,
                max: (2.0 as Activity).powi(512),
                value: 1.0,
            },

            decay: ConfigOption {
                name: "clause_decay",
                min: 0.0,
                max: 0.5,
                value: 1e-3,
            },

            lbd_bound: ConfigOption {
                name: "lbd_bound",
                min: LBD::MIN,
                max: LBD::MAX,
                value: 2,
            },
        }
    }
}
