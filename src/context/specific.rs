use crate::{config::Config, generic::random::MinimalPCG32};

use super::GenericContext;

/// A context which uses [MinimalPCG32] as a source of randomness.
pub type Context = GenericContext<MinimalPCG32>;

impl Default for Context {
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}
