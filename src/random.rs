use std::sync::Arc;

use rand::Rng;

#[cfg(test)]
use mockall::automock;

/// Source of the per-request random value.
#[cfg_attr(test, automock)]
pub trait RandomSource: Send + Sync {
    /// Uniform value in `[0, 1)`.
    fn next_f64(&self) -> f64;
}

pub type SharedRandom = Arc<dyn RandomSource>;

/// Draws from the thread-local generator on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_f64(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}
