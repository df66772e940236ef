//! Progress reporting hooks.

use super::runner::EvolutionResult;

/// Receives progress from the engine.
///
/// Both hooks default to no-ops; `()` is the silent observer.
pub trait EvolutionObserver {
    /// Called once per generation, before breeding, with the generation index
    /// (starting at 0) and the cheapest cost in the current population.
    fn on_generation(&self, _generation: usize, _best_cost: f64) {}

    /// Called once when the engine terminates.
    fn on_termination(&self, _result: &EvolutionResult) {}
}

impl EvolutionObserver for () {}

impl<T: EvolutionObserver + ?Sized> EvolutionObserver for &T {
    fn on_generation(&self, generation: usize, best_cost: f64) {
        (**self).on_generation(generation, best_cost);
    }

    fn on_termination(&self, result: &EvolutionResult) {
        (**self).on_termination(result);
    }
}
