//! Engine configuration.
//!
//! [`EngineConfig`] holds every parameter that controls the evolutionary loop.
//! It is fixed when the engine is constructed.

use super::crossover::Crossover;
use super::selection::Selection;
use crate::error::{TspError, TspResult};

/// Configuration for the evolution engine.
///
/// # Defaults
///
/// ```
/// use tsp_genetic::ga::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.population_size, 200);
/// assert_eq!(config.generations, 1000);
/// assert!((config.mutation_rate - 0.05).abs() < 1e-12);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use tsp_genetic::ga::{EngineConfig, Selection};
///
/// let config = EngineConfig::default()
///     .with_population_size(50)
///     .with_generations(50)
///     .with_mutation_rate(0.1)
///     .with_selection(Selection::Tournament(3))
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Number of tours in the initial population.
    ///
    /// Each generation breeds `population_size / 2` children, so every
    /// population after the initial one holds half this many tours (rounded
    /// down). Must be at least 2.
    pub population_size: usize,

    /// Number of generations to evolve. `0` reports the best initial tour.
    pub generations: usize,

    /// Probability of mutating each child (0.0–1.0).
    pub mutation_rate: f64,

    /// Parent selection strategy.
    pub selection: Selection,

    /// Recombination operator.
    pub crossover: Crossover,

    /// Evaluate children on the rayon pool (needs the `parallel` feature;
    /// ignored otherwise). Results do not depend on this flag.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            population_size: 200,
            generations: 1000,
            mutation_rate: 0.05,
            selection: Selection::default(),
            crossover: Crossover::default(),
            parallel: false,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Sets the initial population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Sets the crossover operator.
    pub fn with_crossover(mut self, crossover: Crossover) -> Self {
        self.crossover = crossover;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of children bred per generation.
    pub fn offspring_count(&self) -> usize {
        self.population_size / 2
    }

    /// Validates the configuration.
    ///
    /// Returns [`TspError::Config`] describing the first invalid parameter.
    pub fn validate(&self) -> TspResult<()> {
        if self.population_size < 2 {
            return Err(TspError::config("population_size must be at least 2"));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(TspError::config("mutation_rate must be within [0, 1]"));
        }
        if self.selection == Selection::Tournament(0) {
            return Err(TspError::config("tournament size must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.population_size, 200);
        assert_eq!(config.generations, 1000);
        assert!((config.mutation_rate - 0.05).abs() < 1e-12);
        assert_eq!(config.selection, Selection::InverseCost);
        assert_eq!(config.crossover, Crossover::SinglePoint);
        assert!(!config.parallel);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default()
            .with_population_size(50)
            .with_generations(10)
            .with_mutation_rate(0.1)
            .with_selection(Selection::CostProportional)
            .with_crossover(Crossover::Order)
            .with_parallel(true)
            .with_seed(7);

        assert_eq!(config.population_size, 50);
        assert_eq!(config.generations, 10);
        assert!((config.mutation_rate - 0.1).abs() < 1e-12);
        assert_eq!(config.selection, Selection::CostProportional);
        assert_eq!(config.crossover, Crossover::Order);
        assert!(config.parallel);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_validate_ok() {
        assert!(EngineConfig::default().validate().is_ok());
        assert!(EngineConfig::default().with_generations(0).validate().is_ok());
    }

    #[test]
    fn test_validate_population_too_small() {
        let config = EngineConfig::default().with_population_size(1);
        assert!(matches!(config.validate(), Err(TspError::Config { .. })));
    }

    #[test]
    fn test_validate_mutation_rate_set_directly() {
        let config = EngineConfig {
            mutation_rate: 1.5,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_tournament() {
        let config = EngineConfig::default().with_selection(Selection::Tournament(0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_clamp_mutation_rate() {
        assert_eq!(EngineConfig::default().with_mutation_rate(2.0).mutation_rate, 1.0);
        assert_eq!(EngineConfig::default().with_mutation_rate(-1.0).mutation_rate, 0.0);
    }

    #[test]
    fn test_offspring_count_rounds_down() {
        assert_eq!(EngineConfig::default().offspring_count(), 100);
        assert_eq!(
            EngineConfig::default().with_population_size(7).offspring_count(),
            3
        );
        assert_eq!(
            EngineConfig::default().with_population_size(2).offspring_count(),
            1
        );
    }
}
