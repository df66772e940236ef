//! Evolutionary loop execution.
//!
//! [`EvolutionEngine`] drives the whole search:
//! initialization → (report best → select → crossover → mutate → replace)
//! × generations → termination.

use super::config::EngineConfig;
use super::observer::EvolutionObserver;
use super::operators::swap_mutation;
use super::population::Population;
use super::tour::Tour;
use crate::error::{TspError, TspResult};
use crate::problem::CostModel;
use crate::random::{rng_from_seed, TspRng};
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Lifecycle of an [`EvolutionEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineState {
    /// Constructed; no population yet.
    Initializing,
    /// Population exists; generations are being bred.
    Evolving,
    /// Result extracted; no further steps are possible.
    Terminated,
}

/// Result of an evolution run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EvolutionResult {
    /// Cheapest tour of the final population.
    pub best: Tour,

    /// Cost of `best` (same as `best.cost()`).
    pub best_cost: f64,

    /// Cheapest tour seen in any population during the run.
    ///
    /// Never worse than `best`; differs from it when a good tour was bred
    /// and then lost.
    pub best_seen: Tour,

    /// Number of generations executed.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best cost reported at each executed generation.
    pub cost_history: Vec<f64>,
}

/// Genetic search over tours of a fixed cost model.
///
/// The engine owns the current population and a single random generator,
/// so two engines built with the same seed produce identical runs.
///
/// # Usage
///
/// ```
/// use tsp_genetic::ga::{EngineConfig, EvolutionEngine};
/// use tsp_genetic::problem::CostModel;
///
/// let costs = CostModel::new(vec![
///     vec![0.0, 10.0, 15.0, 20.0],
///     vec![10.0, 0.0, 35.0, 25.0],
///     vec![15.0, 35.0, 0.0, 30.0],
///     vec![20.0, 25.0, 30.0, 0.0],
/// ])
/// .unwrap();
/// let config = EngineConfig::default()
///     .with_population_size(50)
///     .with_generations(50)
///     .with_mutation_rate(0.1)
///     .with_seed(42);
///
/// let mut engine = EvolutionEngine::new(&costs, config).unwrap();
/// let result = engine.run(&()).unwrap();
/// assert_eq!(result.generations, 50);
/// assert!(result.best_cost >= 80.0);
/// ```
pub struct EvolutionEngine<'a, R: Rng = TspRng> {
    costs: &'a CostModel,
    config: EngineConfig,
    rng: R,
    state: EngineState,
    population: Option<Population>,
    generation: usize,
    best_seen: Option<Tour>,
    cost_history: Vec<f64>,
}

impl<'a> EvolutionEngine<'a, TspRng> {
    /// Creates an engine seeded from `config.seed` (random when `None`).
    ///
    /// Fails with [`TspError::Config`] if the configuration is invalid.
    pub fn new(costs: &'a CostModel, config: EngineConfig) -> TspResult<Self> {
        let rng = rng_from_seed(config.seed);
        Self::with_rng(costs, config, rng)
    }
}

impl<'a, R: Rng> EvolutionEngine<'a, R> {
    /// Creates an engine drawing every random decision from `rng`.
    ///
    /// `config.seed` is ignored.
    pub fn with_rng(costs: &'a CostModel, config: EngineConfig, rng: R) -> TspResult<Self> {
        config.validate()?;
        Ok(Self {
            costs,
            cost_history: Vec::new(),
            config,
            rng,
            state: EngineState::Initializing,
            population: None,
            generation: 0,
            best_seen: None,
        })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Number of generations bred so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current population, once initialized.
    pub fn population(&self) -> Option<&Population> {
        self.population.as_ref()
    }

    /// Builds the initial population of `population_size` random tours.
    pub fn initialize(&mut self) -> TspResult<()> {
        if self.state != EngineState::Initializing {
            return Err(TspError::InvalidState {
                message: format!("cannot initialize an engine that is {:?}", self.state),
            });
        }

        let tours = (0..self.config.population_size)
            .map(|_| Tour::random(self.costs, &mut self.rng))
            .collect::<TspResult<Vec<_>>>()?;
        let population = Population::new(tours)?;
        self.best_seen = Some(population.best().clone());
        self.population = Some(population);
        self.state = EngineState::Evolving;
        Ok(())
    }

    /// Runs one generation: reports the current best, breeds
    /// `population_size / 2` children and replaces the population.
    ///
    /// Initializes first if needed. Returns `Ok(false)` without doing
    /// anything once all configured generations have run.
    pub fn step<O: EvolutionObserver + ?Sized>(&mut self, observer: &O) -> TspResult<bool> {
        match self.state {
            EngineState::Initializing => self.initialize()?,
            EngineState::Evolving => {}
            EngineState::Terminated => return Err(terminated()),
        }
        if self.generation >= self.config.generations {
            return Ok(false);
        }
        let Some(population) = self.population.as_ref() else {
            return Err(no_population());
        };

        let best_cost = population.best().cost();
        observer.on_generation(self.generation, best_cost);

        let next = breed(self.costs, &self.config, population, &mut self.rng)?;
        self.cost_history.push(best_cost);
        self.record_best(next.best().clone());
        self.population = Some(next);
        self.generation += 1;
        Ok(true)
    }

    /// Terminates the run and returns the best tour of the final population.
    ///
    /// Initializes first if needed, so with `generations == 0` (or before any
    /// [`step`](Self::step)) the result is the best initial tour.
    pub fn finish<O: EvolutionObserver + ?Sized>(
        &mut self,
        observer: &O,
    ) -> TspResult<EvolutionResult> {
        self.terminate(observer, false)
    }

    /// Runs all configured generations and terminates.
    pub fn run<O: EvolutionObserver + ?Sized>(
        &mut self,
        observer: &O,
    ) -> TspResult<EvolutionResult> {
        self.run_with_cancel(observer, None)
    }

    /// Runs with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the engine stops
    /// before the next generation and returns the best of the current
    /// population.
    pub fn run_with_cancel<O: EvolutionObserver + ?Sized>(
        &mut self,
        observer: &O,
        cancel: Option<Arc<AtomicBool>>,
    ) -> TspResult<EvolutionResult> {
        let mut cancelled = false;
        loop {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            if !self.step(observer)? {
                break;
            }
        }
        self.terminate(observer, cancelled)
    }

    fn terminate<O: EvolutionObserver + ?Sized>(
        &mut self,
        observer: &O,
        cancelled: bool,
    ) -> TspResult<EvolutionResult> {
        match self.state {
            EngineState::Initializing => self.initialize()?,
            EngineState::Evolving => {}
            EngineState::Terminated => return Err(terminated()),
        }
        let Some(population) = self.population.as_ref() else {
            return Err(no_population());
        };
        let best = population.best().clone();
        self.record_best(best.clone());
        self.state = EngineState::Terminated;

        let result = EvolutionResult {
            best_cost: best.cost(),
            best_seen: self.best_seen.clone().unwrap_or_else(|| best.clone()),
            best,
            generations: self.generation,
            cancelled,
            cost_history: self.cost_history.clone(),
        };
        observer.on_termination(&result);
        Ok(result)
    }

    fn record_best(&mut self, candidate: Tour) {
        let improved = self
            .best_seen
            .as_ref()
            .map_or(true, |seen| candidate.cost() < seen.cost());
        if improved {
            self.best_seen = Some(candidate);
        }
    }
}

fn terminated() -> TspError {
    TspError::InvalidState {
        message: "engine already terminated".into(),
    }
}

fn no_population() -> TspError {
    TspError::InvalidState {
        message: "engine has no population".into(),
    }
}

/// Breeds the next generation from `population`.
///
/// Children are drawn sequentially from `rng` and evaluated afterwards, so
/// the result does not depend on `config.parallel`.
fn breed<R: Rng + ?Sized>(
    costs: &CostModel,
    config: &EngineConfig,
    population: &Population,
    rng: &mut R,
) -> TspResult<Population> {
    let tours = population.tours();
    let offspring = config.offspring_count();

    let mut orders = Vec::with_capacity(offspring);
    for _ in 0..offspring {
        let p1 = config.selection.select(tours, rng);
        let p2 = config.selection.select(tours, rng);

        let mut order = config
            .crossover
            .offspring_order(tours[p1].order(), tours[p2].order(), rng);

        if rng.random_range(0.0..1.0) < config.mutation_rate {
            swap_mutation(&mut order, rng);
        }

        orders.push(order);
    }

    Population::new(evaluate(costs, orders, config.parallel)?)
}

#[cfg(feature = "parallel")]
fn evaluate(costs: &CostModel, orders: Vec<Vec<usize>>, parallel: bool) -> TspResult<Vec<Tour>> {
    use rayon::prelude::*;

    if parallel {
        orders
            .into_par_iter()
            .map(|order| Tour::new(order, costs))
            .collect()
    } else {
        orders.into_iter().map(|order| Tour::new(order, costs)).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn evaluate(costs: &CostModel, orders: Vec<Vec<usize>>, _parallel: bool) -> TspResult<Vec<Tour>> {
    orders.into_iter().map(|order| Tour::new(order, costs)).collect()
}

// ============================================================================
// Tests
// ============================================================================
