//! Genetic search over tours.
//!
//! The engine evolves a population of [`Tour`]s for a fixed number of
//! generations. Each generation it reports the cheapest tour, picks parents
//! with a [`Selection`] strategy, recombines them with a [`Crossover`]
//! operator, occasionally applies swap mutation, and replaces the population.
//!
//! # Key Types
//!
//! - [`Tour`]: a permutation of locations with its cached cyclic cost
//! - [`Population`]: one generation of tours
//! - [`EngineConfig`]: population size, mutation rate, generations, operators
//! - [`EvolutionEngine`]: runs the loop (`Initializing → Evolving → Terminated`)
//! - [`EvolutionResult`]: final best tour, best tour seen, cost history
//! - [`EvolutionObserver`]: per-generation progress hook
//!
//! # Submodules
//!
//! - [`fitness`]: cyclic cost and permutation checks
//! - [`operators`]: permutation crossover and mutation primitives
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Larrañaga et al. (1999), "Genetic Algorithms for the Travelling Salesman
//!   Problem: A Review of Representations and Operators"

mod config;
mod crossover;
pub mod fitness;
mod observer;
pub mod operators;
mod population;
mod runner;
mod selection;
mod tour;

pub use config::EngineConfig;
pub use crossover::Crossover;
pub use observer::EvolutionObserver;
pub use population::Population;
pub use runner::{EngineState, EvolutionEngine, EvolutionResult};
pub use selection::Selection;
pub use tour::Tour;
