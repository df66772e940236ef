//! Genetic-algorithm solver for the Traveling Salesman Problem.
//!
//! Given an N×N travel-cost matrix, the solver evolves a population of
//! candidate tours (permutations of the locations, closed into a cycle) over a
//! fixed number of generations and reports the cheapest tour found. The
//! search is heuristic: it does not guarantee optimality.
//!
//! - [`problem`]: the immutable [`CostModel`](problem::CostModel) and the text
//!   loader for instances
//! - [`ga`]: tours, operators, selection and the [`EvolutionEngine`](ga::EvolutionEngine)
//! - [`telemetry`]: line-based progress reporting
//! - [`error`]: the [`TspError`](error::TspError) taxonomy
//! - [`random`]: seeded generator helpers
//!
//! # Example
//!
//! ```
//! use tsp_genetic::ga::{EngineConfig, EvolutionEngine};
//! use tsp_genetic::problem::loader::parse_instance;
//!
//! let instance = parse_instance(
//!     "4\nA\nB\nC\nD\n0 10 15 20\n10 0 35 25\n15 35 0 30\n20 25 30 0\n",
//! )
//! .unwrap();
//! let config = EngineConfig::default()
//!     .with_population_size(50)
//!     .with_generations(50)
//!     .with_seed(7);
//!
//! let result = EvolutionEngine::new(&instance.costs, config)
//!     .unwrap()
//!     .run(&())
//!     .unwrap();
//! let names = instance.resolve(result.best.order()).unwrap();
//! assert_eq!(names.len(), 4);
//! ```

pub mod error;
pub mod ga;
pub mod problem;
pub mod random;
pub mod telemetry;
