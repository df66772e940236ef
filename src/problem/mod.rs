//! Problem definition: the travel-cost matrix and the text loader that builds it.
//!
//! - [`CostModel`]: immutable N×N cost lookup shared by every tour
//! - [`loader`]: parses the `N / names / matrix` text format into a [`TspInstance`]

mod cost;
pub mod loader;

pub use cost::CostModel;
pub use loader::TspInstance;
