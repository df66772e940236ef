//! Crossover operator choice for the engine.

use super::operators::{order_crossover, single_point_crossover};
use super::tour::Tour;
use crate::error::{TspError, TspResult};
use crate::problem::CostModel;
use rand::Rng;

/// Recombination operator used to breed one child from two parents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Crossover {
    /// [`Tour::crossover`]: prefix of the first parent up to a random cut,
    /// remainder in the second parent's order.
    #[default]
    SinglePoint,

    /// Davis order crossover (OX): a random segment of the first parent,
    /// remainder in the second parent's order starting after the segment.
    Order,
}

impl Crossover {
    /// Breeds one child from `first` and `second`.
    ///
    /// Fails with [`TspError::InvalidPermutation`] if either parent does not
    /// visit exactly `costs.size()` locations.
    pub fn apply<R: Rng + ?Sized>(
        &self,
        first: &Tour,
        second: &Tour,
        costs: &CostModel,
        rng: &mut R,
    ) -> TspResult<Tour> {
        let n = costs.size();
        if let Some(parent) = [first, second].into_iter().find(|t| t.len() != n) {
            return Err(TspError::invalid_permutation(format!(
                "parent visits {} locations, cost model has {n}",
                parent.len()
            )));
        }
        Tour::new(self.offspring_order(first.order(), second.order(), rng), costs)
    }

    /// Child visiting order, without evaluating its cost.
    pub fn offspring_order<R: Rng + ?Sized>(
        &self,
        first: &[usize],
        second: &[usize],
        rng: &mut R,
    ) -> Vec<usize> {
        match self {
            Crossover::SinglePoint => {
                let cut = rng.random_range(0..first.len());
                single_point_crossover(first, second, cut)
            }
            Crossover::Order => order_crossover(first, second, rng),
        }
    }
}
