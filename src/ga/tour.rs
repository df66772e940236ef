//! Candidate solution: a cyclic visiting order with its cached cost.

use super::crossover::Crossover;
use super::fitness::{check_permutation, permutation_cost};
use super::operators::swap_mutation;
use crate::error::{TspError, TspResult};
use crate::problem::CostModel;
use crate::random::random_permutation;
use rand::Rng;
use std::fmt;

/// A permutation of all locations plus its total cyclic cost.
///
/// The order is validated on construction and never changes afterwards, so
/// the cached cost always matches it. Operators return new tours.
///
/// # Examples
///
/// ```
/// use tsp_genetic::ga::Tour;
/// use tsp_genetic::problem::CostModel;
///
/// let costs = CostModel::new(vec![
///     vec![0.0, 10.0, 15.0, 20.0],
///     vec![10.0, 0.0, 35.0, 25.0],
///     vec![15.0, 35.0, 0.0, 30.0],
///     vec![20.0, 25.0, 30.0, 0.0],
/// ])
/// .unwrap();
///
/// let tour = Tour::new(vec![0, 1, 3, 2], &costs).unwrap();
/// assert_eq!(tour.cost(), 80.0);
/// assert!(Tour::new(vec![0, 1, 1, 2], &costs).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Tour {
    order: Vec<usize>,
    cost: f64,
}

impl Tour {
    /// Builds a tour, computing its cyclic cost.
    ///
    /// Fails with [`TspError::InvalidPermutation`] if `order` is not a
    /// permutation of `[0, costs.size())`, and with
    /// [`TspError::MalformedInput`] if the total cost overflows to infinity.
    pub fn new(order: Vec<usize>, costs: &CostModel) -> TspResult<Self> {
        check_permutation(&order, costs.size())?;
        let cost = permutation_cost(costs, &order);
        if !cost.is_finite() {
            return Err(TspError::malformed(format!(
                "tour cost overflows: {cost} for order of {} locations",
                order.len()
            )));
        }
        Ok(Self { order, cost })
    }

    /// Builds a tour from a uniformly random permutation.
    pub fn random<R: Rng + ?Sized>(costs: &CostModel, rng: &mut R) -> TspResult<Self> {
        Tour::new(random_permutation(costs.size(), rng), costs)
    }

    /// Single-point crossover with `other`.
    ///
    /// A cut `k` is drawn uniformly in `[0, n)`. The child keeps `self`'s
    /// first `k` locations and visits the rest in the order they appear in
    /// `other`, so the child is always a valid permutation.
    pub fn crossover<R: Rng + ?Sized>(
        &self,
        other: &Tour,
        costs: &CostModel,
        rng: &mut R,
    ) -> TspResult<Tour> {
        Crossover::SinglePoint.apply(self, other, costs, rng)
    }

    /// Returns a copy with two distinct positions swapped.
    ///
    /// Fails with [`TspError::InvalidPermutation`] if `costs` has a different
    /// number of locations than this tour.
    pub fn mutate<R: Rng + ?Sized>(&self, costs: &CostModel, rng: &mut R) -> TspResult<Tour> {
        let mut order = self.order.clone();
        swap_mutation(&mut order, rng);
        Tour::new(order, costs)
    }

    /// Visiting order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Total cyclic cost.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of locations visited.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the tour visits no locations.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Consumes the tour, returning its order.
    pub fn into_order(self) -> Vec<usize> {
        self.order
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, loc) in self.order.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{loc}")?;
        }
        write!(f, "]")
    }
}
