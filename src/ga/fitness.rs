//! Fitness evaluation: total cyclic travel cost of an order.

use crate::error::{TspError, TspResult};
use crate::problem::CostModel;

/// Checks that `order` is a permutation of `0..n`.
pub fn check_permutation(order: &[usize], n: usize) -> TspResult<()> {
    if order.len() != n {
        return Err(TspError::invalid_permutation(format!(
            "expected {n} locations, got {}",
            order.len()
        )));
    }
    let mut seen = vec![false; n];
    for (pos, &loc) in order.iter().enumerate() {
        if loc >= n {
            return Err(TspError::invalid_permutation(format!(
                "location {loc} at position {pos} is out of range for {n} locations"
            )));
        }
        if seen[loc] {
            return Err(TspError::invalid_permutation(format!(
                "location {loc} appears more than once (again at position {pos})"
            )));
        }
        seen[loc] = true;
    }
    Ok(())
}

/// Total cost of visiting `order` and returning to its first location.
///
/// Fails with [`TspError::OutOfRange`] if any index is outside the cost model.
pub fn cyclic_cost(costs: &CostModel, order: &[usize]) -> TspResult<f64> {
    let n = order.len();
    (0..n).try_fold(0.0, |acc, i| {
        Ok(acc + costs.cost(order[i], order[(i + 1) % n])?)
    })
}

/// [`cyclic_cost`] for an order already checked with [`check_permutation`].
pub(crate) fn permutation_cost(costs: &CostModel, order: &[usize]) -> f64 {
    let n = order.len();
    (0..n)
        .map(|i| costs.edge(order[i], order[(i + 1) % n]))
        .sum()
}
