//! Parent selection strategies.
//!
//! Selection determines which tours are chosen as parents for crossover.
//! Every strategy returns an index into the population slice.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 3 (roulette wheel)
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::tour::Tour;
use rand::Rng;

/// Selection strategy for choosing parents.
///
/// # Examples
///
/// ```
/// use tsp_genetic::ga::Selection;
///
/// // Roulette wheel favouring cheaper tours (the default)
/// let sel = Selection::default();
/// assert_eq!(sel, Selection::InverseCost);
///
/// // Tournament with size 3
/// let sel = Selection::Tournament(3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Roulette wheel weighted by raw tour cost.
    ///
    /// The wheel is the running sum of costs, so a tour's share of the wheel
    /// grows with its cost: **more expensive tours are picked more often**.
    /// This works against minimization and is kept for reproducing the
    /// classic cost-weighted wheel.
    ///
    /// One deviation from the classic wheel: when every cost is zero the
    /// wheel is empty and the pick is uniform instead of always the last tour.
    ///
    /// # Complexity
    /// O(n) per selection
    CostProportional,

    /// Roulette wheel with inverted weights.
    ///
    /// `weight_i = max_cost - cost_i + ε`, so the cheapest tour gets the
    /// largest share and the most expensive one gets almost none.
    ///
    /// # Complexity
    /// O(n) per selection
    #[default]
    InverseCost,

    /// Tournament selection: pick `k` tours at random, keep the cheapest.
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),
}

impl Selection {
    /// Select a parent index from the population.
    ///
    /// The returned index is always `< population.len()`.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select<R: Rng + ?Sized>(&self, population: &[Tour], rng: &mut R) -> usize {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        match self {
            Selection::CostProportional => {
                let weights: Vec<f64> = population.iter().map(Tour::cost).collect();
                spin_wheel(&weights, rng)
            }
            Selection::InverseCost => inverse_cost(population, rng),
            Selection::Tournament(k) => tournament(population, *k, rng),
        }
    }
}

/// Roulette wheel over inverted costs.
fn inverse_cost<R: Rng + ?Sized>(population: &[Tour], rng: &mut R) -> usize {
    if population.len() == 1 {
        return 0;
    }

    let max_cost = population
        .iter()
        .map(Tour::cost)
        .fold(f64::NEG_INFINITY, f64::max);

    let epsilon = 1e-10;

    let weights: Vec<f64> = population
        .iter()
        .map(|t| (max_cost - t.cost() + epsilon).max(epsilon))
        .collect();

    spin_wheel(&weights, rng)
}

/// Draws `r` in `[0, total)` and returns the first index whose running
/// weight sum exceeds `r`.
///
/// Weights are rescaled by the largest one when their sum overflows. Falls
/// back to the last index when rounding exhausts the scan, and to a uniform
/// pick when the wheel is empty or not finite.
fn spin_wheel<R: Rng + ?Sized>(weights: &[f64], rng: &mut R) -> usize {
    let n = weights.len();
    let mut scale = 1.0;
    let mut total: f64 = weights.iter().sum();
    if !total.is_finite() {
        scale = weights.iter().copied().fold(0.0, f64::max);
        total = weights.iter().map(|w| w / scale).sum();
    }
    if !(total > 0.0 && total.is_finite()) {
        return rng.random_range(0..n);
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w / scale;
        if cumulative > threshold {
            return i;
        }
    }

    n - 1 // floating-point fallback
}

/// Tournament selection: pick k random tours, return the cheapest.
fn tournament<R: Rng + ?Sized>(population: &[Tour], k: usize, rng: &mut R) -> usize {
    let k = k.max(1);
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if population[idx].cost() < population[best_idx].cost() {
            best_idx = idx;
        }
    }
    best_idx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::CostModel;
    use crate::random::create_rng;

    /// Builds one 2-location tour per requested cost.
    ///
    /// Each tour uses its own symmetric cost model with edge cost `c / 2`.
    fn make_population(costs: &[f64]) -> Vec<Tour> {
        costs
            .iter()
            .map(|&c| {
                let model =
                    CostModel::new(vec![vec![0.0, c / 2.0], vec![c / 2.0, 0.0]]).unwrap();
                Tour::new(vec![0, 1], &model).unwrap()
            })
            .collect()
    }

    fn counts(sel: Selection, pop: &[Tour], draws: usize, seed: u64) -> Vec<u32> {
        let mut rng = create_rng(seed);
        let mut counts = vec![0u32; pop.len()];
        for _ in 0..draws {
            counts[sel.select(pop, &mut rng)] += 1;
        }
        counts
    }

    #[test]
    fn test_make_population_costs() {
        let pop = make_population(&[10.0, 3.0]);
        assert_eq!(pop[0].cost(), 10.0);
        assert_eq!(pop[1].cost(), 3.0);
    }

    #[test]
    fn test_cost_proportional_favors_expensive() {
        let pop = make_population(&[100.0, 50.0, 1.0, 80.0]);
        let c = counts(Selection::CostProportional, &pop, 10000, 42);
        // Expected shares ≈ 43%, 22%, 0.4%, 35%.
        assert!(c[0] > c[1] && c[1] > c[2], "counts: {c:?}");
        assert!(c[2] < 200, "cheapest tour should be rare: {c:?}");
    }

    #[test]
    fn test_inverse_cost_favors_cheap() {
        let pop = make_population(&[100.0, 50.0, 1.0, 80.0]);
        let c = counts(Selection::InverseCost, &pop, 10000, 42);
        // Weights 0, 50, 99, 20 (+ε).
        assert!(c[2] > c[1] && c[1] > c[3], "counts: {c:?}");
        assert!(c[0] < 10, "most expensive tour should be ~never chosen: {c:?}");
    }

    #[test]
    fn test_tournament_favors_best() {
        let pop = make_population(&[10.0, 5.0, 1.0, 8.0]);
        let c = counts(Selection::Tournament(4), &pop, 10000, 42);
        assert!(c[2] > 6000, "expected best >60% of the time, got {c:?}");
    }

    #[test]
    fn test_tournament_size_1_is_random() {
        let pop = make_population(&[10.0, 5.0, 1.0, 8.0]);
        for &c in &counts(Selection::Tournament(1), &pop, 10000, 42) {
            assert!(c > 1500, "expected uniform counts");
        }
    }

    #[test]
    fn test_equal_costs_are_uniform() {
        let pop = make_population(&[5.0, 5.0, 5.0, 5.0]);
        for sel in [Selection::CostProportional, Selection::InverseCost] {
            let c = counts(sel, &pop, 10000, 7);
            assert!(c.iter().all(|&x| x > 2000), "{sel:?} not uniform: {c:?}");
        }
    }

    #[test]
    fn test_zero_costs_do_not_panic() {
        let pop = make_population(&[0.0, 0.0, 0.0]);
        let c = counts(Selection::CostProportional, &pop, 3000, 1);
        assert!(c.iter().all(|&x| x > 0), "counts: {c:?}");
    }

    #[test]
    fn test_overflowing_cost_sum() {
        // Each cost is finite, but their sum is not.
        let pop = make_population(&[f64::MAX, f64::MAX / 2.0, 1.0]);
        assert!(pop.iter().all(|t| t.cost().is_finite()));

        let c = counts(Selection::CostProportional, &pop, 9000, 5);
        // Expected shares ≈ 2/3, 1/3, 0.
        assert!(c[0] > 5000 && c[1] > 2000, "counts: {c:?}");
        assert_eq!(c[2], 0, "counts: {c:?}");

        let c = counts(Selection::InverseCost, &pop, 9000, 5);
        assert!(c[2] > c[1] && c[1] > c[0], "counts: {c:?}");
    }

    #[test]
    fn test_single_tour() {
        let pop = make_population(&[5.0]);
        let mut rng = create_rng(42);
        for sel in [
            Selection::CostProportional,
            Selection::InverseCost,
            Selection::Tournament(3),
        ] {
            assert_eq!(sel.select(&pop, &mut rng), 0);
        }
    }

    #[test]
    fn test_indices_in_bounds() {
        let pop = make_population(&[3.0, 1e-300, 7.0, 1e300, 2.0]);
        let mut rng = create_rng(9);
        for sel in [
            Selection::CostProportional,
            Selection::InverseCost,
            Selection::Tournament(2),
        ] {
            for _ in 0..2000 {
                assert!(sel.select(&pop, &mut rng) < pop.len());
            }
        }
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let mut rng = create_rng(42);
        Selection::InverseCost.select(&[], &mut rng);
    }
}
