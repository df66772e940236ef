//! One generation's worth of tours.

use super::tour::Tour;
use crate::error::{TspError, TspResult};

/// A non-empty, fixed-size collection of tours for one generation.
///
/// The engine builds a new population each generation and replaces the old
/// one wholesale; tours are never shared between populations.
#[derive(Debug, Clone)]
pub struct Population {
    tours: Vec<Tour>,
}

impl Population {
    /// Wraps a generation of tours. Fails on an empty vector.
    pub fn new(tours: Vec<Tour>) -> TspResult<Self> {
        if tours.is_empty() {
            return Err(TspError::config("population must not be empty"));
        }
        Ok(Self { tours })
    }

    /// Lowest-cost tour. Ties go to the earliest position.
    pub fn best(&self) -> &Tour {
        &self.tours[self.best_index()]
    }

    /// Position of [`best`](Self::best).
    pub fn best_index(&self) -> usize {
        let mut best = 0;
        for (i, tour) in self.tours.iter().enumerate().skip(1) {
            if tour.cost() < self.tours[best].cost() {
                best = i;
            }
        }
        best
    }

    /// Tours in slot order.
    pub fn tours(&self) -> &[Tour] {
        &self.tours
    }

    /// Number of tours.
    pub fn len(&self) -> usize {
        self.tours.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.tours.is_empty()
    }

    /// Consumes the population, returning its best tour.
    pub fn into_best(mut self) -> Tour {
        let idx = self.best_index();
        self.tours.swap_remove(idx)
    }
}

impl std::ops::Index<usize> for Population {
    type Output = Tour;

    fn index(&self, index: usize) -> &Tour {
        &self.tours[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::CostModel;

    fn line_costs() -> CostModel {
        CostModel::new(vec![
            vec![0.0, 1.0, 5.0],
            vec![1.0, 0.0, 2.0],
            vec![3.0, 2.0, 0.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_rejects_empty() {
        assert!(Population::new(Vec::new()).is_err());
    }

    #[test]
    fn test_best_picks_lowest_cost_first_on_ties() {
        let costs = line_costs();
        // [0,1,2] = 1+2+3 = 6, [0,2,1] = 5+2+1 = 8, [1,2,0] = 2+3+1 = 6
        let pop = Population::new(vec![
            Tour::new(vec![0, 2, 1], &costs).unwrap(),
            Tour::new(vec![0, 1, 2], &costs).unwrap(),
            Tour::new(vec![1, 2, 0], &costs).unwrap(),
        ])
        .unwrap();
        assert_eq!(pop.best().order(), &[0, 1, 2]);
        assert_eq!(pop.len(), 3);
        assert_eq!(pop[0].cost(), 8.0);
        assert_eq!(pop.into_best().order(), &[0, 1, 2]);
    }
}
