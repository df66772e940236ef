//! Pairwise travel-cost matrix.

use crate::error::{TspError, TspResult};

/// Immutable N×N matrix of travel costs between locations.
///
/// Costs may be asymmetric. Entries are non-negative and finite; the diagonal
/// is stored but never used by a cyclic tour over distinct locations.
///
/// # Examples
///
/// ```
/// use tsp_genetic::problem::CostModel;
///
/// let costs = CostModel::new(vec![
///     vec![0.0, 2.0, 9.0],
///     vec![1.0, 0.0, 6.0],
///     vec![15.0, 7.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(costs.size(), 3);
/// assert_eq!(costs.cost(0, 2).unwrap(), 9.0);
/// assert!(costs.cost(3, 0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawCostModel")
)]
pub struct CostModel {
    size: usize,
    // Row-major, size * size entries.
    values: Vec<f64>,
}

impl CostModel {
    /// Builds a cost model from rows.
    ///
    /// Fails with [`TspError::MalformedInput`] if the matrix has fewer than two
    /// rows, any row length differs from the row count, or an entry is
    /// negative or not finite.
    pub fn new(rows: Vec<Vec<f64>>) -> TspResult<Self> {
        let size = rows.len();
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(TspError::malformed(format!(
                "matrix is not square: row {i} has {} entries, expected {size}",
                row.len()
            )));
        }
        Self::from_flat(size, rows.into_iter().flatten().collect())
    }

    /// Builds a cost model from `size * size` row-major values.
    pub fn from_flat(size: usize, values: Vec<f64>) -> TspResult<Self> {
        if size < 2 {
            return Err(TspError::malformed(format!(
                "at least 2 locations are required, got {size}"
            )));
        }
        let cells = size.checked_mul(size).ok_or_else(|| {
            TspError::malformed(format!("location count {size} is too large"))
        })?;
        if values.len() != cells {
            return Err(TspError::malformed(format!(
                "expected {cells} entries for {size} locations, got {}",
                values.len()
            )));
        }
        if let Some(pos) = values.iter().position(|v| !v.is_finite() || *v < 0.0) {
            return Err(TspError::malformed(format!(
                "cost[{}][{}] = {} is not a non-negative finite number",
                pos / size,
                pos % size,
                values[pos]
            )));
        }
        Ok(Self { size, values })
    }

    /// Number of locations.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Travel cost from `from` to `to`.
    ///
    /// Fails with [`TspError::OutOfRange`] if either index is outside `[0, size)`.
    pub fn cost(&self, from: usize, to: usize) -> TspResult<f64> {
        self.check_index(from)?;
        self.check_index(to)?;
        Ok(self.edge(from, to))
    }

    /// Row of costs leaving `from`.
    pub fn row(&self, from: usize) -> TspResult<&[f64]> {
        self.check_index(from)?;
        Ok(&self.values[from * self.size..(from + 1) * self.size])
    }

    /// Unchecked-by-contract lookup for callers that already validated both
    /// indices. Panics on out-of-range indices.
    pub(crate) fn edge(&self, from: usize, to: usize) -> f64 {
        self.values[from * self.size + to]
    }

    fn check_index(&self, index: usize) -> TspResult<()> {
        if index < self.size {
            Ok(())
        } else {
            Err(TspError::OutOfRange {
                index,
                size: self.size,
            })
        }
    }
}

/// Wire form of [`CostModel`], checked by [`CostModel::from_flat`] on the
/// way in.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCostModel {
    size: usize,
    values: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCostModel> for CostModel {
    type Error = TspError;

    fn try_from(raw: RawCostModel) -> TspResult<Self> {
        Self::from_flat(raw.size, raw.values)
    }
}
