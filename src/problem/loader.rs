//! Text loader for TSP instances.
//!
//! # Format
//!
//! ```text
//! 4            <- number of locations N
//! Amsterdam    <- N location names, one per line
//! Berlin
//! Copenhagen
//! Dublin
//! 0 10 15 20   <- N rows of N whitespace-separated costs (row-major)
//! 10 0 35 25
//! 15 35 0 30
//! 20 25 30 0
//! ```
//!
//! Blank lines are skipped and names are trimmed. Errors report the 1-based
//! line number of the offending line.

use super::CostModel;
use crate::error::{TspError, TspResult};
use std::io::{BufRead, Read};
use std::path::Path;

/// A loaded problem: display names plus the cost matrix.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TspInstance {
    /// Display name of each location, indexed like the cost matrix.
    pub names: Vec<String>,

    /// Travel costs between locations.
    pub costs: CostModel,
}

impl TspInstance {
    /// Number of locations.
    pub fn size(&self) -> usize {
        self.costs.size()
    }

    /// Resolves a tour order into location names.
    ///
    /// Fails with [`TspError::OutOfRange`] on an index without a name.
    pub fn resolve<'a>(&'a self, order: &[usize]) -> TspResult<Vec<&'a str>> {
        order
            .iter()
            .map(|&i| {
                self.names.get(i).map(String::as_str).ok_or(TspError::OutOfRange {
                    index: i,
                    size: self.names.len(),
                })
            })
            .collect()
    }
}

/// Parses an instance from its text form.
pub fn parse_instance(text: &str) -> TspResult<TspInstance> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let (line_no, header) = lines
        .next()
        .ok_or_else(|| TspError::malformed("input is empty"))?;
    let size: usize = header.parse().map_err(|_| {
        TspError::malformed_at(line_no, format!("expected location count, found '{header}'"))
    })?;
    if size < 2 {
        return Err(TspError::malformed_at(
            line_no,
            format!("at least 2 locations are required, got {size}"),
        ));
    }

    if size.checked_mul(size).is_none() {
        return Err(TspError::malformed_at(
            line_no,
            format!("location count {size} is too large"),
        ));
    }

    // The header is untrusted, so capacity grows with the lines actually read.
    let mut names = Vec::new();
    for i in 0..size {
        let (_, name) = lines.next().ok_or_else(|| {
            TspError::malformed(format!("expected {size} location names, found {i}"))
        })?;
        names.push(name.to_string());
    }

    let mut values = Vec::new();
    for row in 0..size {
        let (line_no, line) = lines.next().ok_or_else(|| {
            TspError::malformed(format!("expected {size} cost rows, found {row}"))
        })?;
        let before = values.len();
        for token in line.split_whitespace() {
            let value: f64 = token.parse().map_err(|_| {
                TspError::malformed_at(line_no, format!("'{token}' is not a number"))
            })?;
            values.push(value);
        }
        let found = values.len() - before;
        if found != size {
            return Err(TspError::malformed_at(
                line_no,
                format!("expected {size} costs in row {row}, found {found}"),
            ));
        }
    }

    if let Some((line_no, _)) = lines.next() {
        return Err(TspError::malformed_at(line_no, "unexpected trailing content"));
    }

    let costs = CostModel::from_flat(size, values)?;
    Ok(TspInstance { names, costs })
}

/// Reads and parses an instance from a buffered reader.
pub fn read_instance<R: BufRead>(mut reader: R) -> TspResult<TspInstance> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_instance(&text)
}

/// Loads an instance from a file.
pub fn load_instance<P: AsRef<Path>>(path: P) -> TspResult<TspInstance> {
    let file = std::fs::File::open(path)?;
    read_instance(std::io::BufReader::new(file))
}
