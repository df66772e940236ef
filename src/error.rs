//! Error types for the TSP solver.
//!
//! Every fallible operation returns [`TspResult<T>`]. Nothing in the engine
//! retries: any error aborts the run.

use thiserror::Error;

/// Result type alias for solver operations.
pub type TspResult<T> = Result<T, TspError>;

/// Unified error type for cost-matrix loading, tour construction and engine
/// configuration.
#[derive(Debug, Error)]
pub enum TspError {
    /// The cost matrix (or the text it was read from) is not a complete,
    /// square, non-negative matrix.
    #[error("malformed input{}: {message}", line_suffix(.line))]
    MalformedInput {
        /// 1-based line number in the source text, when known.
        line: Option<usize>,
        /// What was wrong.
        message: String,
    },

    /// A location index outside `[0, size)`.
    #[error("location index {index} out of range for {size} locations")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// Number of locations in the cost model.
        size: usize,
    },

    /// A tour order that is not a permutation of `[0, size)`.
    #[error("invalid permutation: {message}")]
    InvalidPermutation {
        /// Which element broke the permutation.
        message: String,
    },

    /// Invalid engine configuration.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the invalid parameter.
        message: String,
    },

    /// An engine operation called in the wrong lifecycle state.
    #[error("invalid engine state: {message}")]
    InvalidState {
        /// What was attempted and in which state.
        message: String,
    },

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn line_suffix(line: &Option<usize>) -> String {
    line.map(|l| format!(" at line {l}")).unwrap_or_default()
}

impl TspError {
    /// Creates a malformed-input error without line information.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedInput {
            line: None,
            message: message.into(),
        }
    }

    /// Creates a malformed-input error pointing at a 1-based source line.
    #[must_use]
    pub fn malformed_at(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedInput {
            line: Some(line),
            message: message.into(),
        }
    }

    /// Creates an invalid-permutation error.
    #[must_use]
    pub fn invalid_permutation(message: impl Into<String>) -> Self {
        Self::InvalidPermutation {
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
