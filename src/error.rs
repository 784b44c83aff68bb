//! Error taxonomy for distance computations.
//!
//! Every variant is an input-validation failure raised before any tableau is
//! allocated; a computation either succeeds completely or reports one of these.

use std::fmt;

/// Which input vector an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Source,
    Target,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Source => f.write_str("source"),
            Side::Target => f.write_str("target"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GhdError {
    #[error("{side} vector has length {actual}, expected declared length {declared}")]
    InvalidLength {
        side: Side,
        declared: usize,
        actual: usize,
    },

    #[error("{side} vector holds {value} at index {index}; only 0 and 1 are allowed")]
    InvalidBit { side: Side, index: usize, value: u8 },

    #[error("cost parameter `{name}` must be finite and non-negative, got {value}")]
    InvalidCost { name: &'static str, value: f64 },

    #[error("tableau needs {cells} cells, limit is {max}")]
    CapacityExceeded { cells: usize, max: usize },
}

impl GhdError {
    /// True for malformed vectors: a length mismatch or a non-binary element.
    pub fn is_invalid_length(&self) -> bool {
        matches!(
            self,
            GhdError::InvalidLength { .. } | GhdError::InvalidBit { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, GhdError>;
