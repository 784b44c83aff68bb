//! Generalized Hamming Distance (GHD)
//!
//! Classic Hamming distance counts differing positions; GHD instead treats a
//! binary vector as the set of its "on" positions and asks for the cheapest
//! way to turn the source set into the target set using three moves:
//! - delete a position (cost `cd`),
//! - insert a position (cost `ci`),
//! - shift a position from `i` to `j` (cost `a * |i - j|`).
//!
//! A bit that merely moved therefore costs less than deleting and
//! re-inserting it, which suits sparse feature maps and symbol placements.
//!
//! ## Pipeline
//! 1. [`positions::extract_positions`] turns each vector into a sentinel-led
//!    list of 1-based set-bit positions.
//! 2. [`Tableau::init`] allocates a grid sized to the two lists and fills its
//!    border.
//! 3. [`engine::fill_tableau`] runs the recurrence; the bottom-right cell is
//!    the distance.
//!
//! Inputs with no set bits on one or both sides are answered directly by
//! [`GhdEngine`] without a tableau.
//!
//! ## Quick start
//! ```
//! use ghd::{compute_ghd, CostParameters};
//!
//! let costs = CostParameters::new(1.0, 1.0, 0.5).unwrap();
//! let source = [1, 1, 0, 0, 1, 0, 0, 0, 0, 0];
//! let target = [1, 1, 0, 0, 0, 1, 0, 0, 0, 0];
//! assert_eq!(compute_ghd(&source, &target, 10, &costs).unwrap(), 0.5);
//! ```
//!
//! Large `a` makes shifting unattractive and the result approaches the
//! insert/delete-only edit distance between the two position sets.

pub mod builder;
pub mod costs;
pub mod engine;
pub mod error;
pub mod positions;
pub mod tableau;

pub use crate::builder::GhdEngineBuilder;
pub use crate::costs::CostParameters;
pub use crate::engine::{DegenerateCase, GhdEngine, GhdRun};
pub use crate::error::{GhdError, Result, Side};
pub use crate::positions::PositionList;
pub use crate::tableau::Tableau;

/// Distance between two binary vectors of declared length `n`.
///
/// Shorthand for `GhdEngine::new().compute(..)`.
pub fn compute_ghd(
    source: &[u8],
    target: &[u8],
    n: usize,
    costs: &CostParameters,
) -> Result<f64> {
    GhdEngine::new().compute(source, target, n, costs)
}
