//! Extraction of set-bit positions from a raw bit vector.
//!
//! A [`PositionList`] is the DP axis for one side of the tableau: index 0 is
//! the sentinel `0` ("no bit consumed yet"), indices `1..=k` hold the 1-based
//! positions of the set bits in ascending order. A vector with no set bits
//! yields an *empty* list rather than `[0]`; the engine relies on that to
//! recognise the degenerate cases.

use crate::error::{GhdError, Result, Side};

/// Ordered set-bit positions prefixed with the sentinel zero.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PositionList {
    positions: Vec<usize>,
}

impl PositionList {
    /// Number of entries including the sentinel, i.e. the tableau dimension.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True when the source vector had no set bits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Full list, sentinel included.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.positions
    }

    /// Set-bit positions without the sentinel.
    pub fn set_positions(&self) -> &[usize] {
        self.positions.get(1..).unwrap_or(&[])
    }

    /// Number of set bits in the originating vector.
    pub fn set_count(&self) -> usize {
        self.positions.len().saturating_sub(1)
    }
}

impl std::ops::Index<usize> for PositionList {
    type Output = usize;

    fn index(&self, idx: usize) -> &usize {
        &self.positions[idx]
    }
}

/// Build the position list of `bits`.
///
/// Only elements equal to 1 count as set; any other value is treated as
/// unset. Callers that need strict 0/1 input run [`validate_bits`] first.
pub fn extract_positions(bits: &[u8]) -> PositionList {
    let count = bits.iter().filter(|&&b| b == 1).count();
    if count == 0 {
        return PositionList::default();
    }

    let mut positions = Vec::with_capacity(count + 1);
    positions.push(0);
    positions.extend(
        bits.iter()
            .enumerate()
            .filter(|(_, &b)| b == 1)
            .map(|(i, _)| i + 1),
    );
    PositionList { positions }
}

/// Check that `bits` has exactly `declared` elements, each 0 or 1.
pub fn validate_bits(bits: &[u8], declared: usize, side: Side) -> Result<()> {
    if bits.len() != declared {
        return Err(GhdError::InvalidLength {
            side,
            declared,
            actual: bits.len(),
        });
    }
    if let Some((index, &value)) = bits.iter().enumerate().find(|(_, &b)| b > 1) {
        return Err(GhdError::InvalidBit { side, index, value });
    }
    Ok(())
}
