//! Dense cost tableau used by the distance recurrence.
//!
//! Cell `(i, j)` holds the cheapest cost of turning the first `i` source
//! positions into the first `j` target positions. The border is fixed at
//! construction: row 0 is `j * ci` (build the target prefix from nothing),
//! column 0 is `i * cd` (drop the source prefix). After the fill, the
//! bottom-right cell holds the distance.

use std::fmt;

/// Row-major `rows × cols` grid of costs.
#[derive(Debug, Clone, PartialEq)]
pub struct Tableau {
    rows: usize,
    cols: usize,
    cells: Vec<f64>,
}

impl Tableau {
    /// Allocate a tableau and fill its border row and column.
    ///
    /// Interior cells start at `0.0` and are expected to be overwritten by the
    /// fill in row-major order.
    ///
    /// # Panics
    /// Panics if `rows * cols` overflows `usize`. The engine checks this
    /// before calling.
    pub fn init(rows: usize, cols: usize, ci: f64, cd: f64) -> Self {
        let len = rows
            .checked_mul(cols)
            .expect("tableau dimensions overflow usize");
        let mut cells = vec![0.0; len];

        if rows > 0 {
            for (j, cell) in cells[..cols].iter_mut().enumerate() {
                *cell = j as f64 * ci;
            }
        }
        if cols > 0 {
            for i in 0..rows {
                cells[i * cols] = i as f64 * cd;
            }
        }

        Self { rows, cols, cells }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Value at `(row, col)`.
    ///
    /// # Panics
    /// Panics if `row >= rows()` or `col >= cols()`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} tableau",
            self.rows,
            self.cols
        );
        self.cells[row * self.cols + col]
    }

    /// Overwrite `(row, col)`.
    ///
    /// # Panics
    /// Panics if `row >= rows()` or `col >= cols()`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} tableau",
            self.rows,
            self.cols
        );
        self.cells[row * self.cols + col] = value;
    }

    /// One row as a slice.
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Iterate over all rows top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        // `chunks` rejects a zero chunk size; a zero-width tableau has no rows to show.
        self.cells.chunks(self.cols.max(1))
    }

    /// Bottom-right cell, or `None` for a zero-sized tableau.
    pub fn result(&self) -> Option<f64> {
        self.cells.last().copied()
    }
}

impl fmt::Display for Tableau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            let mut first = true;
            for value in row {
                if !first {
                    f.write_str(" ")?;
                }
                write!(f, "{value}")?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
