//! Distance engine: validation, degenerate cases and the tableau fill.
//!
//! The engine itself only carries configuration. Every call extracts fresh
//! position lists and, when both vectors have set bits, allocates a tableau
//! sized exactly to them, so one engine can serve any number of threads.

use std::cmp::Ordering;

use crate::costs::CostParameters;
use crate::error::{GhdError, Result, Side};
use crate::positions::{extract_positions, validate_bits, PositionList};
use crate::tableau::Tableau;

/// Inputs resolved without building a tableau.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateCase {
    /// Neither vector has a set bit; distance is 0.
    BothEmpty,
    /// Only the source has set bits; distance is `(rows - 1) * ci`.
    TargetEmpty,
    /// Only the target has set bits; distance is `(cols - 1) * cd`.
    SourceEmpty,
}

impl DegenerateCase {
    fn classify(source: &PositionList, target: &PositionList) -> Option<Self> {
        match (source.is_empty(), target.is_empty()) {
            (true, true) => Some(DegenerateCase::BothEmpty),
            (false, true) => Some(DegenerateCase::TargetEmpty),
            (true, false) => Some(DegenerateCase::SourceEmpty),
            (false, false) => None,
        }
    }

    // The one-sided cases charge `ci` for surplus source bits and `cd` for
    // missing ones. Existing fixtures depend on this pairing; keep it.
    fn distance(self, rows: usize, cols: usize, costs: &CostParameters) -> f64 {
        match self {
            DegenerateCase::BothEmpty => 0.0,
            DegenerateCase::TargetEmpty => (rows - 1) as f64 * costs.ci,
            DegenerateCase::SourceEmpty => (cols - 1) as f64 * costs.cd,
        }
    }
}

/// Everything produced by one computation, for inspection and debugging.
#[derive(Debug, Clone, PartialEq)]
pub struct GhdRun {
    pub distance: f64,
    pub source: PositionList,
    pub target: PositionList,
    /// Set when the result came from a degenerate shortcut.
    pub degenerate: Option<DegenerateCase>,
    /// Filled tableau; `None` for degenerate inputs.
    pub tableau: Option<Tableau>,
}

/// Generalized Hamming distance engine.
///
/// ```
/// use ghd::{CostParameters, GhdEngine};
///
/// let costs = CostParameters::new(1.0, 1.0, 0.5).unwrap();
/// let d = GhdEngine::new().compute(&[0, 1, 1], &[1, 1, 0], 3, &costs).unwrap();
/// assert_eq!(d, 1.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GhdEngine {
    max_cells: Option<usize>,
}

impl GhdEngine {
    /// Engine without a tableau size limit.
    pub fn new() -> Self {
        Self { max_cells: None }
    }

    /// Engine that refuses tableaux larger than `max_cells` cells.
    pub fn with_max_cells(max_cells: usize) -> Self {
        Self {
            max_cells: Some(max_cells),
        }
    }

    /// Configured cell limit, if any.
    pub fn max_cells(&self) -> Option<usize> {
        self.max_cells
    }

    /// Distance between `source` and `target`, both of declared length `n`.
    pub fn compute(
        &self,
        source: &[u8],
        target: &[u8],
        n: usize,
        costs: &CostParameters,
    ) -> Result<f64> {
        self.compute_with_tableau(source, target, n, costs)
            .map(|run| run.distance)
    }

    /// Like [`compute`](Self::compute), but keeps the intermediate state.
    pub fn compute_with_tableau(
        &self,
        source: &[u8],
        target: &[u8],
        n: usize,
        costs: &CostParameters,
    ) -> Result<GhdRun> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("ghd_compute", n);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        validate_bits(source, n, Side::Source)?;
        validate_bits(target, n, Side::Target)?;
        costs.validate()?;

        let source = extract_positions(source);
        let target = extract_positions(target);
        let (rows, cols) = (source.len(), target.len());

        if let Some(case) = DegenerateCase::classify(&source, &target) {
            let distance = case.distance(rows, cols, costs);
            #[cfg(feature = "tracing")]
            tracing::debug!(?case, rows, cols, distance, "degenerate input");
            return Ok(GhdRun {
                distance,
                source,
                target,
                degenerate: Some(case),
                tableau: None,
            });
        }

        self.check_capacity(rows, cols)?;

        let mut tableau = Tableau::init(rows, cols, costs.ci, costs.cd);
        fill_tableau(&mut tableau, &source, &target, costs);
        // Both lists hold at least the sentinel and one position here.
        let distance = tableau.get(rows - 1, cols - 1);

        #[cfg(feature = "tracing")]
        tracing::debug!(rows, cols, distance, "tableau filled");

        Ok(GhdRun {
            distance,
            source,
            target,
            degenerate: None,
            tableau: Some(tableau),
        })
    }

    fn check_capacity(&self, rows: usize, cols: usize) -> Result<()> {
        let max = self.max_cells.unwrap_or(usize::MAX);
        match rows.checked_mul(cols) {
            Some(cells) if cells <= max => Ok(()),
            Some(cells) => Err(GhdError::CapacityExceeded { cells, max }),
            None => Err(GhdError::CapacityExceeded {
                cells: usize::MAX,
                max,
            }),
        }
    }
}

/// Run the delete/insert/shift recurrence over a bordered tableau.
///
/// Cells are visited row by row, left to right; each depends only on its
/// upper, left and upper-left neighbours. A matching position copies the
/// diagonal. Otherwise the larger of the two positions decides the competing
/// move: a source position past the target one may be deleted (`cd`, from
/// above), a target position past the source one may be inserted (`ci`, from
/// the left), and either way shifting costs `a * |ri - cj|` from the diagonal.
pub fn fill_tableau(
    tableau: &mut Tableau,
    source: &PositionList,
    target: &PositionList,
    costs: &CostParameters,
) {
    let rows = tableau.rows();
    let cols = tableau.cols();
    debug_assert_eq!(rows, source.len());
    debug_assert_eq!(cols, target.len());

    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("fill_tableau", rows, cols);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    if rows <= 1 || cols <= 1 {
        return;
    }

    for i in 1..rows {
        let ri = source[i];
        for j in 1..cols {
            let cj = target[j];
            let diag = tableau.get(i - 1, j - 1);
            let shift = costs.a * ri.abs_diff(cj) as f64 + diag;
            let value = match ri.cmp(&cj) {
                Ordering::Equal => diag,
                Ordering::Greater => (costs.cd + tableau.get(i - 1, j)).min(shift),
                Ordering::Less => (costs.ci + tableau.get(i, j - 1)).min(shift),
            };
            tableau.set(i, j, value);
        }
    }
}
