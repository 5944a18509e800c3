//! Banded, index-weighted DTW cost matrix fill.

use tracing::{debug, instrument};

use crate::boundary::Boundary;
use crate::cost::DtwCost;
use crate::error::DtwError;
use crate::local::weighted_euclidean_cost;
use crate::matrix::{CostMatrix, CostMatrixViewMut};
use crate::sequence::{SequenceView, Weights};
use crate::window::BandWindow;

/// Fill the banded interior of a caller-owned cost matrix from flat buffers.
///
/// Positional entry point over raw row-major buffers: `x1` and `x2` are
/// `m x n`, `w` holds `m` weights, and `costs_out` is `m x m`. Shapes are
/// checked up front; after that the fill cannot fail.
///
/// `costs_out` is **not** initialized here. Row 0, column 0 and every cell
/// outside the band must already hold boundary values, e.g. written by
/// [`Boundary::apply`].
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`DtwError::EmptySequence`] | `m` is zero |
/// | [`DtwError::DimensionOverflow`] | `m * n` or `m * m` overflows |
/// | [`DtwError::BufferLength`] | A buffer's length does not match its declared shape |
/// | [`DtwError::WeightsLength`] | `w.len() != m` |
pub fn weighted_euclidean(
    x1: &[f32],
    x2: &[f32],
    w: &[f32],
    m: usize,
    n: usize,
    window: usize,
    costs_out: &mut [f32],
) -> Result<(), DtwError> {
    let a = SequenceView::new(x1, m, n)?;
    let b = SequenceView::new(x2, m, n)?;
    if w.len() != m {
        return Err(DtwError::WeightsLength { expected: m, actual: w.len() });
    }
    let weights = Weights::new(w)?;
    let mut costs = CostMatrixViewMut::new(costs_out, m)?;
    WeightedDtw::with_radius(window).fill(a, b, weights, &mut costs)
}

/// Immutable weighted DTW configuration. Thread-safe and copyable.
///
/// Local cost of cell `(i, j)` is `w[i] * w[j] * ||a[i] - b[j]||`; each filled
/// cell adds it to the minimum of its left, upper and upper-left neighbours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeightedDtw {
    window: BandWindow,
}

impl WeightedDtw {
    /// Create a calculator from an existing [`BandWindow`].
    #[must_use]
    pub fn new(window: BandWindow) -> Self {
        Self { window }
    }

    /// Create a calculator with a band of the given radius.
    #[must_use]
    pub fn with_radius(radius: usize) -> Self {
        Self::new(BandWindow::new(radius))
    }

    /// Return the band window.
    #[must_use]
    pub fn window(&self) -> BandWindow {
        self.window
    }

    /// Fill the banded interior of `costs` in place.
    ///
    /// Only cells `(i, j)` with `i >= 1` and `j` in
    /// [`BandWindow::column_range`] are written; every other cell is read as
    /// a boundary value and left untouched. Rows are filled top to bottom and
    /// each row left to right, since a cell depends on its left, upper and
    /// upper-left neighbours.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DtwError::RowCountMismatch`] | `a` and `b` differ in length |
    /// | [`DtwError::ColumnCountMismatch`] | `a` and `b` differ in feature dimensionality |
    /// | [`DtwError::WeightsLength`] | `weights.len()` differs from the sequence length |
    /// | [`DtwError::CostMatrixDim`] | `costs.dim()` differs from the sequence length |
    #[instrument(skip_all, fields(dim = a.rows(), features = a.cols(), radius = self.window.radius()))]
    pub fn fill(
        &self,
        a: SequenceView<'_>,
        b: SequenceView<'_>,
        weights: Weights<'_>,
        costs: &mut CostMatrixViewMut<'_>,
    ) -> Result<(), DtwError> {
        Self::check_shapes(a, b, weights, costs.dim())?;
        self.fill_band(a, b, weights, costs);
        Ok(())
    }

    /// Allocate a cost matrix with `boundary` applied and fill it.
    ///
    /// # Errors
    ///
    /// Any shape error from [`fill`][Self::fill], plus
    /// [`DtwError::BoundaryLength`] from [`Boundary::build`].
    pub fn compute(
        &self,
        a: SequenceView<'_>,
        b: SequenceView<'_>,
        weights: Weights<'_>,
        boundary: &Boundary,
    ) -> Result<CostMatrix, DtwError> {
        Self::check_shapes(a, b, weights, a.rows())?;
        let mut matrix = boundary.build(a.rows())?;
        self.fill(a, b, weights, &mut matrix.as_view_mut())?;
        Ok(matrix)
    }

    /// Compute the accumulated cost at `(m - 1, m - 1)` under the
    /// [standard boundary](Boundary::standard).
    ///
    /// Returns [`DtwCost::INFINITY`] when the band does not connect the origin
    /// to the final cell (for example a radius of zero), and NaN when a NaN
    /// input lies on every route to it.
    ///
    /// # Errors
    ///
    /// Any shape error from [`fill`][Self::fill].
    #[instrument(skip_all, fields(dim = a.rows(), radius = self.window.radius()))]
    pub fn distance(
        &self,
        a: SequenceView<'_>,
        b: SequenceView<'_>,
        weights: Weights<'_>,
    ) -> Result<DtwCost, DtwError> {
        let matrix = self.compute(a, b, weights, &Boundary::standard())?;
        Ok(matrix.final_cost())
    }

    fn check_shapes(
        a: SequenceView<'_>,
        b: SequenceView<'_>,
        weights: Weights<'_>,
        dim: usize,
    ) -> Result<(), DtwError> {
        let m = a.rows();
        if b.rows() != m {
            return Err(DtwError::RowCountMismatch { left: m, right: b.rows() });
        }
        if b.cols() != a.cols() {
            return Err(DtwError::ColumnCountMismatch {
                left: a.cols(),
                right: b.cols(),
            });
        }
        if weights.len() != m {
            return Err(DtwError::WeightsLength {
                expected: m,
                actual: weights.len(),
            });
        }
        if dim != m {
            return Err(DtwError::CostMatrixDim { expected: m, actual: dim });
        }
        Ok(())
    }

    /// The recurrence itself. Shapes are already consistent.
    fn fill_band(
        &self,
        a: SequenceView<'_>,
        b: SequenceView<'_>,
        weights: Weights<'_>,
        costs: &mut CostMatrixViewMut<'_>,
    ) {
        let m = a.rows();
        let mut filled = 0usize;

        for i in 1..m {
            let xi = a.row(i);
            let wi = weights[i];
            let columns = self.window.column_range(i, m);
            filled += columns.len();
            for j in columns {
                let cost = weighted_euclidean_cost(xi, b.row(j), wi, weights[j]);
                let left = costs[(i, j - 1)];
                let above = costs[(i - 1, j)];
                let diag = costs[(i - 1, j - 1)];
                costs[(i, j)] = cost + min_first(left, min_first(above, diag));
            }
        }

        debug!(filled, "band filled");
    }
}

/// Smaller of `a` and `b`, keeping `a` unless `b < a`.
///
/// Any comparison with NaN is false, so a NaN `a` survives and a NaN `b`
/// loses to `a`. Nesting `min_first(left, min_first(above, diag))` therefore
/// carries a NaN predecessor forward instead of skipping it as [`f32::min`]
/// would.
#[inline]
fn min_first(a: f32, b: f32) -> f32 {
    if b < a { b } else { a }
}
