//! Boundary setup for the accumulated-cost matrix.
//!
//! The fill never writes row 0, column 0, or cells outside the band, but it
//! reads them. [`Boundary`] makes those values an explicit input: it writes
//! every cell of the matrix so the fill only ever reads defined values.

use tracing::debug;

use crate::error::DtwError;
use crate::matrix::{CostMatrix, CostMatrixViewMut};
use crate::sequence::checked_len;

/// Boundary and sentinel values written before the fill.
///
/// Construct via [`Boundary::standard`], then chain `with_*` methods to
/// override defaults.
///
/// # Defaults
///
/// | Parameter      | Default          |
/// |----------------|------------------|
/// | `origin`       | `0.0`            |
/// | `sentinel`     | `f32::INFINITY`  |
/// | `first_row`    | all `sentinel`   |
/// | `first_column` | all `sentinel`   |
#[derive(Debug, Clone, PartialEq)]
pub struct Boundary {
    origin: f32,
    sentinel: f32,
    first_row: Option<Vec<f32>>,
    first_column: Option<Vec<f32>>,
}

impl Default for Boundary {
    fn default() -> Self {
        Self::standard()
    }
}

impl Boundary {
    /// Standard DTW boundary: `C(0, 0) = 0`, every other cell `+inf`.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            origin: 0.0,
            sentinel: f32::INFINITY,
            first_row: None,
            first_column: None,
        }
    }

    /// Set the value of `C(0, 0)`.
    #[must_use]
    pub fn with_origin(mut self, origin: f32) -> Self {
        self.origin = origin;
        self
    }

    /// Set the value written to every cell that is neither the origin nor an
    /// explicit edge value. A finite sentinel such as `1e9` keeps arithmetic
    /// on unreachable cells finite.
    #[must_use]
    pub fn with_sentinel(mut self, sentinel: f32) -> Self {
        self.sentinel = sentinel;
        self
    }

    /// Set explicit values for `C(0, 1..dim)`. Must hold `dim - 1` values.
    #[must_use]
    pub fn with_first_row(mut self, values: Vec<f32>) -> Self {
        self.first_row = Some(values);
        self
    }

    /// Set explicit values for `C(1..dim, 0)`. Must hold `dim - 1` values.
    #[must_use]
    pub fn with_first_column(mut self, values: Vec<f32>) -> Self {
        self.first_column = Some(values);
        self
    }

    /// Return the origin value.
    #[must_use]
    pub fn origin(&self) -> f32 {
        self.origin
    }

    /// Return the sentinel value.
    #[must_use]
    pub fn sentinel(&self) -> f32 {
        self.sentinel
    }

    /// Write the boundary into every cell of `costs`.
    ///
    /// Interior cells are reset to the sentinel, so a buffer reused across
    /// calls carries nothing over from a previous fill.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DtwError::BoundaryLength`] | An explicit edge does not hold `dim - 1` values |
    pub fn apply(&self, costs: &mut CostMatrixViewMut<'_>) -> Result<(), DtwError> {
        let dim = costs.dim();
        let edge_len = dim - 1;
        Self::check_edge("first row", self.first_row.as_deref(), edge_len)?;
        Self::check_edge("first column", self.first_column.as_deref(), edge_len)?;

        costs.fill(self.sentinel);
        costs.set(0, 0, self.origin);
        if let Some(row) = &self.first_row {
            for (j, &v) in row.iter().enumerate() {
                costs.set(0, j + 1, v);
            }
        }
        if let Some(col) = &self.first_column {
            for (i, &v) in col.iter().enumerate() {
                costs.set(i + 1, 0, v);
            }
        }

        debug!(
            dim,
            origin = self.origin,
            sentinel = self.sentinel,
            explicit_row = self.first_row.is_some(),
            explicit_column = self.first_column.is_some(),
            "boundary applied"
        );
        Ok(())
    }

    /// Allocate a `dim x dim` matrix and apply this boundary to it.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DtwError::EmptySequence`] | `dim` is zero |
    /// | [`DtwError::DimensionOverflow`] | `dim * dim` overflows |
    /// | [`DtwError::BoundaryLength`] | An explicit edge does not hold `dim - 1` values |
    pub fn build(&self, dim: usize) -> Result<CostMatrix, DtwError> {
        if dim == 0 {
            return Err(DtwError::EmptySequence);
        }
        let len = checked_len(dim, dim)?;
        let mut matrix = CostMatrix::from_raw(dim, vec![self.sentinel; len]);
        self.apply(&mut matrix.as_view_mut())?;
        Ok(matrix)
    }

    fn check_edge(edge: &'static str, values: Option<&[f32]>, expected: usize) -> Result<(), DtwError> {
        match values {
            Some(v) if v.len() != expected => Err(DtwError::BoundaryLength {
                edge,
                expected,
                actual: v.len(),
            }),
            _ => Ok(()),
        }
    }
}
