//! Square accumulated-cost matrices: owned, and as a view over caller memory.

use std::ops::{Index, IndexMut};

use crate::cost::DtwCost;
use crate::error::DtwError;
use crate::sequence::checked_len;

/// Owned `dim x dim` row-major accumulated-cost matrix.
///
/// Built by [`Boundary::build`](crate::Boundary::build), so every cell holds
/// a defined boundary or sentinel value before the fill runs.
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    dim: usize,
    data: Vec<f32>,
}

impl CostMatrix {
    pub(crate) fn from_raw(dim: usize, data: Vec<f32>) -> Self {
        debug_assert_eq!(data.len(), dim * dim);
        Self { dim, data }
    }

    /// Return the matrix dimension (sequence length).
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Return the value at `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= dim` or `j >= dim`.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f32 {
        self[(i, j)]
    }

    /// Return row `i` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= dim`.
    #[must_use]
    pub fn row(&self, i: usize) -> &[f32] {
        assert!(i < self.dim, "row index {i} out of bounds for matrix of size {}", self.dim);
        &self.data[i * self.dim..(i + 1) * self.dim]
    }

    /// Return the accumulated cost at the bottom-right cell `(dim - 1, dim - 1)`.
    #[must_use]
    pub fn final_cost(&self) -> DtwCost {
        DtwCost::from_matrix(self)
    }

    /// Borrow the matrix as a mutable view, e.g. to run another fill over it.
    pub fn as_view_mut(&mut self) -> CostMatrixViewMut<'_> {
        CostMatrixViewMut {
            dim: self.dim,
            data: &mut self.data,
        }
    }

    /// Return the flat row-major buffer.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Consume and return the flat row-major buffer.
    #[must_use]
    pub fn into_inner(self) -> Vec<f32> {
        self.data
    }
}

impl Index<(usize, usize)> for CostMatrix {
    type Output = f32;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        assert!(i < self.dim, "row index {i} out of bounds for matrix of size {}", self.dim);
        assert!(j < self.dim, "column index {j} out of bounds for matrix of size {}", self.dim);
        &self.data[i * self.dim + j]
    }
}

/// Mutable row-major `dim x dim` view over a caller-owned buffer.
///
/// The caller keeps ownership; the view only borrows for the duration of a
/// boundary setup or fill.
#[derive(Debug)]
pub struct CostMatrixViewMut<'a> {
    dim: usize,
    data: &'a mut [f32],
}

impl<'a> CostMatrixViewMut<'a> {
    /// Wrap a flat row-major buffer of `dim * dim` values.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DtwError::EmptySequence`] | `dim` is zero |
    /// | [`DtwError::DimensionOverflow`] | `dim * dim` overflows |
    /// | [`DtwError::BufferLength`] | `data.len() != dim * dim` |
    pub fn new(data: &'a mut [f32], dim: usize) -> Result<Self, DtwError> {
        if dim == 0 {
            return Err(DtwError::EmptySequence);
        }
        let expected = checked_len(dim, dim)?;
        if data.len() != expected {
            return Err(DtwError::BufferLength {
                buffer: "cost matrix",
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { dim, data })
    }

    /// Return the matrix dimension.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Return the value at `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= dim` or `j >= dim`.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f32 {
        self[(i, j)]
    }

    /// Overwrite the value at `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= dim` or `j >= dim`.
    pub fn set(&mut self, i: usize, j: usize, value: f32) {
        self[(i, j)] = value;
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: f32) {
        self.data.fill(value);
    }

    /// Return the flat row-major buffer.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        self.data
    }
}

impl Index<(usize, usize)> for CostMatrixViewMut<'_> {
    type Output = f32;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        assert!(i < self.dim, "row index {i} out of bounds for matrix of size {}", self.dim);
        assert!(j < self.dim, "column index {j} out of bounds for matrix of size {}", self.dim);
        &self.data[i * self.dim + j]
    }
}

impl IndexMut<(usize, usize)> for CostMatrixViewMut<'_> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        assert!(i < self.dim, "row index {i} out of bounds for matrix of size {}", self.dim);
        assert!(j < self.dim, "column index {j} out of bounds for matrix of size {}", self.dim);
        &mut self.data[i * self.dim + j]
    }
}
