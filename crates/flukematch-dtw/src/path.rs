//! Warping path recovery from a filled cost matrix.

use crate::error::PathError;
use crate::matrix::CostMatrix;

/// A single step in a warping path, pairing time step `a` of the first
/// sequence with time step `b` of the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WarpingStep {
    /// Index in the first sequence.
    pub a: usize,
    /// Index in the second sequence.
    pub b: usize,
}

/// An ordered sequence of interior cells ending at `(dim - 1, dim - 1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct WarpingPath(Vec<WarpingStep>);

impl WarpingPath {
    /// Trace the optimal path back from the bottom-right cell of `costs`.
    ///
    /// At each cell the walk moves to the smallest of the upper-left, upper
    /// and left neighbours (ties in that order) until it reaches row 0 or
    /// column 0. Boundary cells are not part of the returned path. A `1 x 1`
    /// matrix has no interior and yields an empty path.
    ///
    /// The matrix carries no direction bits, so a boundary edge that is
    /// cheaper than the band can pull the walk out of the filled region; with
    /// [`Boundary::standard`](crate::Boundary::standard) this cannot happen.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`PathError::Unreachable`] | The bottom-right cell is NaN or infinite |
    pub fn traceback(costs: &CostMatrix) -> Result<Self, PathError> {
        let dim = costs.dim();
        if dim < 2 {
            return Ok(Self(Vec::new()));
        }
        costs.final_cost().reachable()?;

        let mut steps = Vec::with_capacity(2 * dim);
        let (mut i, mut j) = (dim - 1, dim - 1);
        while i > 0 && j > 0 {
            steps.push(WarpingStep { a: i, b: j });
            let diag = costs[(i - 1, j - 1)];
            let above = costs[(i - 1, j)];
            let left = costs[(i, j - 1)];
            if diag <= above && diag <= left {
                i -= 1;
                j -= 1;
            } else if above <= left {
                i -= 1;
            } else {
                j -= 1;
            }
        }

        steps.reverse();
        Ok(Self(steps))
    }

    /// Return the warping steps as a slice.
    #[must_use]
    pub fn steps(&self) -> &[WarpingStep] {
        &self.0
    }

    /// Return the number of steps in the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return true if the path contains no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a WarpingPath {
    type Item = &'a WarpingStep;
    type IntoIter = std::slice::Iter<'a, WarpingStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
