//! Accumulated cost read out of a filled matrix.

use crate::error::PathError;
use crate::matrix::CostMatrix;

/// The accumulated alignment cost at the bottom-right cell of a filled
/// cost matrix.
///
/// Under the [standard boundary](crate::Boundary::standard) a value of `+inf`
/// means the band never connected the origin to the final cell, and NaN means
/// a NaN input reached it. Neither is a usable alignment cost; see
/// [`reachable`](Self::reachable).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct DtwCost(f32);

impl DtwCost {
    /// The cost of a final cell the band never reached.
    pub const INFINITY: Self = Self(f32::INFINITY);

    /// Read `(dim - 1, dim - 1)` out of `costs`.
    ///
    /// For a `1 x 1` matrix this is the origin itself.
    #[must_use]
    pub fn from_matrix(costs: &CostMatrix) -> Self {
        let last = costs.dim() - 1;
        Self(costs[(last, last)])
    }

    /// Return the raw cost, whatever it is.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Return true if an alignment reached the final cell with a finite cost.
    #[must_use]
    pub fn is_reachable(self) -> bool {
        self.0.is_finite()
    }

    /// Return the cost if it is finite.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`PathError::Unreachable`] | The cost is NaN or infinite |
    pub fn reachable(self) -> Result<f32, PathError> {
        if self.is_reachable() {
            Ok(self.0)
        } else {
            Err(PathError::Unreachable { value: self.0 })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::Boundary;

    #[test]
    fn reads_bottom_right_cell() {
        let mut m = Boundary::standard().build(3).unwrap();
        m.as_view_mut().set(2, 2, 4.5);
        m.as_view_mut().set(2, 1, 1.0);
        assert_eq!(DtwCost::from_matrix(&m).value(), 4.5);
    }

    #[test]
    fn single_cell_reads_origin() {
        let m = Boundary::standard().with_origin(2.0).build(1).unwrap();
        assert_eq!(DtwCost::from_matrix(&m).reachable(), Ok(2.0));
    }

    #[test]
    fn untouched_sentinel_is_unreachable() {
        let m = Boundary::standard().build(4).unwrap();
        let cost = DtwCost::from_matrix(&m);
        assert_eq!(cost, DtwCost::INFINITY);
        assert!(!cost.is_reachable());
        assert_eq!(cost.reachable(), Err(PathError::Unreachable { value: f32::INFINITY }));
    }

    #[test]
    fn nan_final_cell_is_unreachable() {
        let mut m = Boundary::standard().build(2).unwrap();
        m.as_view_mut().set(1, 1, f32::NAN);
        let err = DtwCost::from_matrix(&m).reachable().unwrap_err();
        assert!(matches!(err, PathError::Unreachable { value } if value.is_nan()));
    }

    #[test]
    fn finite_sentinel_counts_as_reachable() {
        let m = Boundary::standard().with_sentinel(1e9).build(3).unwrap();
        assert_eq!(DtwCost::from_matrix(&m).reachable(), Ok(1e9));
    }
}
