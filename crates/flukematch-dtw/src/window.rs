//! Band window for the weighted DTW fill.

use std::ops::Range;

/// Sakoe-Chiba style band around the main diagonal.
///
/// Cell `(i, j)` is filled when `i - radius <= j < i + radius`, so the band
/// reaches one column further left of the diagonal than right of it. Row 0 and
/// column 0 are never part of the band; they hold caller-supplied boundary values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BandWindow {
    radius: usize,
}

impl BandWindow {
    /// Create a band window with the given radius.
    #[must_use]
    pub fn new(radius: usize) -> Self {
        Self { radius }
    }

    /// Return the band radius.
    #[must_use]
    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Return the half-open range of columns filled for `row` in a `dim x dim` matrix.
    ///
    /// Equal to `max(1, row - radius)..min(dim, row + radius)`. Empty for row 0
    /// and for a radius of zero.
    #[must_use]
    pub fn column_range(&self, row: usize, dim: usize) -> Range<usize> {
        if row == 0 || row >= dim {
            return 0..0;
        }
        let start = row.saturating_sub(self.radius).max(1);
        let end = row.saturating_add(self.radius).min(dim);
        start..end
    }

    /// Return true if the fill writes cell `(row, col)`.
    #[must_use]
    pub fn contains(&self, row: usize, col: usize, dim: usize) -> bool {
        self.column_range(row, dim).contains(&col)
    }

    /// Return the widest column range of any row in a `dim x dim` matrix.
    #[must_use]
    pub fn band_width(&self, dim: usize) -> usize {
        self.radius.saturating_mul(2).min(dim.saturating_sub(1))
    }

    /// Return true if every interior cell of a `dim x dim` matrix is filled.
    #[must_use]
    pub fn is_full(&self, dim: usize) -> bool {
        self.radius >= dim.saturating_sub(1)
    }
}

impl From<usize> for BandWindow {
    fn from(radius: usize) -> Self {
        Self::new(radius)
    }
}
