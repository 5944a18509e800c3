//! Multivariate sequence buffers and per-index weights.

use std::ops::Index;

use crate::error::DtwError;

/// Number of elements in a `rows x cols` buffer, or an error if it overflows.
pub(crate) fn checked_len(rows: usize, cols: usize) -> Result<usize, DtwError> {
    rows.checked_mul(cols)
        .ok_or(DtwError::DimensionOverflow { rows, cols })
}

/// Owned, validated sequence of feature vectors.
///
/// Stored as a flat row-major `rows x cols` buffer: row `i` is the feature
/// vector of time step `i`. Guaranteed to have at least one row and only
/// finite values.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSequence {
    data: Vec<f32>,
    rows: usize,
    cols: usize,
}

impl FeatureSequence {
    /// Create a sequence from a flat row-major buffer.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DtwError::EmptySequence`] | `rows` is zero |
    /// | [`DtwError::DimensionOverflow`] | `rows * cols` overflows |
    /// | [`DtwError::BufferLength`] | `data.len() != rows * cols` |
    /// | [`DtwError::NonFiniteValue`] | Any value is NaN or infinite |
    pub fn new(data: Vec<f32>, rows: usize, cols: usize) -> Result<Self, DtwError> {
        SequenceView::new(&data, rows, cols)?;
        if let Some(index) = data.iter().position(|v| !v.is_finite()) {
            return Err(DtwError::NonFiniteValue {
                row: index / cols,
                col: index % cols,
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Create a univariate sequence (one feature per time step).
    ///
    /// # Errors
    ///
    /// Same as [`FeatureSequence::new`] with `cols == 1`.
    pub fn univariate(values: Vec<f32>) -> Result<Self, DtwError> {
        let rows = values.len();
        Self::new(values, rows, 1)
    }

    /// Borrow this sequence as a zero-copy view.
    #[must_use]
    pub fn as_view(&self) -> SequenceView<'_> {
        SequenceView {
            data: &self.data,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Return the number of time steps.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Return the feature dimensionality.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Return the feature vector of time step `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows`.
    #[must_use]
    pub fn row(&self, i: usize) -> &[f32] {
        self.as_view().row(i)
    }

    /// Consume and return the flat row-major buffer.
    #[must_use]
    pub fn into_inner(self) -> Vec<f32> {
        self.data
    }
}

impl TryFrom<Vec<Vec<f32>>> for FeatureSequence {
    type Error = DtwError;

    fn try_from(rows: Vec<Vec<f32>>) -> Result<Self, Self::Error> {
        let n_rows = rows.len();
        let cols = rows.first().map_or(0, Vec::len);
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(DtwError::RaggedRows {
                row,
                expected: cols,
                actual: r.len(),
            });
        }
        let data: Vec<f32> = rows.into_iter().flatten().collect();
        Self::new(data, n_rows, cols)
    }
}

/// Borrowed row-major view over a caller-owned `rows x cols` buffer.
///
/// Construction checks the shape only; values are read as-is, so NaN and
/// infinities propagate through the fill.
#[derive(Debug, Clone, Copy)]
pub struct SequenceView<'a> {
    data: &'a [f32],
    rows: usize,
    cols: usize,
}

impl<'a> SequenceView<'a> {
    /// Wrap a flat row-major buffer.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DtwError::EmptySequence`] | `rows` is zero |
    /// | [`DtwError::DimensionOverflow`] | `rows * cols` overflows |
    /// | [`DtwError::BufferLength`] | `data.len() != rows * cols` |
    pub fn new(data: &'a [f32], rows: usize, cols: usize) -> Result<Self, DtwError> {
        if rows == 0 {
            return Err(DtwError::EmptySequence);
        }
        let expected = checked_len(rows, cols)?;
        if data.len() != expected {
            return Err(DtwError::BufferLength {
                buffer: "sequence",
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Return the feature vector of time step `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows`.
    #[must_use]
    pub fn row(&self, i: usize) -> &'a [f32] {
        assert!(i < self.rows, "row {i} out of bounds for sequence of length {}", self.rows);
        let start = i * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Return the number of time steps.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Return the feature dimensionality.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Return the underlying flat buffer.
    #[must_use]
    pub fn as_slice(&self) -> &'a [f32] {
        self.data
    }
}

/// Borrowed per-time-index weights, shared by both sequences' index space.
#[derive(Debug, Clone, Copy)]
pub struct Weights<'a>(&'a [f32]);

impl<'a> Weights<'a> {
    /// Wrap a weight slice.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DtwError::EmptySequence`] | `values` is empty |
    pub fn new(values: &'a [f32]) -> Result<Self, DtwError> {
        if values.is_empty() {
            return Err(DtwError::EmptySequence);
        }
        Ok(Self(values))
    }

    /// Return the weight at time index `i`.
    #[must_use]
    pub fn get(&self, i: usize) -> f32 {
        self.0[i]
    }

    /// Return the number of weights.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return true if there are no weights.
    ///
    /// Always `false` for a [`Weights`] built via [`Weights::new`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the underlying slice.
    #[must_use]
    pub fn as_slice(&self) -> &'a [f32] {
        self.0
    }
}

impl Index<usize> for Weights<'_> {
    type Output = f32;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}
