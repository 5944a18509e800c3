//! Error types for shape validation and warping path traceback.

/// Errors from buffer shape validation and boundary setup.
///
/// The fill kernel itself has no failure path; every variant here is raised
/// before the kernel runs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DtwError {
    /// Returned when a sequence, weight vector, or cost matrix has zero rows.
    #[error("sequence length must be at least 1")]
    EmptySequence,

    /// Returned when `rows * cols` does not fit in `usize`.
    #[error("shape {rows}x{cols} overflows usize")]
    DimensionOverflow {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },

    /// Returned when a flat buffer does not hold exactly the declared number of elements.
    #[error("{buffer} buffer holds {actual} values, expected {expected}")]
    BufferLength {
        /// Which buffer failed the check.
        buffer: &'static str,
        /// Element count implied by the declared shape.
        expected: usize,
        /// Actual slice length.
        actual: usize,
    },

    /// Returned when an owned sequence contains NaN or an infinity.
    #[error("non-finite feature value at row {row}, column {col}")]
    NonFiniteValue {
        /// Row of the first non-finite value.
        row: usize,
        /// Column of the first non-finite value.
        col: usize,
    },

    /// Returned when nested rows passed to [`FeatureSequence`](crate::FeatureSequence) differ in length.
    #[error("row {row} has {actual} features, expected {expected}")]
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        actual: usize,
    },

    /// Returned when the two sequences have different lengths.
    #[error("sequences must have equal length, got {left} and {right}")]
    RowCountMismatch {
        /// Row count of the first sequence.
        left: usize,
        /// Row count of the second sequence.
        right: usize,
    },

    /// Returned when the two sequences have different feature dimensionality.
    #[error("sequences must have equal feature dimensionality, got {left} and {right}")]
    ColumnCountMismatch {
        /// Column count of the first sequence.
        left: usize,
        /// Column count of the second sequence.
        right: usize,
    },

    /// Returned when the weight vector length differs from the sequence length.
    #[error("expected {expected} weights, got {actual}")]
    WeightsLength {
        /// Sequence length.
        expected: usize,
        /// Weight vector length.
        actual: usize,
    },

    /// Returned when the cost matrix dimension differs from the sequence length.
    #[error("cost matrix is {actual}x{actual}, expected {expected}x{expected}")]
    CostMatrixDim {
        /// Sequence length.
        expected: usize,
        /// Cost matrix dimension.
        actual: usize,
    },

    /// Returned when an explicit boundary row or column has the wrong length.
    #[error("boundary {edge} holds {actual} values, expected {expected}")]
    BoundaryLength {
        /// `"first row"` or `"first column"`.
        edge: &'static str,
        /// `dim - 1`.
        expected: usize,
        /// Length supplied.
        actual: usize,
    },
}

/// Errors from warping path traceback.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PathError {
    /// Returned when the final cell holds a non-finite cost, so no path reaches it.
    #[error("final cell is unreachable (accumulated cost {value})")]
    Unreachable {
        /// The value found at `(dim - 1, dim - 1)`.
        value: f32,
    },
}
