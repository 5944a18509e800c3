//! Local (per-cell) costs.

/// Euclidean distance between two feature vectors of equal length.
///
/// Single pass over the squared differences followed by one square root.
/// Two empty vectors are at distance zero.
#[must_use]
#[inline]
pub fn euclidean(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f32>()
        .sqrt()
}

/// Local cost of pairing time step `i` of one sequence with time step `j` of the other:
/// `w_i * w_j * euclidean(a_i, b_j)`.
///
/// The weights are a pointwise product over absolute indices, not a penalty on
/// the warping offset `|i - j|`.
#[must_use]
#[inline]
pub fn weighted_euclidean_cost(a: &[f32], b: &[f32], w_i: f32, w_j: f32) -> f32 {
    w_i * w_j * euclidean(a, b)
}
