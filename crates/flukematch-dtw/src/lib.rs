//! Banded, index-weighted Dynamic Time Warping cost matrices.
//!
//! Pure math library, zero I/O. Fills the accumulated-cost matrix between two
//! equal-length sequences of feature vectors, using a weighted Euclidean
//! local cost `w[i] * w[j] * ||a[i] - b[j]||` and a band around the main
//! diagonal. Boundary cells are an explicit input ([`Boundary`]); the fill
//! never writes them. Distance read-out and warping path traceback are
//! provided on top of the filled matrix.

mod boundary;
mod cost;
mod error;
mod local;
mod matrix;
mod path;
mod sequence;
mod wdtw;
mod window;

pub use boundary::Boundary;
pub use cost::DtwCost;
pub use error::{DtwError, PathError};
pub use local::{euclidean, weighted_euclidean_cost};
pub use matrix::{CostMatrix, CostMatrixViewMut};
pub use path::{WarpingPath, WarpingStep};
pub use sequence::{FeatureSequence, SequenceView, Weights};
pub use wdtw::{WeightedDtw, weighted_euclidean};
pub use window::BandWindow;
