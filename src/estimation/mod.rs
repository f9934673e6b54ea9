//! Block-averaging error estimation for sequentially correlated series.
//!
//! A correlated time series (e.g., a simulation observable) underestimates
//! the uncertainty of its mean when treated as independent samples. Block
//! averaging partitions the series into contiguous blocks and tracks the
//! variance of the block means as blocks grow; once that variance-of-mean
//! estimate plateaus, blocks are effectively independent and the estimate
//! is trustworthy. This module computes the (block size, mean, variance)
//! triples; locating the plateau is left to the caller.

mod error;
mod single;
mod sweep;

pub use error::EstimationError;
pub use single::{BlockEstimate, estimate};
pub use sweep::{BlockSweep, estimate_all};

use serde::{Deserialize, Serialize};

/// Block-size request accepted by [`block_average`].
///
/// `From` conversions cover the common call shapes: a bare `usize` maps to
/// [`Single`](BlockSizes::Single), a `Vec<usize>` or `&[usize]` to
/// [`Many`](BlockSizes::Many), and `None` to [`Auto`](BlockSizes::Auto).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BlockSizes {
    /// Sweep every admissible size, `1..len / 4` exclusive.
    #[default]
    Auto,
    /// One fixed block size.
    Single(usize),
    /// An explicit ordered collection of sizes; duplicates and unsorted
    /// order are preserved.
    Many(Vec<usize>),
}

impl From<usize> for BlockSizes {
    fn from(size: usize) -> Self {
        Self::Single(size)
    }
}

impl From<Vec<usize>> for BlockSizes {
    fn from(sizes: Vec<usize>) -> Self {
        Self::Many(sizes)
    }
}

impl From<&[usize]> for BlockSizes {
    fn from(sizes: &[usize]) -> Self {
        Self::Many(sizes.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for BlockSizes {
    fn from(sizes: [usize; N]) -> Self {
        Self::Many(sizes.to_vec())
    }
}

impl From<Option<usize>> for BlockSizes {
    fn from(size: Option<usize>) -> Self {
        match size {
            Some(n) => Self::Single(n),
            None => Self::Auto,
        }
    }
}

/// Result of [`block_average`]; the shape follows the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BlockAverage {
    Single(BlockEstimate),
    Sweep(BlockSweep),
}

impl BlockAverage {
    pub fn as_single(&self) -> Option<&BlockEstimate> {
        match self {
            Self::Single(est) => Some(est),
            Self::Sweep(_) => None,
        }
    }

    pub fn as_sweep(&self) -> Option<&BlockSweep> {
        match self {
            Self::Sweep(sweep) => Some(sweep),
            Self::Single(_) => None,
        }
    }
}

/// Entry point: routes a block-size request to the matching estimator.
///
/// - [`BlockSizes::Single`] delegates to [`estimate`] and returns
///   [`BlockAverage::Single`].
/// - [`BlockSizes::Many`] delegates to [`estimate_all`] and returns
///   [`BlockAverage::Sweep`].
/// - [`BlockSizes::Auto`] synthesizes the sizes `1..data.len() / 4` and
///   delegates to [`estimate_all`]; the exclusive upper bound guarantees
///   every synthesized size passes the sweep admission check. Series
///   shorter than 8 observations synthesize an empty sweep and fail with
///   [`EstimationError::EmptyBlockSizes`].
///
/// Each call is stateless and leaves `data` untouched.
pub fn block_average(
    data: &[f64],
    sizes: impl Into<BlockSizes>,
) -> Result<BlockAverage, EstimationError> {
    match sizes.into() {
        BlockSizes::Single(size) => Ok(BlockAverage::Single(estimate(data, size)?)),
        BlockSizes::Many(sizes) => Ok(BlockAverage::Sweep(estimate_all(data, &sizes)?)),
        BlockSizes::Auto => {
            let sizes: Vec<usize> = (1..data.len() / 4).collect();
            Ok(BlockAverage::Sweep(estimate_all(data, &sizes)?))
        }
    }
}
