use serde::{Deserialize, Serialize};

use crate::estimation::error::EstimationError;
use crate::estimation::single::estimate;

/// Results of a sweep over several block sizes.
///
/// The three vectors are parallel: index `i` of `means` and
/// `variances_of_mean` refers to `block_sizes[i]`. The sizes are echoed
/// back in request order, duplicates included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockSweep {
    pub block_sizes: Vec<usize>,
    pub means: Vec<f64>,
    pub variances_of_mean: Vec<f64>,
}

impl BlockSweep {
    /// Number of block sizes in the sweep.
    #[inline]
    pub fn len(&self) -> usize {
        self.block_sizes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.block_sizes.is_empty()
    }

    /// Iterates `(block_size, mean, variance_of_mean)` triples in
    /// request order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64, f64)> + '_ {
        self.block_sizes
            .iter()
            .zip(&self.means)
            .zip(&self.variances_of_mean)
            .map(|((&size, &mean), &var)| (size, mean, var))
    }
}

/// Runs the single-size estimator once per entry of `block_sizes`,
/// assembling the results into parallel vectors.
///
/// Admission is all-or-nothing: the request is rejected before any
/// computation when the largest size exceeds `len / 4`, i.e. when it
/// would form fewer than the 4 blocks needed for a non-degenerate
/// variance estimate.
///
/// # Errors
///
/// - [`EstimationError::EmptyBlockSizes`] when no sizes are requested.
/// - [`EstimationError::BlockSizeTooLarge`] when the largest size fails
///   the `len / 4` admission check.
/// - [`EstimationError::InvalidBlockSize`] when a requested size is zero.
pub fn estimate_all(data: &[f64], block_sizes: &[usize]) -> Result<BlockSweep, EstimationError> {
    let len = data.len();
    let Some(&max) = block_sizes.iter().max() else {
        return Err(EstimationError::EmptyBlockSizes);
    };

    let limit = len / 4;
    if max > limit {
        return Err(EstimationError::BlockSizeTooLarge { max, limit, len });
    }
    if block_sizes.contains(&0) {
        return Err(EstimationError::InvalidBlockSize { block_size: 0, len });
    }

    let mut means = Vec::with_capacity(block_sizes.len());
    let mut variances_of_mean = Vec::with_capacity(block_sizes.len());
    for &size in block_sizes {
        let est = estimate(data, size)?;
        means.push(est.mean);
        variances_of_mean.push(est.variance_of_mean);
    }

    Ok(BlockSweep {
        block_sizes: block_sizes.to_vec(),
        means,
        variances_of_mean,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    fn one_to_eight() -> Vec<f64> {
        (1..=8).map(f64::from).collect()
    }

    #[test]
    fn sweep_agrees_with_single_path() {
        let data: Vec<f64> = (0..40).map(|i| (i as f64).sin()).collect();
        let sizes = [1, 2, 5, 10];
        let sweep = estimate_all(&data, &sizes).unwrap();
        assert_eq!(sweep.len(), sizes.len());
        for (i, &size) in sizes.iter().enumerate() {
            let single = estimate(&data, size).unwrap();
            assert!((sweep.means[i] - single.mean).abs() < TOL);
            assert!((sweep.variances_of_mean[i] - single.variance_of_mean).abs() < TOL);
        }
    }

    #[test]
    fn echoes_sizes_in_request_order_with_duplicates() {
        let data: Vec<f64> = (0..32).map(f64::from).collect();
        let sizes = [4, 1, 4, 2];
        let sweep = estimate_all(&data, &sizes).unwrap();
        assert_eq!(sweep.block_sizes, sizes);
        assert!((sweep.means[0] - sweep.means[2]).abs() < TOL);
        assert!((sweep.variances_of_mean[0] - sweep.variances_of_mean[2]).abs() < TOL);
    }

    #[test]
    fn rejects_when_largest_size_passes_quarter_of_series() {
        // floor(8 / 4) = 2, so size 3 fails even though 1 and 2 are fine.
        let err = estimate_all(&one_to_eight(), &[1, 2, 3]).unwrap_err();
        assert_eq!(
            err,
            EstimationError::BlockSizeTooLarge {
                max: 3,
                limit: 2,
                len: 8
            }
        );
    }

    #[test]
    fn rejects_empty_request() {
        let err = estimate_all(&one_to_eight(), &[]).unwrap_err();
        assert_eq!(err, EstimationError::EmptyBlockSizes);
    }

    #[test]
    fn rejects_zero_size_before_computing() {
        let data: Vec<f64> = (0..32).map(f64::from).collect();
        let err = estimate_all(&data, &[1, 0, 2]).unwrap_err();
        assert_eq!(
            err,
            EstimationError::InvalidBlockSize {
                block_size: 0,
                len: 32
            }
        );
    }

    #[test]
    fn iter_yields_parallel_triples() {
        let data: Vec<f64> = (0..32).map(f64::from).collect();
        let sweep = estimate_all(&data, &[2, 8]).unwrap();
        let triples: Vec<_> = sweep.iter().collect();
        assert_eq!(triples.len(), 2);
        assert_eq!(triples[0].0, 2);
        assert_eq!(triples[1].0, 8);
        assert!((triples[0].1 - sweep.means[0]).abs() < TOL);
        assert!((triples[1].2 - sweep.variances_of_mean[1]).abs() < TOL);
    }
}
