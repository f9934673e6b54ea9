use serde::{Deserialize, Serialize};

use crate::estimation::error::EstimationError;

/// Mean and variance-of-the-mean estimate for one block size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockEstimate {
    /// Mean of the block means; estimates the overall series mean.
    pub mean: f64,
    /// Estimated variance of the sampling distribution of the mean,
    /// obtained by treating block means as independent samples.
    pub variance_of_mean: f64,
}

/// Blocks `data` into contiguous, non-overlapping runs of `block_size`
/// observations and estimates the series mean together with the variance
/// of that mean.
///
/// Trailing observations that do not fill a complete block are discarded.
/// The variance of the mean is the population variance of the block means
/// (denominator `num_blocks`) divided by `num_blocks - 1`, the standard
/// block-averaging error estimator.
///
/// # Errors
///
/// - [`EstimationError::InvalidBlockSize`] when `block_size` is zero or
///   larger than the series, so no complete block forms.
/// - [`EstimationError::DegenerateVariance`] when exactly one block forms
///   and the divisor `num_blocks - 1` would vanish.
pub fn estimate(data: &[f64], block_size: usize) -> Result<BlockEstimate, EstimationError> {
    let len = data.len();
    if block_size == 0 || block_size > len {
        return Err(EstimationError::InvalidBlockSize { block_size, len });
    }

    let num_blocks = len / block_size;
    if num_blocks < 2 {
        return Err(EstimationError::DegenerateVariance { block_size, len });
    }

    let inv_size = 1.0 / block_size as f64;
    let mut block_means = Vec::with_capacity(num_blocks);
    for block in data.chunks_exact(block_size) {
        block_means.push(block.iter().sum::<f64>() * inv_size);
    }

    let n = num_blocks as f64;
    let mean = block_means.iter().sum::<f64>() / n;
    let sum_sq_dev: f64 = block_means.iter().map(|m| (m - mean) * (m - mean)).sum();
    let variance_of_mean = sum_sq_dev / n / (n - 1.0);

    Ok(BlockEstimate {
        mean,
        variance_of_mean,
    })
}
