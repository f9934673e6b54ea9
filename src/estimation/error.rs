use thiserror::Error;

/// Failures raised by the block-averaging estimators.
///
/// Every failure is reported before any partial output is produced; the
/// computation is deterministic, so retrying the same inputs fails the
/// same way.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EstimationError {
    #[error("block size {block_size} cannot form a complete block from {len} observations")]
    InvalidBlockSize { block_size: usize, len: usize },

    #[error(
        "block size {block_size} forms a single block from {len} observations; \
         the variance of the mean is undefined"
    )]
    DegenerateVariance { block_size: usize, len: usize },

    #[error(
        "largest requested block size {max} exceeds {limit}; \
         {len} observations would form fewer than 4 blocks"
    )]
    BlockSizeTooLarge { max: usize, limit: usize, len: usize },

    #[error("no block sizes requested")]
    EmptyBlockSizes,
}
