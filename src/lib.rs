pub mod estimation;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use estimation::{
    BlockAverage, BlockEstimate, BlockSizes, BlockSweep, EstimationError, block_average, estimate,
    estimate_all,
};
