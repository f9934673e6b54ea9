use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generates a sequentially correlated series from a first-order
/// autoregressive process: `x[t] = phi * x[t-1] + noise`, with noise
/// drawn uniformly from `[-0.5, 0.5)`.
///
/// `phi` close to 1 yields strong positive correlation, the regime
/// block averaging exists to handle; `phi = 0` yields white noise.
/// The same seed always reproduces the same series.
pub fn ar1_series(len: usize, phi: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut series = Vec::with_capacity(len);
    let mut prev = 0.0;
    for _ in 0..len {
        prev = phi * prev + rng.random_range(-0.5..0.5);
        series.push(prev);
    }
    series
}
