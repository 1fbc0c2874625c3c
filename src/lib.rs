use std::f64::consts::LN_2;

mod config;
mod error;
mod params;
pub mod plot;
pub mod sweep;

pub use config::{ImageFormat, PlotConfig};
pub use error::{Error, Result};
pub use params::{Axis, Params};
pub use sweep::{Sweep, SweepResult};

const LN_2_2: f64 = LN_2 * LN_2;

/// Theoretical false positive rate of a Bloom filter with `m` bits and `k`
/// hash functions after `n` insertions: `(1 - e^(-k*n/m))^k`.
///
/// Inputs are not validated. `m == 0` follows IEEE-754: the rate is 1.0 for
/// `n > 0` and NaN for `n == 0`. Use [`Params::new`] for a checked version.
pub fn false_positive_rate(m: u64, k: u32, n: f64) -> f64 {
    let kf = f64::from(k);
    // (1 - e^x)^k as exp(k * ln_1p(-e^x)), exact for fills near 1 at any k
    let empty = (-kf * n / m as f64).exp();
    (kf * (-empty).ln_1p()).exp()
}

// Calculates the optimal Bloom filter size, m, based on the number of
// items and the desired rate of false positives.
pub fn compute_m_num(items_count: usize, fp_rate: f64) -> Result<usize> {
    if items_count == 0 {
        return Err(Error::InvalidItemCount(0.0));
    }
    check_fp_rate(fp_rate)?;
    Ok(((items_count as f64) * fp_rate.ln().abs() / LN_2_2).ceil() as usize)
}

// Calculates the optimal number of hash functions to use for a Bloom
// filter based on the desired rate of false positives.
pub fn compute_k_num(fp_rate: f64) -> Result<u32> {
    check_fp_rate(fp_rate)?;
    Ok((fp_rate.log2().abs().ceil() as u32).max(1))
}

/// Integer number of hash functions minimizing the false positive rate of a
/// filter with `m` bits holding `n` items.
pub fn optimal_k_num(m: u64, n: f64) -> Result<u32> {
    Params::new(m, 1, n).map(|params| params.optimal_k_num())
}

fn check_fp_rate(fp_rate: f64) -> Result<()> {
    if fp_rate > 0.0 && fp_rate < 1.0 {
        Ok(())
    } else {
        Err(Error::InvalidFpRate(fp_rate))
    }
}
