use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("bit array size m must be positive")]
    InvalidBitCount,
    #[error("hash function count k must be at least 1")]
    InvalidHashCount,
    #[error("element count n must be finite and non-negative, got {0}")]
    InvalidItemCount(f64),
    #[error("false positive rate must be in ]0.0, 1.0[, got {0}")]
    InvalidFpRate(f64),
    #[error("sweep step must be positive")]
    InvalidStep,
    #[error("swept value {value} does not fit parameter {axis}")]
    ValueOutOfRange { axis: char, value: u64 },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("plot error: {0}")]
    Plot(String),
}
