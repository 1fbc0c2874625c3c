use crate::{false_positive_rate, Error, Result};
use std::f64::consts::LN_2;
use std::fmt;

/// One of the three parameters defining a Bloom filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// bit array size
    M,
    /// number of hash functions
    K,
    /// number of inserted elements
    N,
}

impl Axis {
    pub fn symbol(self) -> char {
        match self {
            Axis::M => 'm',
            Axis::K => 'k',
            Axis::N => 'n',
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Axis::M => "bit array size",
            Axis::K => "number of hash functions",
            Axis::N => "number of elements",
        }
    }

    /// Axis label, e.g. `m (bit array size)`.
    pub fn label(self) -> String {
        format!("{} ({})", self.symbol(), self.description())
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Validated Bloom filter parameters: m > 0, k >= 1, n finite and >= 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Params {
    pub(crate) m: u64, // bits
    pub(crate) k: u32, // hash functions
    pub(crate) n: f64, // inserted items, or expected load
}

impl Params {
    pub fn new(m: u64, k: u32, n: f64) -> Result<Self> {
        if m == 0 {
            return Err(Error::InvalidBitCount);
        }
        if k == 0 {
            return Err(Error::InvalidHashCount);
        }
        if !n.is_finite() || n < 0.0 {
            return Err(Error::InvalidItemCount(n));
        }
        Ok(Self { m, k, n })
    }

    /// Value of the given coordinate as a float, for charting.
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::M => self.m as f64,
            Axis::K => f64::from(self.k),
            Axis::N => self.n,
        }
    }

    /// Copy of `self` with one coordinate replaced.
    pub fn with(self, axis: Axis, value: u64) -> Result<Self> {
        match axis {
            Axis::M => Self::new(value, self.k, self.n),
            Axis::K => {
                let k = u32::try_from(value).map_err(|_| Error::ValueOutOfRange { axis: 'k', value })?;
                Self::new(self.m, k, self.n)
            }
            Axis::N => Self::new(self.m, self.k, value as f64),
        }
    }

    pub fn false_positive_rate(&self) -> f64 {
        false_positive_rate(self.m, self.k, self.n)
    }

    /// Integer k minimizing the false positive rate for this m and n.
    ///
    /// The continuous optimum is `(m/n) ln 2`; the rate has a single minimum
    /// in k, so the best integer is its floor or its ceil.
    pub fn optimal_k_num(&self) -> u32 {
        if self.n == 0.0 {
            return 1;
        }
        let best = self.m as f64 / self.n * LN_2;
        let lo = best.floor().max(1.0) as u32;
        let hi = best.ceil().max(1.0) as u32;
        if false_positive_rate(self.m, lo, self.n) <= false_positive_rate(self.m, hi, self.n) {
            lo
        } else {
            hi
        }
    }

    /// `name=value` pairs for every coordinate except `axis`, e.g. `k=5, n=1000`.
    pub fn fixed_label(&self, axis: Axis) -> String {
        [Axis::M, Axis::K, Axis::N]
            .iter()
            .filter(|&&a| a != axis)
            .map(|&a| format!("{}={}", a, self.get(a)))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation() {
        assert!(matches!(Params::new(0, 5, 1000.0), Err(Error::InvalidBitCount)));
        assert!(matches!(Params::new(10000, 0, 1000.0), Err(Error::InvalidHashCount)));
        assert!(matches!(Params::new(10000, 5, -1.0), Err(Error::InvalidItemCount(_))));
        assert!(matches!(Params::new(10000, 5, f64::NAN), Err(Error::InvalidItemCount(_))));
        assert!(matches!(Params::new(10000, 5, f64::INFINITY), Err(Error::InvalidItemCount(_))));
        assert!(Params::new(1, 1, 0.0).is_ok());
    }

    #[test]
    fn with_replaces_one_coordinate() {
        let params = Params::new(10000, 5, 1000.0).unwrap();
        assert_eq!(params.with(Axis::M, 2000).unwrap(), Params::new(2000, 5, 1000.0).unwrap());
        assert_eq!(params.with(Axis::K, 7).unwrap(), Params::new(10000, 7, 1000.0).unwrap());
        assert_eq!(params.with(Axis::N, 300).unwrap(), Params::new(10000, 5, 300.0).unwrap());
        assert!(matches!(params.with(Axis::M, 0), Err(Error::InvalidBitCount)));
        assert!(matches!(
            params.with(Axis::K, u64::from(u32::MAX) + 1),
            Err(Error::ValueOutOfRange { axis: 'k', .. })
        ));
    }

    #[test]
    fn checked_rate_matches_unchecked() {
        let params = Params::new(10000, 5, 1000.0).unwrap();
        assert_eq!(params.false_positive_rate(), false_positive_rate(10000, 5, 1000.0));
    }

    #[test]
    fn labels() {
        let params = Params::new(10000, 5, 1000.0).unwrap();
        assert_eq!(params.fixed_label(Axis::M), "k=5, n=1000");
        assert_eq!(params.fixed_label(Axis::K), "m=10000, n=1000");
        assert_eq!(params.fixed_label(Axis::N), "m=10000, k=5");
        assert_eq!(Axis::K.label(), "k (number of hash functions)");
    }
}
