//! Parameter sweeps over the false positive rate.
//!
//! A [`Sweep`] holds two of the three Bloom filter parameters fixed and walks
//! the third over a half-open range `[start, stop)` with a fixed step, the way
//! a step-based range generator does. Running it evaluates the rate at every
//! point and yields a [`SweepResult`] ready to be charted.

use crate::{Axis, Error, Params, Result};
use std::ops::Range;
use tracing::debug;

pub const Y_LABEL: &str = "False Positive Rate (P)";

#[derive(Clone, Debug, PartialEq)]
pub struct Sweep {
    axis: Axis,   // varied parameter
    base: Params, // fixed parameters, the varied one is overwritten per point
    range: Range<u64>,
    step: usize,
}

impl Sweep {
    pub fn new(axis: Axis, base: Params, range: Range<u64>, step: u64) -> Result<Self> {
        let step = usize::try_from(step).map_err(|_| Error::InvalidStep)?;
        if step == 0 {
            return Err(Error::InvalidStep);
        }
        Ok(Self { axis, base, range, step })
    }

    /// P vs m: k=5, n=1000, m in 1000..10000 step 100.
    pub fn vs_m() -> Self {
        Self {
            axis: Axis::M,
            base: Params { m: 1000, k: 5, n: 1000.0 },
            range: 1000..10000,
            step: 100,
        }
    }

    /// P vs k: m=10000, n=1000, k in 1..21.
    pub fn vs_k() -> Self {
        Self {
            axis: Axis::K,
            base: Params { m: 10000, k: 1, n: 1000.0 },
            range: 1..21,
            step: 1,
        }
    }

    /// P vs n: m=10000, k=5, n in 100..2000 step 100.
    pub fn vs_n() -> Self {
        Self {
            axis: Axis::N,
            base: Params { m: 10000, k: 5, n: 100.0 },
            range: 100..2000,
            step: 100,
        }
    }

    /// The three sweeps charted by the driver, in drawing order.
    pub fn standard() -> [Sweep; 3] {
        [Self::vs_m(), Self::vs_k(), Self::vs_n()]
    }

    pub fn title(&self) -> String {
        format!("P vs {}", self.axis)
    }

    /// Legend naming the fixed parameters.
    pub fn legend(&self) -> String {
        self.base.fixed_label(self.axis)
    }

    /// File name without extension, e.g. `p_vs_m`.
    pub fn file_stem(&self) -> String {
        format!("p_vs_{}", self.axis)
    }

    pub fn values(&self) -> impl Iterator<Item = u64> {
        self.range.clone().step_by(self.step)
    }

    pub fn run(&self) -> Result<SweepResult> {
        let points = self
            .values()
            .map(|value| {
                let params = self.base.with(self.axis, value)?;
                Ok((params.get(self.axis), params.false_positive_rate()))
            })
            .collect::<Result<Vec<_>>>()?;
        debug!(sweep = %self.title(), points = points.len(), "evaluated sweep");

        Ok(SweepResult {
            title: self.title(),
            x_label: self.axis.label(),
            legend: self.legend(),
            file_stem: self.file_stem(),
            points,
        })
    }
}

/// Ordered (x, P) pairs of one sweep, with the labels to chart them.
#[derive(Clone, Debug, PartialEq)]
pub struct SweepResult {
    title: String,
    x_label: String,
    legend: String,
    file_stem: String,
    points: Vec<(f64, f64)>,
}

impl SweepResult {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    pub fn y_label(&self) -> &str {
        Y_LABEL
    }

    pub fn legend(&self) -> &str {
        &self.legend
    }

    pub fn file_stem(&self) -> &str {
        &self.file_stem
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Point with the lowest rate; the first one on ties.
    pub fn min_point(&self) -> Option<(f64, f64)> {
        self.points.iter().copied().min_by(|a, b| a.1.total_cmp(&b.1))
    }

    /// Point with the highest rate; the last one on ties.
    pub fn max_point(&self) -> Option<(f64, f64)> {
        self.points.iter().copied().max_by(|a, b| a.1.total_cmp(&b.1))
    }
}
