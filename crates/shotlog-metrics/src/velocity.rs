//! Muzzle-velocity summary statistics.
//!
//! Reduces a set of chronograph readings to the summary a shooter compares
//! across ammunition lots: average, high/low, extreme spread, and standard
//! deviation.

use serde::{Deserialize, Serialize};
use shotlog_core::Real;

/// Summary statistics for a set of velocity readings.
///
/// Every numeric field is `None` when no readings were supplied: an
/// average of zero samples is undefined, not zero. A single reading has a
/// defined average/high/low and zero spread and deviation.
///
/// Values are rounded to 2 decimal places; intermediate arithmetic runs at
/// full precision so rounding never compounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VelocityStatistics {
    /// Number of readings.
    pub count: usize,
    /// Arithmetic mean of the readings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average: Option<Real>,
    /// Fastest reading.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<Real>,
    /// Slowest reading.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<Real>,
    /// `high - low`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extreme_spread: Option<Real>,
    /// Population standard deviation of the readings.
    ///
    /// The chronograph string is the full observed population, so the
    /// sum of squared deviations is divided by `n` rather than `n - 1`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_deviation: Option<Real>,
}

impl VelocityStatistics {
    /// The empty sentinel: no readings, no derived values.
    fn empty() -> Self {
        Self {
            count: 0,
            average: None,
            high: None,
            low: None,
            extreme_spread: None,
            standard_deviation: None,
        }
    }
}

/// Compute summary statistics for a set of velocity readings.
///
/// Reading order never influences a result.
///
/// # Example
///
/// ```
/// use shotlog_metrics::compute_velocity_stats;
///
/// let stats = compute_velocity_stats(&[2800.0, 2810.0, 2795.0, 2805.0, 2790.0]);
/// assert_eq!(stats.count, 5);
/// assert_eq!(stats.average, Some(2800.0));
/// assert_eq!(stats.extreme_spread, Some(20.0));
/// ```
pub fn compute_velocity_stats(velocities: &[Real]) -> VelocityStatistics {
    if velocities.is_empty() {
        return VelocityStatistics::empty();
    }

    let n = velocities.len() as Real;
    let sum: Real = velocities.iter().sum();
    let average = sum / n;
    let high = velocities.iter().copied().fold(Real::NEG_INFINITY, Real::max);
    let low = velocities.iter().copied().fold(Real::INFINITY, Real::min);
    let sum_sq: Real = velocities
        .iter()
        .map(|v| (v - average) * (v - average))
        .sum();
    let std_dev = (sum_sq / n).sqrt();

    VelocityStatistics {
        count: velocities.len(),
        average: Some(round2(average)),
        high: Some(round2(high)),
        low: Some(round2(low)),
        extreme_spread: Some(round2(high - low)),
        standard_deviation: Some(round2(std_dev)),
    }
}

/// Round to 2 decimal places. Applied only at the computation boundary.
fn round2(value: Real) -> Real {
    (value * 100.0).round() / 100.0
}
