//! Input and report types for group and velocity analysis.

use serde::{Deserialize, Serialize};
use shotlog_core::{CalibrationMethod, Pt2, Real};
use shotlog_metrics::GroupDispersionMetrics;
use thiserror::Error;

/// One group analysis request, as submitted by the session service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupAnalysisInput {
    /// Bullet-hole centres relative to the point of aim, in inches.
    pub holes: Vec<Pt2>,
    /// Projectile diameter in inches.
    pub bullet_diameter: Real,
    /// How the hole coordinates were measured.
    #[serde(default)]
    pub calibration_method: CalibrationMethod,
    /// Measurement confidence in `[0, 1]`, if the calibration path reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurement_confidence: Option<Real>,
    /// Logged shooting distance in yards, if any. Angular display values
    /// are attached only when this is present and positive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_yards: Option<Real>,
}

/// Dispersion metrics plus angular display values at the logged distance.
///
/// Angular fields convert the center-to-center metrics and are absent
/// whenever the underlying metric is absent or no positive distance was
/// logged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupAnalysisReport {
    /// The computed dispersion metrics.
    pub metrics: GroupDispersionMetrics,
    /// Distance the angular values were computed at, in yards.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_yards: Option<Real>,
    /// Extreme spread (center-to-center) in MOA.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extreme_spread_moa: Option<Real>,
    /// Extreme spread (center-to-center) in MIL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extreme_spread_mils: Option<Real>,
    /// Mean radius in MOA.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_radius_moa: Option<Real>,
    /// CEP50 in MOA.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cep50_moa: Option<Real>,
}

/// One velocity analysis request: a chronograph string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VelocityInput {
    /// Velocity readings, in the chronograph's native unit.
    pub velocities: Vec<Real>,
}

/// Errors raised while validating analysis input.
///
/// Degenerate-but-well-formed input (an empty group, a single reading) is
/// not an error; the engines report it as absent metrics.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("hole {index} has non-finite coordinates ({x}, {y})")]
    NonFiniteHole { index: usize, x: Real, y: Real },
    #[error("hole {index} at ({x}, {y}) is outside the ±{limit} in target window")]
    HoleOutsideWindow {
        index: usize,
        x: Real,
        y: Real,
        limit: Real,
    },
    #[error("bullet diameter must be finite and non-negative, got {0}")]
    InvalidDiameter(Real),
    #[error("measurement confidence must be within [0, 1], got {0}")]
    InvalidConfidence(Real),
    #[error("distance must be finite and non-negative, got {0} yd")]
    InvalidDistance(Real),
    #[error("velocity reading {index} is non-finite")]
    NonFiniteVelocity { index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_defaults_apply() {
        let input: GroupAnalysisInput = serde_json::from_str(
            r#"{"holes": [], "bulletDiameter": 0.224}"#,
        )
        .unwrap();

        assert_eq!(input.calibration_method, CalibrationMethod::Manual);
        assert!(input.measurement_confidence.is_none());
        assert!(input.distance_yards.is_none());
    }

    #[test]
    fn error_messages_name_the_offending_value() {
        let err = AnalysisError::InvalidDistance(-100.0);
        assert_eq!(
            err.to_string(),
            "distance must be finite and non-negative, got -100 yd"
        );
    }
}
