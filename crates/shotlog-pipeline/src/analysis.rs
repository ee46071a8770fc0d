//! Analysis entry points.

use log::debug;
use shotlog_core::{inches_to_mils, inches_to_moa, GroupMeasurement, Real, MAX_HOLE_OFFSET_IN};
use shotlog_metrics::{compute_dispersion, compute_velocity_stats, VelocityStatistics};

use crate::types::{AnalysisError, GroupAnalysisInput, GroupAnalysisReport, VelocityInput};

/// Validate a group request, run the dispersion engine, and attach angular
/// display values at the logged distance.
///
/// # Errors
///
/// Returns an [`AnalysisError`] when a coordinate is non-finite or outside
/// the target window, or when the diameter, confidence, or distance is out
/// of range. Too-few-holes groups are not errors; their report simply has
/// no derived metrics.
pub fn analyze_group(input: &GroupAnalysisInput) -> Result<GroupAnalysisReport, AnalysisError> {
    for (index, hole) in input.holes.iter().enumerate() {
        if !hole.x.is_finite() || !hole.y.is_finite() {
            return Err(AnalysisError::NonFiniteHole {
                index,
                x: hole.x,
                y: hole.y,
            });
        }
        if hole.x.abs() > MAX_HOLE_OFFSET_IN || hole.y.abs() > MAX_HOLE_OFFSET_IN {
            return Err(AnalysisError::HoleOutsideWindow {
                index,
                x: hole.x,
                y: hole.y,
                limit: MAX_HOLE_OFFSET_IN,
            });
        }
    }
    if !input.bullet_diameter.is_finite() || input.bullet_diameter < 0.0 {
        return Err(AnalysisError::InvalidDiameter(input.bullet_diameter));
    }
    if let Some(c) = input.measurement_confidence {
        if !c.is_finite() || !(0.0..=1.0).contains(&c) {
            return Err(AnalysisError::InvalidConfidence(c));
        }
    }
    if let Some(d) = input.distance_yards {
        if !d.is_finite() || d < 0.0 {
            return Err(AnalysisError::InvalidDistance(d));
        }
    }

    debug!(
        "analyzing group: {} holes, {:?} at {:?} yd",
        input.holes.len(),
        input.calibration_method,
        input.distance_yards
    );

    // Validation above covers everything GroupMeasurement checks.
    let group = GroupMeasurement {
        holes: input.holes.clone(),
        bullet_diameter: input.bullet_diameter,
        calibration_method: input.calibration_method,
        measurement_confidence: input.measurement_confidence,
    };
    let metrics = compute_dispersion(&group);

    let angular_distance = input.distance_yards.filter(|d| *d > 0.0);
    let at = |inches: Option<Real>, convert: fn(Real, Real) -> Real| {
        angular_distance.and_then(|d| inches.map(|v| convert(v, d)))
    };

    Ok(GroupAnalysisReport {
        extreme_spread_moa: at(metrics.extreme_spread_ctc, inches_to_moa),
        extreme_spread_mils: at(metrics.extreme_spread_ctc, inches_to_mils),
        mean_radius_moa: at(metrics.mean_radius, inches_to_moa),
        cep50_moa: at(metrics.cep50, inches_to_moa),
        distance_yards: input.distance_yards,
        metrics,
    })
}

/// Validate a chronograph string and run the velocity engine.
///
/// # Errors
///
/// Returns an [`AnalysisError`] when any reading is non-finite. An empty
/// string is not an error; the statistics report `count == 0` with every
/// derived value absent.
pub fn analyze_velocities(input: &VelocityInput) -> Result<VelocityStatistics, AnalysisError> {
    if let Some(index) = input.velocities.iter().position(|v| !v.is_finite()) {
        return Err(AnalysisError::NonFiniteVelocity { index });
    }

    debug!("analyzing velocity string of {} readings", input.velocities.len());

    Ok(compute_velocity_stats(&input.velocities))
}
