//! Group measurement types.
//!
//! This module provides the canonical data structure for one measured shot
//! group: bullet-hole centres on the target plane plus the projectile
//! diameter and a record of how the holes were measured.

use crate::{Pt2, Real};
use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

/// Largest accepted hole offset from the point of aim, in inches.
///
/// Matches the target-entry range constraint of the surrounding application;
/// the metric engines themselves accept any finite coordinates.
pub const MAX_HOLE_OFFSET_IN: Real = 10.0;

/// How the hole coordinates of a group were obtained.
///
/// Closed set: groups are either entered by hand or extracted from a target
/// photo by one of the image-analysis calibration paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CalibrationMethod {
    /// Coordinates typed in by the shooter.
    #[default]
    Manual,
    /// Scaled against a fiducial marker of known size.
    Fiducial,
    /// Scaled against a printed QR code on the target.
    QrCode,
    /// Scaled against a detected target grid.
    GridDetect,
}

/// A single measured shot group.
///
/// Holes are 2D points in inches relative to the point of aim at the origin
/// (`x` positive right, `y` positive above). Hole order carries no meaning;
/// every derived metric is order-independent.
///
/// # Example
///
/// ```
/// use shotlog_core::{CalibrationMethod, GroupMeasurement, Pt2};
///
/// let group = GroupMeasurement::new(
///     vec![Pt2::new(0.3, -0.2), Pt2::new(-0.1, 0.4), Pt2::new(0.2, 0.1)],
///     0.224,
/// )
/// .unwrap();
///
/// assert_eq!(group.len(), 3);
/// assert_eq!(group.calibration_method, CalibrationMethod::Manual);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMeasurement {
    /// Bullet-hole centres relative to the point of aim, in inches.
    pub holes: Vec<Pt2>,
    /// Projectile diameter in inches.
    pub bullet_diameter: Real,
    /// How the hole coordinates were measured.
    #[serde(default)]
    pub calibration_method: CalibrationMethod,
    /// Measurement confidence in `[0, 1]`, when the calibration path
    /// reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurement_confidence: Option<Real>,
}

impl GroupMeasurement {
    /// Construct a manually-measured group.
    ///
    /// # Errors
    ///
    /// Returns an error if any coordinate is non-finite or outside the
    /// target window, or if the bullet diameter is non-finite or negative.
    pub fn new(holes: Vec<Pt2>, bullet_diameter: Real) -> Result<Self> {
        Self::with_calibration(holes, bullet_diameter, CalibrationMethod::Manual, None)
    }

    /// Construct a group with an explicit calibration record.
    ///
    /// # Errors
    ///
    /// Returns an error if any coordinate is non-finite or outside the
    /// target window, if the bullet diameter is non-finite or negative, or
    /// if the confidence is non-finite or outside `[0, 1]`.
    pub fn with_calibration(
        holes: Vec<Pt2>,
        bullet_diameter: Real,
        calibration_method: CalibrationMethod,
        measurement_confidence: Option<Real>,
    ) -> Result<Self> {
        for (idx, hole) in holes.iter().enumerate() {
            ensure!(
                hole.x.is_finite() && hole.y.is_finite(),
                "hole {} has non-finite coordinates ({}, {})",
                idx,
                hole.x,
                hole.y
            );
            ensure!(
                hole.x.abs() <= MAX_HOLE_OFFSET_IN && hole.y.abs() <= MAX_HOLE_OFFSET_IN,
                "hole {} at ({}, {}) is outside the ±{} in target window",
                idx,
                hole.x,
                hole.y,
                MAX_HOLE_OFFSET_IN
            );
        }
        ensure!(
            bullet_diameter.is_finite() && bullet_diameter >= 0.0,
            "bullet diameter must be finite and non-negative, got {}",
            bullet_diameter
        );
        if let Some(c) = measurement_confidence {
            ensure!(
                c.is_finite() && (0.0..=1.0).contains(&c),
                "measurement confidence must be within [0, 1], got {}",
                c
            );
        }
        Ok(Self {
            holes,
            bullet_diameter,
            calibration_method,
            measurement_confidence,
        })
    }

    /// Number of holes in the group.
    #[inline]
    pub fn len(&self) -> usize {
        self.holes.len()
    }

    /// Returns true if the group has no holes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.holes.is_empty()
    }

    /// Iterate over the hole positions.
    pub fn iter(&self) -> impl Iterator<Item = &Pt2> {
        self.holes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_creation() {
        let group = GroupMeasurement::new(
            vec![Pt2::new(0.5, -0.3), Pt2::new(-0.2, 0.1)],
            0.308,
        )
        .unwrap();

        assert_eq!(group.len(), 2);
        assert!(!group.is_empty());
        assert_eq!(group.calibration_method, CalibrationMethod::Manual);
        assert!(group.measurement_confidence.is_none());
    }

    #[test]
    fn empty_group_is_valid() {
        // Zero holes is the "insufficient data" state, not a malformed DTO.
        let group = GroupMeasurement::new(vec![], 0.224).unwrap();
        assert!(group.is_empty());
    }

    #[test]
    fn rejects_non_finite_coordinates() {
        assert!(GroupMeasurement::new(vec![Pt2::new(f64::NAN, 0.0)], 0.224).is_err());
        assert!(GroupMeasurement::new(vec![Pt2::new(0.0, f64::INFINITY)], 0.224).is_err());
    }

    #[test]
    fn rejects_holes_outside_target_window() {
        assert!(GroupMeasurement::new(vec![Pt2::new(10.5, 0.0)], 0.224).is_err());
        assert!(GroupMeasurement::new(vec![Pt2::new(0.0, -12.0)], 0.224).is_err());
    }

    #[test]
    fn rejects_invalid_diameter() {
        assert!(GroupMeasurement::new(vec![Pt2::new(0.0, 0.0)], -0.1).is_err());
        assert!(GroupMeasurement::new(vec![Pt2::new(0.0, 0.0)], f64::NAN).is_err());
    }

    #[test]
    fn rejects_out_of_range_confidence() {
        let holes = vec![Pt2::new(0.0, 0.0)];
        assert!(GroupMeasurement::with_calibration(
            holes.clone(),
            0.224,
            CalibrationMethod::QrCode,
            Some(1.2)
        )
        .is_err());
        assert!(GroupMeasurement::with_calibration(
            holes,
            0.224,
            CalibrationMethod::QrCode,
            Some(0.92)
        )
        .is_ok());
    }

    #[test]
    fn calibration_method_serializes_camel_case() {
        let json = serde_json::to_string(&CalibrationMethod::GridDetect).unwrap();
        assert_eq!(json, "\"gridDetect\"");

        let restored: CalibrationMethod = serde_json::from_str("\"qrCode\"").unwrap();
        assert_eq!(restored, CalibrationMethod::QrCode);
    }

    #[test]
    fn group_serde_roundtrip() {
        let group = GroupMeasurement::with_calibration(
            vec![Pt2::new(0.5, -0.3)],
            0.224,
            CalibrationMethod::Fiducial,
            Some(0.87),
        )
        .unwrap();

        let json = serde_json::to_string(&group).unwrap();
        let restored: GroupMeasurement = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.len(), group.len());
        assert_eq!(restored.calibration_method, CalibrationMethod::Fiducial);
    }
}
