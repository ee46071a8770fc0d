//! Group dispersion metrics.
//!
//! Turns a measured shot group into the dispersion report shooters use to
//! judge rifle/ammunition performance: extreme spread, coordinate ranges,
//! mean radius, deviation statistics, CEP50, and point-of-impact bias.
//!
//! The computation is a pure function of the group: no state, no side
//! effects, and hole order never influences a result.

use serde::{Deserialize, Serialize};
use shotlog_core::{distance, CalibrationMethod, GroupMeasurement, Pt2, Real};

/// Dispersion metrics for one shot group.
///
/// Every derived field is `None` when the group has fewer than two holes;
/// a single hole has no spread. Center-to-center (`ctc`) values measure
/// between hole centres; edge-to-edge (`ete`) values add the bullet
/// diameter to account for the projectile's own width on both ends of the
/// measured span.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupDispersionMetrics {
    /// Largest center-to-center distance between any two holes (in).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extreme_spread_ctc: Option<Real>,
    /// Largest edge-to-edge distance between any two holes (in).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extreme_spread_ete: Option<Real>,
    /// Horizontal range of hole centres (in).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_spread_ctc: Option<Real>,
    /// Horizontal range plus bullet diameter (in).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_spread_ete: Option<Real>,
    /// Vertical range of hole centres (in).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_spread_ctc: Option<Real>,
    /// Vertical range plus bullet diameter (in).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_spread_ete: Option<Real>,
    /// Mean distance of holes from the group centroid (in).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_radius: Option<Real>,
    /// Population standard deviation of distance-from-centroid (in).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radial_std_dev: Option<Real>,
    /// Population standard deviation of horizontal offsets from centroid (in).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_std_dev: Option<Real>,
    /// Population standard deviation of vertical offsets from centroid (in).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_std_dev: Option<Real>,
    /// Radius of the smallest centroid-centred circle enclosing at least
    /// half the holes (in).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cep50: Option<Real>,
    /// Signed horizontal centroid offset from the point of aim (in).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poi_offset_x: Option<Real>,
    /// Signed vertical centroid offset from the point of aim (in).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poi_offset_y: Option<Real>,
    /// Projectile diameter used for the edge-to-edge values (in).
    pub bullet_diameter: Real,
    /// How the hole coordinates were measured.
    pub calibration_method: CalibrationMethod,
    /// Measurement confidence carried over from the group, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_confidence: Option<Real>,
}

impl GroupDispersionMetrics {
    /// The "insufficient data" state: only the measurement record is kept.
    fn insufficient(group: &GroupMeasurement) -> Self {
        Self {
            extreme_spread_ctc: None,
            extreme_spread_ete: None,
            horizontal_spread_ctc: None,
            horizontal_spread_ete: None,
            vertical_spread_ctc: None,
            vertical_spread_ete: None,
            mean_radius: None,
            radial_std_dev: None,
            horizontal_std_dev: None,
            vertical_std_dev: None,
            cep50: None,
            poi_offset_x: None,
            poi_offset_y: None,
            bullet_diameter: group.bullet_diameter,
            calibration_method: group.calibration_method,
            measurement_confidence: group.measurement_confidence,
        }
    }

    /// Returns true if the group was too small for any derived metric.
    pub fn is_insufficient(&self) -> bool {
        self.extreme_spread_ctc.is_none()
    }
}

/// Compute the full dispersion report for a group.
///
/// Groups with fewer than two holes yield a report with every derived field
/// absent; this is the defined insufficient-data state, not an error.
///
/// # Example
///
/// ```
/// use shotlog_core::{GroupMeasurement, Pt2};
/// use shotlog_metrics::compute_dispersion;
///
/// let group = GroupMeasurement::new(
///     vec![Pt2::new(0.0, 0.0), Pt2::new(1.0, 0.0), Pt2::new(0.5, 0.8)],
///     0.224,
/// )
/// .unwrap();
/// let metrics = compute_dispersion(&group);
///
/// let es = metrics.extreme_spread_ctc.unwrap();
/// assert!((es - 1.0).abs() < 1e-12);
/// ```
pub fn compute_dispersion(group: &GroupMeasurement) -> GroupDispersionMetrics {
    let n = group.len();
    if n < 2 {
        return GroupDispersionMetrics::insufficient(group);
    }

    let holes = &group.holes;
    let centroid = centroid(holes);

    let es_ctc = extreme_spread(holes);

    let (min_x, max_x, min_y, max_y) = bounds(holes);
    let h_ctc = max_x - min_x;
    let v_ctc = max_y - min_y;

    let radii: Vec<Real> = holes.iter().map(|h| distance(h, &centroid)).collect();
    let mean_radius = radii.iter().sum::<Real>() / n as Real;
    let radial_sd = population_std_dev(&radii, mean_radius);

    let mean_x = centroid.x;
    let mean_y = centroid.y;
    let xs: Vec<Real> = holes.iter().map(|h| h.x).collect();
    let ys: Vec<Real> = holes.iter().map(|h| h.y).collect();
    let h_sd = population_std_dev(&xs, mean_x);
    let v_sd = population_std_dev(&ys, mean_y);

    let cep50 = cep50(&radii);

    let d = group.bullet_diameter;
    GroupDispersionMetrics {
        extreme_spread_ctc: Some(es_ctc),
        extreme_spread_ete: Some(es_ctc + d),
        horizontal_spread_ctc: Some(h_ctc),
        horizontal_spread_ete: Some(h_ctc + d),
        vertical_spread_ctc: Some(v_ctc),
        vertical_spread_ete: Some(v_ctc + d),
        mean_radius: Some(mean_radius),
        radial_std_dev: Some(radial_sd),
        horizontal_std_dev: Some(h_sd),
        vertical_std_dev: Some(v_sd),
        cep50: Some(cep50),
        poi_offset_x: Some(mean_x),
        poi_offset_y: Some(mean_y),
        bullet_diameter: d,
        calibration_method: group.calibration_method,
        measurement_confidence: group.measurement_confidence,
    }
}

/// Arithmetic mean of the hole coordinates.
fn centroid(holes: &[Pt2]) -> Pt2 {
    let n = holes.len() as Real;
    let sum_x: Real = holes.iter().map(|h| h.x).sum();
    let sum_y: Real = holes.iter().map(|h| h.y).sum();
    Pt2::new(sum_x / n, sum_y / n)
}

/// Maximum pairwise distance, via an all-pairs scan.
///
/// Groups hold at most a few dozen holes; the scan is O(n²).
fn extreme_spread(holes: &[Pt2]) -> Real {
    let mut max = 0.0_f64;
    for (i, a) in holes.iter().enumerate() {
        for b in &holes[i + 1..] {
            let d = distance(a, b);
            if d > max {
                max = d;
            }
        }
    }
    max
}

/// Coordinate bounds as `(min_x, max_x, min_y, max_y)`.
fn bounds(holes: &[Pt2]) -> (Real, Real, Real, Real) {
    let mut min_x = Real::INFINITY;
    let mut max_x = Real::NEG_INFINITY;
    let mut min_y = Real::INFINITY;
    let mut max_y = Real::NEG_INFINITY;
    for h in holes {
        min_x = min_x.min(h.x);
        max_x = max_x.max(h.x);
        min_y = min_y.min(h.y);
        max_y = max_y.max(h.y);
    }
    (min_x, max_x, min_y, max_y)
}

/// Population standard deviation (divide by `n`, not `n - 1`).
///
/// Every hole of the group is observed, so the samples are the full
/// population rather than a draw from a larger one.
fn population_std_dev(values: &[Real], mean: Real) -> Real {
    let n = values.len() as Real;
    let sum_sq: Real = values.iter().map(|v| (v - mean) * (v - mean)).sum();
    (sum_sq / n).sqrt()
}

/// Smallest centroid-centred radius enclosing at least half the holes.
///
/// Distances are sorted ascending and the value at 0-based rank `n / 2` is
/// taken: the median rank for odd counts, and the upper of the two middle
/// ranks for even counts so the circle never encloses fewer than half.
fn cep50(radii: &[Real]) -> Real {
    let mut sorted = radii.to_vec();
    sorted.sort_by(Real::total_cmp);
    sorted[sorted.len() / 2]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(holes: Vec<Pt2>, diameter: Real) -> GroupMeasurement {
        GroupMeasurement::new(holes, diameter).unwrap()
    }

    #[test]
    fn empty_group_has_no_derived_metrics() {
        let metrics = compute_dispersion(&group(vec![], 0.224));

        assert!(metrics.is_insufficient());
        assert!(metrics.extreme_spread_ctc.is_none());
        assert!(metrics.mean_radius.is_none());
        assert!(metrics.cep50.is_none());
        assert!(metrics.poi_offset_x.is_none());
        assert_eq!(metrics.bullet_diameter, 0.224);
    }

    #[test]
    fn single_hole_has_no_derived_metrics() {
        let metrics = compute_dispersion(&group(vec![Pt2::new(1.0, -1.0)], 0.308));

        assert!(metrics.is_insufficient());
        assert!(metrics.vertical_spread_ete.is_none());
        assert!(metrics.radial_std_dev.is_none());
    }

    #[test]
    fn two_hole_group() {
        // Holes 1 inch apart on the x axis, centred at (0.5, 0).
        let metrics = compute_dispersion(&group(
            vec![Pt2::new(0.0, 0.0), Pt2::new(1.0, 0.0)],
            0.224,
        ));

        assert!((metrics.extreme_spread_ctc.unwrap() - 1.0).abs() < 1e-12);
        assert!((metrics.extreme_spread_ete.unwrap() - 1.224).abs() < 1e-12);
        assert!((metrics.horizontal_spread_ctc.unwrap() - 1.0).abs() < 1e-12);
        assert!((metrics.vertical_spread_ctc.unwrap() - 0.0).abs() < 1e-12);
        assert!((metrics.mean_radius.unwrap() - 0.5).abs() < 1e-12);
        assert!((metrics.poi_offset_x.unwrap() - 0.5).abs() < 1e-12);
        assert!((metrics.poi_offset_y.unwrap() - 0.0).abs() < 1e-12);
        // Both holes are 0.5 in from the centroid, so the radial spread
        // collapses and CEP50 is that shared radius.
        assert!((metrics.radial_std_dev.unwrap() - 0.0).abs() < 1e-12);
        assert!((metrics.cep50.unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn right_triangle_extreme_spread() {
        // 3-4-5 triangle: hypotenuse is the extreme spread.
        let metrics = compute_dispersion(&group(
            vec![Pt2::new(0.0, 0.0), Pt2::new(3.0, 0.0), Pt2::new(0.0, 4.0)],
            0.0,
        ));

        assert!((metrics.extreme_spread_ctc.unwrap() - 5.0).abs() < 1e-12);
        // Zero diameter: edge-to-edge equals center-to-center.
        assert_eq!(
            metrics.extreme_spread_ete.unwrap(),
            metrics.extreme_spread_ctc.unwrap()
        );
    }

    #[test]
    fn coincident_holes_collapse_to_zero() {
        let holes = vec![Pt2::new(0.7, -0.2); 5];
        let metrics = compute_dispersion(&group(holes, 0.264));

        assert_eq!(metrics.extreme_spread_ctc.unwrap(), 0.0);
        assert_eq!(metrics.extreme_spread_ete.unwrap(), 0.264);
        assert_eq!(metrics.horizontal_spread_ctc.unwrap(), 0.0);
        assert_eq!(metrics.vertical_spread_ctc.unwrap(), 0.0);
        assert_eq!(metrics.mean_radius.unwrap(), 0.0);
        assert_eq!(metrics.radial_std_dev.unwrap(), 0.0);
        assert_eq!(metrics.horizontal_std_dev.unwrap(), 0.0);
        assert_eq!(metrics.vertical_std_dev.unwrap(), 0.0);
        assert_eq!(metrics.cep50.unwrap(), 0.0);
        assert!((metrics.poi_offset_x.unwrap() - 0.7).abs() < 1e-12);
        assert!((metrics.poi_offset_y.unwrap() + 0.2).abs() < 1e-12);
    }

    #[test]
    fn hole_order_does_not_matter() {
        let a = compute_dispersion(&group(
            vec![Pt2::new(0.1, 0.3), Pt2::new(-0.4, 0.2), Pt2::new(0.5, -0.6)],
            0.224,
        ));
        let b = compute_dispersion(&group(
            vec![Pt2::new(0.5, -0.6), Pt2::new(0.1, 0.3), Pt2::new(-0.4, 0.2)],
            0.224,
        ));

        assert_eq!(a.extreme_spread_ctc, b.extreme_spread_ctc);
        assert_eq!(a.mean_radius, b.mean_radius);
        assert_eq!(a.cep50, b.cep50);
        assert_eq!(a.poi_offset_x, b.poi_offset_x);
    }

    #[test]
    fn cep50_ranks() {
        // Odd count: median rank. Radii 1, 2, 3 -> 2.
        assert_eq!(cep50(&[3.0, 1.0, 2.0]), 2.0);
        // Even count: upper middle rank. Radii 1, 2, 3, 4 -> 3.
        assert_eq!(cep50(&[4.0, 2.0, 1.0, 3.0]), 3.0);
    }

    #[test]
    fn std_devs_match_hand_computation() {
        // x offsets from centroid: -1, 1; y offsets: -2, 2.
        let metrics = compute_dispersion(&group(
            vec![Pt2::new(-1.0, -2.0), Pt2::new(1.0, 2.0)],
            0.0,
        ));

        assert!((metrics.horizontal_std_dev.unwrap() - 1.0).abs() < 1e-12);
        assert!((metrics.vertical_std_dev.unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn insufficient_report_serializes_without_absent_fields() {
        let metrics = compute_dispersion(&group(vec![], 0.224));
        let json = serde_json::to_string(&metrics).unwrap();

        assert!(!json.contains("extremeSpreadCtc"));
        assert!(json.contains("bulletDiameter"));
        assert!(json.contains("\"calibrationMethod\":\"manual\""));
    }

    #[test]
    fn report_serde_roundtrip() {
        let metrics = compute_dispersion(&group(
            vec![Pt2::new(0.0, 0.0), Pt2::new(1.0, 1.0)],
            0.308,
        ));

        let json = serde_json::to_string(&metrics).unwrap();
        let restored: GroupDispersionMetrics = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.extreme_spread_ctc, metrics.extreme_spread_ctc);
        assert_eq!(restored.bullet_diameter, metrics.bullet_diameter);
    }
}
