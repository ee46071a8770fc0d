//! High-level entry crate for the `shotlog-rs` analytics engines.
//!
//! A shooting log records shot groups (bullet-hole coordinates on a target)
//! and chronograph strings (muzzle-velocity readings); this workspace turns
//! those raw samples into the derived metrics shooters compare: extreme
//! spread, mean radius, deviation statistics, CEP50, point-of-impact bias,
//! and velocity summaries, plus the inches↔MOA↔MIL conversions used to
//! display them at a logged distance.
//!
//! ## Analyzing a group
//!
//! ```
//! use shotlog::pipeline::{analyze_group, GroupAnalysisInput};
//! use shotlog::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let input = GroupAnalysisInput {
//!     holes: vec![
//!         Pt2::new(0.12, -0.40),
//!         Pt2::new(-0.35, 0.22),
//!         Pt2::new(0.40, 0.15),
//!         Pt2::new(-0.05, -0.10),
//!         Pt2::new(0.21, 0.33),
//!     ],
//!     bullet_diameter: 0.224,
//!     calibration_method: CalibrationMethod::Manual,
//!     measurement_confidence: None,
//!     distance_yards: Some(100.0),
//! };
//!
//! let report = analyze_group(&input)?;
//! let es = report.metrics.extreme_spread_ctc.unwrap();
//! let es_moa = report.extreme_spread_moa.unwrap();
//! println!("extreme spread: {:.3} in ({:.2} MOA)", es, es_moa);
//! # Ok(())
//! # }
//! ```
//!
//! ## Working with the engines directly
//!
//! The engines are pure functions over validated measurements. Use them
//! when the surrounding service owns its own validation:
//!
//! ```
//! use shotlog::core::{GroupMeasurement, Pt2};
//! use shotlog::metrics::{compute_dispersion, compute_velocity_stats};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let group = GroupMeasurement::new(
//!     vec![Pt2::new(0.0, 0.0), Pt2::new(0.8, 0.3), Pt2::new(0.4, -0.5)],
//!     0.308,
//! )?;
//! let metrics = compute_dispersion(&group);
//! assert!(metrics.mean_radius.is_some());
//!
//! let stats = compute_velocity_stats(&[2800.0, 2810.0, 2795.0]);
//! assert_eq!(stats.count, 3);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module organization
//!
//! - **[`core`]**: math aliases, unit conversions, measurement DTOs
//! - **[`metrics`]**: the dispersion and velocity engines
//! - **[`pipeline`]**: input validation and report assembly
//! - **[`prelude`]**: convenient re-exports for common use cases

/// Math aliases, unit conversions, and measurement DTOs.
pub mod core {
    pub use shotlog_core::*;
}

/// The dispersion and velocity statistics engines.
pub mod metrics {
    pub use shotlog_metrics::*;
}

/// Input validation and report assembly.
pub mod pipeline {
    pub use shotlog_pipeline::*;
}

/// Convenient re-exports for common use cases.
///
/// Import with `use shotlog::prelude::*;` to get started quickly.
pub mod prelude {
    pub use crate::core::{
        inches_to_mils, inches_to_moa, mil_to_moa, mils_to_inches, moa_to_inches, moa_to_mil,
        CalibrationMethod, GroupMeasurement, Pt2, Real, Vec2,
    };
    pub use crate::metrics::{
        compute_dispersion, compute_velocity_stats, GroupDispersionMetrics, VelocityStatistics,
    };
    pub use crate::pipeline::{
        analyze_group, analyze_velocities, AnalysisError, GroupAnalysisInput, GroupAnalysisReport,
        VelocityInput,
    };
}
