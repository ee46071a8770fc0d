//! Analyze a synthetic 5-shot group and print the report as JSON.
//!
//! Run with: `cargo run --example group_report`

use shotlog::pipeline::{analyze_group, analyze_velocities, VelocityInput};
use shotlog::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input = GroupAnalysisInput {
        holes: vec![
            Pt2::new(0.12, -0.40),
            Pt2::new(-0.35, 0.22),
            Pt2::new(0.40, 0.15),
            Pt2::new(-0.05, -0.10),
            Pt2::new(0.21, 0.33),
        ],
        bullet_diameter: 0.224,
        calibration_method: CalibrationMethod::Fiducial,
        measurement_confidence: Some(0.94),
        distance_yards: Some(100.0),
    };

    let report = analyze_group(&input)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    let stats = analyze_velocities(&VelocityInput {
        velocities: vec![2800.0, 2810.0, 2795.0, 2805.0, 2790.0],
    })?;
    println!("{}", serde_json::to_string_pretty(&stats)?);

    Ok(())
}
