//! Measurement data structures.

mod group;

pub use group::{CalibrationMethod, GroupMeasurement, MAX_HOLE_OFFSET_IN};
