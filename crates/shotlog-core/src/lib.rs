//! Core math and measurement primitives for `shotlog-rs`.
//!
//! This crate contains:
//! - linear algebra type aliases (`Real`, `Pt2`, `Vec2`),
//! - linear↔angular unit conversions (inches / MOA / MIL),
//! - validated measurement DTOs ([`GroupMeasurement`], [`CalibrationMethod`]).
//!
//! Coordinate convention: target-plane positions are in **inches relative to
//! the point of aim at the origin**; `x` positive is right of the aim point,
//! `y` positive is above it.

/// Linear algebra type aliases and unit conversions.
pub mod math;
/// Measurement data structures.
pub mod types;

pub use math::*;
pub use types::*;
