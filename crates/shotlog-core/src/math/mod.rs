//! Mathematical utilities and type definitions.
//!
//! This module provides the fundamental numeric types used throughout the
//! workspace and the unit conversions between linear and angular measures.

use nalgebra::{Point2, Vector2};

pub mod angular;

// Re-export angular conversions for convenience
pub use angular::{
    inches_to_mils, inches_to_moa, mil_to_moa, mils_to_inches, moa_to_inches, moa_to_mil,
};

/// Scalar type used throughout the workspace (currently `f64`).
pub type Real = f64;

/// 2D vector with [`Real`] components.
pub type Vec2 = Vector2<Real>;
/// 2D point with [`Real`] coordinates.
pub type Pt2 = Point2<Real>;

/// Euclidean distance between two target-plane points, in inches.
pub fn distance(a: &Pt2, b: &Pt2) -> Real {
    (a - b).norm()
}
