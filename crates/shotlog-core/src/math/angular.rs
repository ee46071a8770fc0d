//! Linear↔angular unit conversions.
//!
//! This module converts between linear spread on the target (inches) and the
//! angular units used for scope adjustments (MOA and MIL), at a given range.
//! All functions are pure, total over finite inputs, and stateless.
//!
//! Angular subtension scales linearly with distance, so every distance-aware
//! conversion is anchored at 100 yards and scaled by `distance_yards / 100`.

use super::Real;

/// Inches subtended by 1 MOA at 100 yards.
pub const MOA_INCHES_PER_100YD: Real = 1.0472;

/// Inches subtended by 1 MIL at 100 yards.
pub const MIL_INCHES_PER_100YD: Real = 3.6;

/// MOA per MIL.
pub const MOA_PER_MIL: Real = 3.438;

/// MIL per MOA.
pub const MIL_PER_MOA: Real = 0.2909;

/// Convert a linear spread in inches to MOA at the given range.
///
/// At `distance_yards == 0` the angle is undefined; this implementation
/// returns `0.0` so that a group with no logged distance simply carries no
/// angular size. Callers that need to distinguish "no distance" should test
/// the distance before converting.
///
/// # Example
/// ```
/// use shotlog_core::math::inches_to_moa;
///
/// let moa = inches_to_moa(1.0472, 100.0);
/// assert!((moa - 1.0).abs() < 1e-12);
/// ```
pub fn inches_to_moa(inches: Real, distance_yards: Real) -> Real {
    if distance_yards == 0.0 {
        return 0.0;
    }
    inches / (MOA_INCHES_PER_100YD * distance_yards / 100.0)
}

/// Convert an angular size in MOA to inches at the given range.
///
/// Inverse of [`inches_to_moa`] for any positive distance.
pub fn moa_to_inches(moa: Real, distance_yards: Real) -> Real {
    moa * MOA_INCHES_PER_100YD * distance_yards / 100.0
}

/// Convert a linear spread in inches to MIL at the given range.
///
/// Returns `0.0` at `distance_yards == 0`, matching [`inches_to_moa`].
pub fn inches_to_mils(inches: Real, distance_yards: Real) -> Real {
    if distance_yards == 0.0 {
        return 0.0;
    }
    inches / (MIL_INCHES_PER_100YD * distance_yards / 100.0)
}

/// Convert an angular size in MIL to inches at the given range.
pub fn mils_to_inches(mils: Real, distance_yards: Real) -> Real {
    mils * MIL_INCHES_PER_100YD * distance_yards / 100.0
}

/// Convert MIL to MOA. Distance-independent.
pub fn mil_to_moa(mils: Real) -> Real {
    mils * MOA_PER_MIL
}

/// Convert MOA to MIL. Distance-independent.
pub fn moa_to_mil(moa: Real) -> Real {
    moa * MIL_PER_MOA
}
