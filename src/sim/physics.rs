//! Scalar physics helpers shared by the block mutators
//!
//! Each function works on a single axis so that x and y are always treated
//! independently.

use std::f32::consts::PI;

use crate::consts::VELOCITY_FLOOR;

/// Stokes drag coefficient for a block of the given width and mass.
///
/// The block is treated as a sphere whose radius is half its width:
/// `6·π·viscosity·r / mass`.
#[inline]
pub fn stokes_attenuation(viscosity: f32, width: f32, mass: f32) -> f32 {
    let radius = width / 2.0;
    6.0 * PI * viscosity * radius / mass
}

/// Decay one velocity component toward zero.
///
/// The decrement is `attenuation·|v|·dt`, capped at `|v|` so a large step
/// can never flip the sign. Anything slower than `VELOCITY_FLOOR` comes to
/// rest exactly.
pub fn damp_axis(v: f32, attenuation: f32, dt: f32) -> f32 {
    let dv = (attenuation * v.abs() * dt).max(0.0).min(v.abs());
    let damped = if v > 0.0 {
        v - dv
    } else if v < 0.0 {
        v + dv
    } else {
        v
    };

    if damped.abs() < VELOCITY_FLOOR {
        0.0
    } else {
        damped
    }
}

/// Hard clamp of a coordinate into `[min, max]`.
///
/// The low edge is tested first, then the high edge. When `max < min`
/// (block larger than its boundary) the result is `max`; this never panics,
/// unlike `f32::clamp`.
#[inline]
pub fn clamp_axis(value: f32, min: f32, max: f32) -> f32 {
    let mut v = value;
    if v < min {
        v = min;
    }
    if v > max {
        v = max;
    }
    v
}

/// Toroidal wrap of a coordinate over `[min, max]`.
///
/// Crossing the low edge teleports to the high edge and vice versa.
#[inline]
pub fn wrap_axis(value: f32, min: f32, max: f32) -> f32 {
    let mut v = value;
    if v < min {
        v = max;
    }
    if v > max {
        v = min;
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_attenuation_formula() {
        let k = stokes_attenuation(1.0, 20.0, 1000.0);
        assert!((k - 6.0 * PI * 10.0 / 1000.0).abs() < 1e-6);
    }

    #[test]
    fn test_damp_axis_snaps_below_floor() {
        assert_eq!(damp_axis(14.9, 0.0, 0.016), 0.0);
        assert_eq!(damp_axis(-14.9, 0.0, 0.016), 0.0);
        assert_eq!(damp_axis(0.0, 5.0, 0.016), 0.0);
    }

    #[test]
    fn test_damp_axis_moves_toward_zero() {
        let v = damp_axis(100.0, 1.0, 0.1);
        assert!((v - 90.0).abs() < 1e-4);
        let v = damp_axis(-100.0, 1.0, 0.1);
        assert!((v + 90.0).abs() < 1e-4);
    }

    #[test]
    fn test_damp_axis_never_reverses() {
        // attenuation * dt = 5 would overshoot without the cap
        assert_eq!(damp_axis(100.0, 50.0, 0.1), 0.0);
        assert_eq!(damp_axis(-100.0, 50.0, 0.1), 0.0);
    }

    #[test]
    fn test_clamp_axis_inverted_range() {
        // Oversized block: both edges fire, high edge wins
        assert_eq!(clamp_axis(-5.0, 10.0, 0.0), 0.0);
        assert_eq!(clamp_axis(50.0, 10.0, 0.0), 0.0);
    }

    #[test]
    fn test_wrap_axis_edges() {
        assert_eq!(wrap_axis(9.0, 10.0, 100.0), 100.0);
        assert_eq!(wrap_axis(101.0, 10.0, 100.0), 10.0);
        assert_eq!(wrap_axis(10.0, 10.0, 100.0), 10.0);
        assert_eq!(wrap_axis(100.0, 10.0, 100.0), 100.0);
    }

    proptest! {
        #[test]
        fn prop_clamp_is_idempotent(v in -1e4f32..1e4, min in -500f32..500.0, span in 0f32..1000.0) {
            let max = min + span;
            let once = clamp_axis(v, min, max);
            prop_assert!(once >= min && once <= max);
            prop_assert_eq!(clamp_axis(once, min, max), once);
        }

        #[test]
        fn prop_wrap_lands_in_range(v in -1e4f32..1e4, min in -500f32..500.0, span in 0f32..1000.0) {
            let max = min + span;
            let wrapped = wrap_axis(v, min, max);
            prop_assert!(wrapped >= min && wrapped <= max);
        }

        #[test]
        fn prop_damping_is_non_increasing(v in -1e4f32..1e4, k in 0f32..20.0, dt in 0f32..0.1) {
            let next = damp_axis(v, k, dt);
            prop_assert!(next.abs() <= v.abs());
            prop_assert!(next == 0.0 || next.signum() == v.signum());
        }
    }
}
