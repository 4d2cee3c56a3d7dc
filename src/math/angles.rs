//! Conversions between directions and Euler rotations.
//!
//! Rotations are stored as `[x, y, z]` angles in radians and composed as
//! `R = Ry(y) · Rx(x) · Rz(z)`: roll about the long axis first, then pitch,
//! then yaw. Prefabs are modeled with their long axis along `+Y`.

use nalgebra::Rotation3;

use super::{unit, Vector3, TAU};
use crate::error::Result;

const RADIANS_TO_DEGREES: f64 = 360.0 / TAU;

/// Returns the rotation that aligns a prefab's `+Y` axis with `direction`.
///
/// Roll about the direction is fixed at zero. Pitch is the polar angle of
/// `direction` measured from `+Y` and yaw is its azimuth in the XZ plane
/// measured from `+Z` toward `+X`.
///
/// Older generated tracks used per-axis angles that only agree with this for
/// axis-aligned directions, so diagonal pieces will not match them.
///
/// # Errors
///
/// Returns an error if `direction` is zero-length.
pub fn orientation_for(direction: &Vector3) -> Result<Vector3> {
    let d = unit(direction)?;
    let pitch = d.y.clamp(-1.0, 1.0).acos();
    let yaw = d.x.atan2(d.z);
    Ok(Vector3::new(pitch, yaw, 0.0))
}

/// Builds the rotation matrix for an Euler rotation `[x, y, z]`.
#[must_use]
pub fn euler_rotation(rotation: &Vector3) -> Rotation3<f64> {
    let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), rotation.x);
    let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), rotation.y);
    let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), rotation.z);
    ry * rx * rz
}

/// Converts each component from radians to degrees.
#[must_use]
pub fn degrees(rotation: &Vector3) -> Vector3 {
    rotation * RADIANS_TO_DEGREES
}

/// Converts each component from degrees to radians.
#[must_use]
pub fn radians(rotation: &Vector3) -> Vector3 {
    rotation / RADIANS_TO_DEGREES
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::HALF_PI;

    fn aligned(direction: Vector3) -> Vector3 {
        let rotation = orientation_for(&direction).unwrap();
        euler_rotation(&rotation) * Vector3::y()
    }

    #[test]
    fn x_axis_orientation() {
        let r = orientation_for(&Vector3::x()).unwrap();
        assert_abs_diff_eq!(r, Vector3::new(HALF_PI, HALF_PI, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn up_needs_no_rotation() {
        let r = orientation_for(&Vector3::new(0.0, 3.0, 0.0)).unwrap();
        assert_abs_diff_eq!(r, Vector3::zeros(), epsilon = 1e-12);
    }

    #[test]
    fn orientation_maps_long_axis_onto_direction() {
        let directions = [
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, -1.0),
            Vector3::new(0.0, -1.0, 0.0),
            Vector3::new(1.0, 1.0, 0.0),
            Vector3::new(-2.0, 0.5, 3.0),
            Vector3::new(0.3, -0.7, -0.2),
        ];
        for d in directions {
            assert_abs_diff_eq!(aligned(d), d.normalize(), epsilon = 1e-9);
        }
    }

    #[test]
    fn zero_direction_is_rejected() {
        assert!(orientation_for(&Vector3::zeros()).is_err());
    }

    #[test]
    fn degrees_round_trip() {
        let r = Vector3::new(HALF_PI, -std::f64::consts::PI, 0.25);
        let d = degrees(&r);
        assert_abs_diff_eq!(d.x, 90.0, epsilon = 1e-12);
        assert_abs_diff_eq!(d.y, -180.0, epsilon = 1e-12);
        assert_abs_diff_eq!(radians(&d), r, epsilon = 1e-12);
    }
}
