use nalgebra::Rotation3;

use super::Vector3;

/// Converts spherical coordinates to a rectangular vector with `+Y` up.
///
/// * `azimuth` - Angle in the XZ plane from `+X` toward `+Z`, in radians.
/// * `elevation` - Angle above the XZ plane, in radians.
#[must_use]
pub fn spherical_to_rect(radius: f64, azimuth: f64, elevation: f64) -> Vector3 {
    let flat = radius * elevation.cos();
    Vector3::new(
        flat * azimuth.cos(),
        radius * elevation.sin(),
        flat * azimuth.sin(),
    )
}

/// Rotates `v` by `theta` radians about the Z axis.
#[must_use]
pub fn rotate_z(theta: f64, v: &Vector3) -> Vector3 {
    Rotation3::from_axis_angle(&Vector3::z_axis(), theta) * v
}

/// Linearly maps `x` from `[in_min, in_max]` onto `[out_min, out_max]`.
#[must_use]
pub fn remap(in_min: f64, in_max: f64, out_min: f64, out_max: f64, x: f64) -> f64 {
    out_min + (x - in_min) * (out_max - out_min) / (in_max - in_min)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::HALF_PI;

    #[test]
    fn spherical_axes() {
        assert_abs_diff_eq!(spherical_to_rect(2.0, 0.0, 0.0), Vector3::new(2.0, 0.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(spherical_to_rect(2.0, HALF_PI, 0.0), Vector3::new(0.0, 0.0, 2.0), epsilon = 1e-12);
        assert_abs_diff_eq!(spherical_to_rect(2.0, 1.0, HALF_PI), Vector3::new(0.0, 2.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn rotate_z_quarter_turn() {
        let v = rotate_z(HALF_PI, &Vector3::new(1.0, 0.0, 0.0));
        assert_abs_diff_eq!(v, Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn remap_interpolates() {
        assert_abs_diff_eq!(remap(0.0, 1.0, -0.25, 0.6, 0.5), 0.175, epsilon = 1e-12);
        assert_abs_diff_eq!(remap(0.0, 10.0, 0.0, 1.0, 10.0), 1.0, epsilon = 1e-12);
    }
}
