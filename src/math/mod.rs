pub mod angles;
pub mod spherical;

pub use angles::{degrees, euler_rotation, orientation_for, radians};
pub use spherical::{remap, rotate_z, spherical_to_rect};

/// 3D vector type, used for both world positions and Euler rotations.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Full turn in radians.
pub const TAU: f64 = std::f64::consts::TAU;

/// Quarter turn in radians.
pub const HALF_PI: f64 = std::f64::consts::FRAC_PI_2;

const TIDY_SCALE: f64 = 1e15;

/// Rounds away accumulated noise below `1e-15` and collapses negative zero.
#[must_use]
pub fn tidy(value: f64) -> f64 {
    let rounded = (value * TIDY_SCALE).round() / TIDY_SCALE;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Applies [`tidy`] to each component.
#[must_use]
pub fn tidy_vector(v: &Vector3) -> Vector3 {
    v.map(tidy)
}

/// Returns the unit vector along `v`.
///
/// # Errors
///
/// Returns an error if `v` is zero-length.
pub fn unit(v: &Vector3) -> crate::Result<Vector3> {
    let len = v.norm();
    if len < TOLERANCE {
        return Err(crate::error::GeometryError::ZeroVector.into());
    }
    Ok(v / len)
}

/// Formats `value` with `decimals` fixed decimal places.
///
/// Values that round to zero are printed without a sign, so `-0.0` and
/// `-0.000001` both become `0.00000` at five decimals.
#[must_use]
pub fn fixed(value: f64, decimals: usize) -> String {
    let out = format!("{value:.decimals$}");
    match out.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_owned(),
        _ => out,
    }
}
