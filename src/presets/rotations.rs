use crate::blueprint::{Blueprint, BlueprintFactory};
use crate::config::LiftupConfig;
use crate::error::Result;
use crate::math::{spherical_to_rect, Vector3, HALF_PI, TAU};

/// Number of lines per quarter of azimuth.
const LINES: usize = 4;
const RADIUS: f64 = 40.0;

/// Endpoints spread over a sphere, `2 * LINES` azimuth steps for each of
/// `LINES / 2` elevation steps starting straight down.
fn endpoints(center: Vector3) -> Vec<Vector3> {
    let azimuth_steps = LINES * 2;
    let elevation_steps = LINES / 2;
    #[allow(clippy::cast_precision_loss)]
    let fraction = |i: usize, n: usize| i as f64 / n as f64;
    (0..elevation_steps)
        .flat_map(|j| {
            (0..azimuth_steps).map(move |i| {
                let azimuth = fraction(i, azimuth_steps) * TAU - std::f64::consts::PI;
                let elevation = fraction(j, elevation_steps) * std::f64::consts::PI - HALF_PI;
                center + spherical_to_rect(RADIUS, azimuth, elevation)
            })
        })
        .collect()
}

/// Fans segment lines out from one center point, cycling through the four
/// color variants.
pub(super) fn generate(factory: &mut BlueprintFactory, config: &LiftupConfig) -> Result<Vec<Blueprint>> {
    let center = Vector3::new(0.0, 40.0, 20.0);
    let mut out = Vec::new();
    for (i, end) in endpoints(center).into_iter().enumerate() {
        #[allow(clippy::cast_possible_truncation)]
        let variant = (i % 4) as u8 + 1;
        out.extend(config.segment_line(variant, center, end).execute(factory)?);
    }
    Ok(out)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::operations::RemoveSuperimposed;

    #[test]
    fn endpoints_lie_on_the_sphere() {
        let center = Vector3::new(0.0, 40.0, 20.0);
        let points = endpoints(center);
        assert_eq!(points.len(), 16);
        for p in &points {
            assert_abs_diff_eq!((p - center).norm(), RADIUS, epsilon = 1e-9);
        }
        assert_abs_diff_eq!(points[0], Vector3::new(0.0, 0.0, 20.0), epsilon = 1e-9);
    }

    #[test]
    fn downward_lines_collapse_to_one() {
        let out = generate(&mut BlueprintFactory::new(), &LiftupConfig::default()).unwrap();
        // every line is 40m: eight 5m segments
        assert_eq!(out.len(), 16 * 8);
        // the eight straight-down lines differ only in color
        let kept = RemoveSuperimposed::default().execute(out);
        assert_eq!(kept.len(), 9 * 8);
    }
}
