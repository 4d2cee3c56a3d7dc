use crate::blueprint::{Blueprint, BlueprintFactory};
use crate::math::{remap, rotate_z, Vector3, HALF_PI, TAU};

const LOOPS: usize = 20;
const GAP: f64 = 5.0;
const RADIUS_START: f64 = 3.0;
const RADIUS_STEP: f64 = 0.3;
/// Fraction of a full turn each loop covers.
const ARC: f64 = 0.85;
/// Hoops per meter of half circumference.
const DENSITY: f64 = 1.5;

/// Builds a vertical loop of hoops whose lowest point is `origin`.
///
/// The loop starts at the bottom and sweeps `arc` of a turn about Z, each
/// hoop facing along the loop.
fn make_loop(
    factory: &mut BlueprintFactory,
    origin: Vector3,
    radius: f64,
    rings: usize,
    arc: f64,
) -> Vec<Blueprint> {
    let center = origin + Vector3::new(0.0, radius, 0.0);
    (0..rings)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let turn = remap(0.0, 1.0, -0.25, -0.25 + arc, i as f64 / rings as f64);
            let position = rotate_z(TAU * turn, &Vector3::new(radius, 0.0, 0.0)) + center;
            let rotation = Vector3::new(HALF_PI - TAU * turn, HALF_PI, 0.0);
            factory.make_blueprint("lightHoop1", position, rotation)
        })
        .collect()
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn rings_for(radius: f64) -> usize {
    (std::f64::consts::PI * radius * DENSITY * ARC).floor() as usize
}

pub(super) fn generate(factory: &mut BlueprintFactory) -> Vec<Blueprint> {
    (0..LOOPS)
        .flat_map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let i = i as f64;
            let radius = RADIUS_START + i * RADIUS_STEP;
            make_loop(
                factory,
                Vector3::new(0.0, 5.0, GAP * i),
                radius,
                rings_for(radius),
                ARC,
            )
        })
        .collect()
}
