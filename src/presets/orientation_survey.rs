use crate::blueprint::{Blueprint, BlueprintFactory};
use crate::math::{rotate_z, Vector3, TAU};
use crate::operations::segment_line::CYLINDER_FAMILY;
use crate::operations::SegmentPrefab;

/// Places 5m cylinders turned in quarter steps about Z, once at a shared
/// pivot and once swung around it, so each variant color marks one angle.
/// Used to check the game's rotation handedness.
pub(super) fn generate(factory: &mut BlueprintFactory) -> Vec<Blueprint> {
    let prefab = SegmentPrefab::new(CYLINDER_FAMILY);
    let pivot = Vector3::new(0.0, 5.0, 0.0);
    let arm = Vector3::new(0.0, 5.0, 0.0);
    let quarter_turns = || (1u8..=4).map(|variant| (variant, TAU * f64::from(variant - 1) / 4.0));

    let at_pivot = quarter_turns().map(|(variant, angle)| {
        factory.make_blueprint(&prefab.item_id(5.0, variant), pivot, Vector3::new(0.0, 0.0, angle))
    });
    let mut out: Vec<Blueprint> = at_pivot.collect();
    out.extend(quarter_turns().map(|(variant, angle)| {
        factory.make_blueprint(
            &prefab.item_id(5.0, variant),
            rotate_z(angle, &arm) + pivot,
            Vector3::new(0.0, 0.0, angle),
        )
    }));
    out
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn survey_has_two_rings_of_four() {
        let out = generate(&mut BlueprintFactory::new());
        assert_eq!(out.len(), 8);
        assert_eq!(out[0].item_id, "DrawingBoardCylinder0.5mx5m01");
        assert_eq!(out[3].item_id, "DrawingBoardCylinder0.5mx5m04");
        assert!(out[..4].iter().all(|b| b.position == Vector3::new(0.0, 5.0, 0.0)));
        assert_abs_diff_eq!(out[4].position, Vector3::new(0.0, 10.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(out[5].position, Vector3::new(-5.0, 5.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(out[6].rotation.z, std::f64::consts::PI, epsilon = 1e-12);
    }
}
