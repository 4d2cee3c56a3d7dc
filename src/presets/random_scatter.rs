use rand::rngs::StdRng;
use rand::Rng;

use crate::blueprint::{Blueprint, BlueprintFactory};
use crate::math::Vector3;

/// Half extent of the scatter cube.
const EXTENT: f64 = 60.0;

const DENSITY: f64 = 1.0;

/// Primitives picked for the random items preset. Cylinders are listed
/// twice to make them twice as likely.
const ITEM_KEYS: [&str; 8] = [
    "cube1",
    "cube5",
    "cylinder0x1",
    "cylinder0x5",
    "cylinder0x1",
    "cylinder0x5",
    "plate",
    "wall",
];

/// Number of objects thrown into the cube before the ground filter.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn attempts() -> usize {
    (EXTENT * EXTENT * (EXTENT / 2.0) * DENSITY * 0.1) as usize
}

fn random_vector(rng: &mut StdRng, bound: f64) -> Vector3 {
    Vector3::new(
        rng.random_range(-bound..bound),
        rng.random_range(-bound..bound),
        rng.random_range(-bound..bound),
    )
}

/// Scatters objects with random position and rotation, keeping those above
/// the ground plane.
fn scatter(
    factory: &mut BlueprintFactory,
    rng: &mut StdRng,
    mut pick_key: impl FnMut(&mut StdRng) -> &'static str,
) -> Vec<Blueprint> {
    (0..attempts())
        .filter_map(|_| {
            let key = pick_key(rng);
            let position = random_vector(rng, EXTENT);
            let rotation = random_vector(rng, std::f64::consts::PI);
            (position.y > 0.0).then(|| factory.make_blueprint(key, position, rotation))
        })
        .collect()
}

pub(super) fn cylinders(factory: &mut BlueprintFactory, rng: &mut StdRng) -> Vec<Blueprint> {
    scatter(factory, rng, |_| "cylinder0x5")
}

pub(super) fn items(factory: &mut BlueprintFactory, rng: &mut StdRng) -> Vec<Blueprint> {
    scatter(factory, rng, |rng| ITEM_KEYS[rng.random_range(0..ITEM_KEYS.len())])
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn everything_is_above_ground() {
        let mut rng = StdRng::seed_from_u64(1);
        let out = cylinders(&mut BlueprintFactory::new(), &mut rng);
        assert!(!out.is_empty());
        assert!(out.len() < attempts());
        assert!(out.iter().all(|b| b.position.y > 0.0));
        assert!(out.iter().all(|b| b.item_id == "DrawingBoardCylinder0.5mx5m04"));
    }

    #[test]
    fn items_come_from_the_pick_list() {
        let mut rng = StdRng::seed_from_u64(2);
        let allowed: Vec<&str> = ITEM_KEYS.iter().map(|k| crate::blueprint::resolve_item_id(k)).collect();
        let out = items(&mut BlueprintFactory::new(), &mut rng);
        assert!(out.iter().all(|b| allowed.contains(&b.item_id.as_str())));
        assert!(out
            .iter()
            .all(|b| b.rotation.iter().all(|a| a.abs() <= std::f64::consts::PI)));
    }
}
