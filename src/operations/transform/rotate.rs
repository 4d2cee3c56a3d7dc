use crate::blueprint::Blueprint;
use crate::math::Vector3;

/// Adds a delta to the Euler rotation of blueprints.
///
/// The delta is summed component-wise in radians. This does not compose
/// rotations; it offsets each angle.
pub struct Rotate {
    delta: Vector3,
}

impl Rotate {
    /// Creates a new `Rotate` operation.
    ///
    /// * `delta` - Angle offsets in radians.
    #[must_use]
    pub fn new(delta: Vector3) -> Self {
        Self { delta }
    }

    /// Returns a copy of `blueprint` with the delta added to its rotation.
    #[must_use]
    pub fn apply(&self, blueprint: &Blueprint) -> Blueprint {
        Blueprint {
            rotation: blueprint.rotation + self.delta,
            ..blueprint.clone()
        }
    }

    /// Applies the rotation offset to every blueprint.
    #[must_use]
    pub fn apply_all(&self, blueprints: &[Blueprint]) -> Vec<Blueprint> {
        blueprints.iter().map(|b| self.apply(b)).collect()
    }
}
