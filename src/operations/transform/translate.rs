use crate::blueprint::Blueprint;
use crate::math::Vector3;

/// Moves blueprints by a displacement vector.
pub struct Translate {
    displacement: Vector3,
}

impl Translate {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(displacement: Vector3) -> Self {
        Self { displacement }
    }

    /// Returns a copy of `blueprint` with the displacement added to its
    /// position. The input is left untouched.
    #[must_use]
    pub fn apply(&self, blueprint: &Blueprint) -> Blueprint {
        Blueprint {
            position: blueprint.position + self.displacement,
            ..blueprint.clone()
        }
    }

    /// Applies the translation to every blueprint.
    #[must_use]
    pub fn apply_all(&self, blueprints: &[Blueprint]) -> Vec<Blueprint> {
        blueprints.iter().map(|b| self.apply(b)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blueprint::BlueprintFactory;

    #[test]
    fn translate_offsets_position_only() {
        let mut factory = BlueprintFactory::new();
        let source = factory.make_blueprint("cube1", Vector3::new(1.0, 2.0, 3.0), Vector3::new(0.1, 0.2, 0.3));
        let moved = Translate::new(Vector3::new(10.0, 0.0, -1.0)).apply(&source);

        assert_eq!(moved.position, Vector3::new(11.0, 2.0, 2.0));
        assert_eq!(moved.rotation, source.rotation);
        assert_eq!(moved.item_id, source.item_id);
        assert_eq!(source.position, Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn translate_all_preserves_order() {
        let mut factory = BlueprintFactory::new();
        let items = vec![
            factory.make_blueprint_at_origin("cube1"),
            factory.make_blueprint_at_origin("cube5"),
        ];
        let moved = Translate::new(Vector3::new(0.0, 5.0, 0.0)).apply_all(&items);
        assert_eq!(moved.len(), 2);
        assert_eq!(moved[1].item_id, "DrawingBoardCube5mx5m04");
        assert!(moved.iter().all(|b| b.position.y == 5.0));
    }
}
