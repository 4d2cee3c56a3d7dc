use super::grid::lattice;
use crate::blueprint::{Blueprint, BlueprintFactory};
use crate::math::{Vector3, HALF_PI};
use crate::operations::Translate;

const CELLS: usize = 10;
const SPACING: f64 = 5.0;

/// Three cylinders at the origin, one along each axis.
fn node(factory: &mut BlueprintFactory) -> [Blueprint; 3] {
    [
        Vector3::zeros(),
        Vector3::new(HALF_PI, 0.0, 0.0),
        Vector3::new(0.0, 0.0, HALF_PI),
    ]
    .map(|rotation| factory.make_blueprint("cylinder0x5", Vector3::zeros(), rotation))
}

pub(super) fn generate(factory: &mut BlueprintFactory) -> Vec<Blueprint> {
    let origin = Vector3::new(0.0, 3.0, 0.0);
    lattice(CELLS)
        .flat_map(|p| {
            let offset = Translate::new(p * SPACING + origin);
            node(factory).map(|b| offset.apply(&b))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_node_has_three_axes() {
        let out = generate(&mut BlueprintFactory::new());
        assert_eq!(out.len(), CELLS * CELLS * CELLS * 3);
        assert!(out[..3].iter().all(|b| b.position == Vector3::new(0.0, 3.0, 0.0)));
        assert_eq!(out[3].position, Vector3::new(5.0, 3.0, 0.0));
        assert_eq!(out[1].rotation, Vector3::new(HALF_PI, 0.0, 0.0));
        assert_eq!(out[2].rotation, Vector3::new(0.0, 0.0, HALF_PI));
    }
}
