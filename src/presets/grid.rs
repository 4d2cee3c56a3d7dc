use crate::blueprint::{Blueprint, BlueprintFactory};
use crate::math::Vector3;

const CELLS: usize = 20;
const SPACING: f64 = 7.0;

/// Lattice coordinates `[u, v, w]` with `u` varying fastest.
pub(super) fn lattice(n: usize) -> impl Iterator<Item = Vector3> {
    (0..n).flat_map(move |w| {
        (0..n).flat_map(move |v| (0..n).map(move |u| Vector3::new(cell(u), cell(v), cell(w))))
    })
}

#[allow(clippy::cast_precision_loss)]
fn cell(i: usize) -> f64 {
    i as f64
}

pub(super) fn generate(factory: &mut BlueprintFactory) -> Vec<Blueprint> {
    let lift = Vector3::new(0.0, 3.0, 0.0);
    lattice(CELLS)
        .map(|p| factory.make_blueprint("cube1", (p + lift) * SPACING, Vector3::zeros()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lattice_order_is_u_fastest() {
        let points: Vec<Vector3> = lattice(2).collect();
        assert_eq!(points.len(), 8);
        assert_eq!(points[0], Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(points[1], Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(points[2], Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(points[4], Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn cubes_are_lifted_and_spaced() {
        let out = generate(&mut BlueprintFactory::new());
        assert_eq!(out.len(), CELLS * CELLS * CELLS);
        assert_eq!(out[0].position, Vector3::new(0.0, 21.0, 0.0));
        assert_eq!(out[1].position, Vector3::new(7.0, 21.0, 0.0));
        assert!(out.iter().all(|b| b.item_id == "DrawingBoardCube1mx1m04"));
    }
}
