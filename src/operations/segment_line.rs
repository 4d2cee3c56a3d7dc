use tracing::debug;

use super::{DecomposeUnits, UnitGroup};
use crate::blueprint::{Blueprint, BlueprintFactory};
use crate::error::{GeometryError, Result};
use crate::math::{orientation_for, tidy, tidy_vector, unit, Vector3, TOLERANCE};

/// Segment lengths used when none are given.
pub const DEFAULT_SEGMENT_UNITS: [f64; 2] = [5.0, 1.0];

/// Asset family of the thin drawing-board cylinders.
pub const CYLINDER_FAMILY: &str = "DrawingBoardCylinder0.5mx";

/// Naming scheme of a segment prefab family.
///
/// An item id is `{family}{size}m0{variant}`, e.g.
/// `DrawingBoardCylinder0.5mx5m01` for a 5m segment in variant 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentPrefab {
    family: String,
}

impl Default for SegmentPrefab {
    fn default() -> Self {
        Self::new(CYLINDER_FAMILY)
    }
}

impl SegmentPrefab {
    /// Creates a prefab scheme for the given family prefix.
    #[must_use]
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
        }
    }

    /// Returns the item id of the `size` segment in `variant`.
    #[must_use]
    pub fn item_id(&self, size: f64, variant: u8) -> String {
        format!("{}{size}m0{variant}", self.family)
    }
}

/// Tiles a straight line with fixed-length segment prefabs.
///
/// Whole segments are anchored at their near end and laid contiguously from
/// `start`, longest units first. A leftover shorter than the smallest unit
/// is covered by one smallest-unit prefab pulled back by the leftover length
/// from the walking position.
pub struct MakeSegmentLine {
    variant: u8,
    start: Vector3,
    end: Vector3,
    units: Vec<f64>,
    prefab: SegmentPrefab,
}

impl MakeSegmentLine {
    /// Creates a new `MakeSegmentLine` operation with the default 5m and 1m
    /// cylinder segments.
    #[must_use]
    pub fn new(variant: u8, start: Vector3, end: Vector3) -> Self {
        Self {
            variant,
            start,
            end,
            units: DEFAULT_SEGMENT_UNITS.to_vec(),
            prefab: SegmentPrefab::default(),
        }
    }

    /// Replaces the allowed segment lengths.
    #[must_use]
    pub fn with_units(mut self, units: &[f64]) -> Self {
        self.units = units.to_vec();
        self
    }

    /// Replaces the prefab naming scheme.
    #[must_use]
    pub fn with_prefab(mut self, prefab: SegmentPrefab) -> Self {
        self.prefab = prefab;
        self
    }

    /// Executes the operation, returning the placed segments in walking order.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoints coincide or no positive segment
    /// length is configured.
    pub fn execute(&self, factory: &mut BlueprintFactory) -> Result<Vec<Blueprint>> {
        let delta = tidy_vector(&(self.end - self.start));
        if delta.norm() < TOLERANCE {
            return Err(
                GeometryError::Degenerate("segment line endpoints coincide".into()).into(),
            );
        }
        let smallest = self
            .units
            .iter()
            .copied()
            .filter(|u| *u > 0.0 && u.is_finite())
            .min_by(f64::total_cmp)
            .ok_or_else(|| GeometryError::Degenerate("no positive segment length".into()))?;

        let direction = tidy_vector(&unit(&delta)?);
        let orientation = orientation_for(&direction)?;
        let length = tidy(delta.norm());

        let mut walk = self.start;
        let mut out = Vec::new();
        for group in DecomposeUnits::new(length, &self.units).execute() {
            match group {
                UnitGroup::Whole { unit, count } => {
                    let item_id = self.prefab.item_id(unit, self.variant);
                    for _ in 0..count {
                        out.push(factory.make_blueprint(&item_id, walk, orientation));
                        walk += direction * unit;
                    }
                }
                UnitGroup::Remainder { value } if value > 0.0 => {
                    let item_id = self.prefab.item_id(smallest, self.variant);
                    let anchor = walk - direction * value;
                    out.push(factory.make_blueprint(&item_id, anchor, orientation));
                }
                UnitGroup::Remainder { .. } => {}
            }
        }
        debug!(length, segments = out.len(), variant = self.variant, "built segment line");
        Ok(out)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::blueprint::SequentialIds;
    use crate::math::{euler_rotation, HALF_PI};

    fn v(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3::new(x, y, z)
    }

    fn factory() -> BlueprintFactory {
        BlueprintFactory::with_ids(SequentialIds::default())
    }

    #[test]
    fn ten_along_x_is_two_long_segments() {
        let line = MakeSegmentLine::new(1, v(0.0, 0.0, 0.0), v(10.0, 0.0, 0.0))
            .execute(&mut factory())
            .unwrap();

        assert_eq!(line.len(), 2);
        assert!(line.iter().all(|b| b.item_id == "DrawingBoardCylinder0.5mx5m01"));
        assert_abs_diff_eq!(line[0].position, v(0.0, 0.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(line[1].position, v(5.0, 0.0, 0.0), epsilon = 1e-12);
        assert_eq!(line[0].rotation, line[1].rotation);
        assert_abs_diff_eq!(line[0].rotation, v(HALF_PI, HALF_PI, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn degenerate_line_fails() {
        let result = MakeSegmentLine::new(1, v(0.0, 0.0, 0.0), v(0.0, 0.0, 0.0)).execute(&mut factory());
        assert!(result.is_err());
    }

    #[test]
    fn no_units_fails() {
        let result = MakeSegmentLine::new(1, v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0))
            .with_units(&[])
            .execute(&mut factory());
        assert!(result.is_err());
    }

    #[test]
    fn whole_segments_tile_contiguously() {
        let start = v(1.0, 2.0, 3.0);
        let end = v(1.0, 2.0, -9.0);
        let line = MakeSegmentLine::new(3, start, end).execute(&mut factory()).unwrap();

        let sizes: Vec<&str> = line.iter().map(|b| b.item_id.as_str()).collect();
        assert_eq!(
            sizes,
            vec![
                "DrawingBoardCylinder0.5mx5m03",
                "DrawingBoardCylinder0.5mx5m03",
                "DrawingBoardCylinder0.5mx1m03",
                "DrawingBoardCylinder0.5mx1m03",
            ]
        );
        let expected_z = [3.0, -2.0, -7.0, -8.0];
        for (bp, z) in line.iter().zip(expected_z) {
            assert_abs_diff_eq!(bp.position, v(1.0, 2.0, z), epsilon = 1e-12);
        }
        // last 1m segment ends exactly at `end`
        assert_abs_diff_eq!(line[3].position + v(0.0, 0.0, -1.0), end, epsilon = 1e-12);
    }

    #[test]
    fn remainder_is_pulled_back_by_its_length() {
        let line = MakeSegmentLine::new(2, v(0.0, 0.0, 0.0), v(0.0, 12.5, 0.0))
            .execute(&mut factory())
            .unwrap();

        assert_eq!(line.len(), 5);
        let last = &line[4];
        assert_eq!(last.item_id, "DrawingBoardCylinder0.5mx1m02");
        assert_abs_diff_eq!(last.position, v(0.0, 11.5, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn diagonal_orientation_points_along_line() {
        let line = MakeSegmentLine::new(4, v(0.0, 0.0, 0.0), v(10.0, 10.0, 0.0))
            .execute(&mut factory())
            .unwrap();

        // 14.14.. = 2 * 5 + 4 * 1 + 0.14..
        assert_eq!(line.len(), 7);
        let axis = euler_rotation(&line[0].rotation) * Vector3::y();
        assert_abs_diff_eq!(axis, v(1.0, 1.0, 0.0).normalize(), epsilon = 1e-9);
        assert!(line.iter().all(|b| b.rotation == line[0].rotation));
    }

    #[test]
    fn custom_prefab_family() {
        let line = MakeSegmentLine::new(1, v(0.0, 0.0, 0.0), v(0.0, 0.0, 5.0))
            .with_prefab(SegmentPrefab::new("DrawingBoardCylinder1mx"))
            .execute(&mut factory())
            .unwrap();
        assert_eq!(line.len(), 1);
        assert_eq!(line[0].item_id, "DrawingBoardCylinder1mx5m01");
    }

    #[test]
    fn length_just_under_whole_units_stays_within_end() {
        let end = v(9.999_999_999, 0.0, 0.0);
        let line = MakeSegmentLine::new(1, v(0.0, 0.0, 0.0), end)
            .execute(&mut factory())
            .unwrap();

        assert_eq!(line.len(), 2);
        assert!(line.iter().all(|b| b.item_id == "DrawingBoardCylinder0.5mx5m01"));
        // far end of the last segment
        assert_abs_diff_eq!(line[1].position.x + 5.0, end.x, epsilon = 1e-8);
    }
}
