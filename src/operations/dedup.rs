use std::collections::HashSet;

use tracing::debug;

use crate::blueprint::Blueprint;
use crate::math::Vector3;

/// Number of trailing item id characters that encode the variant.
pub const DEFAULT_VARIANT_SUFFIX_LEN: usize = 2;

/// Removes blueprints that sit exactly on top of an earlier one.
///
/// Two blueprints are duplicates when their item ids match once the variant
/// suffix is dropped and their positions and rotations are equal. A
/// `tolerance` of zero compares coordinates exactly; a positive tolerance
/// accepts per-component differences up to that value. The first occurrence
/// is kept and input order is preserved.
pub struct RemoveSuperimposed {
    suffix_len: usize,
    tolerance: f64,
}

impl Default for RemoveSuperimposed {
    fn default() -> Self {
        Self::new(DEFAULT_VARIANT_SUFFIX_LEN)
    }
}

impl RemoveSuperimposed {
    /// Creates a new `RemoveSuperimposed` operation with exact comparison.
    #[must_use]
    pub fn new(suffix_len: usize) -> Self {
        Self {
            suffix_len,
            tolerance: 0.0,
        }
    }

    /// Sets the coordinate tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance.max(0.0);
        self
    }

    /// Executes the operation, returning the surviving blueprints.
    #[must_use]
    pub fn execute(&self, blueprints: Vec<Blueprint>) -> Vec<Blueprint> {
        let before = blueprints.len();
        let out = if self.tolerance > 0.0 {
            self.dedup_within_tolerance(blueprints)
        } else {
            self.dedup_exact(blueprints)
        };
        debug!(before, after = out.len(), "removed superimposed blueprints");
        out
    }

    fn dedup_exact(&self, blueprints: Vec<Blueprint>) -> Vec<Blueprint> {
        let mut seen = HashSet::with_capacity(blueprints.len());
        blueprints
            .into_iter()
            .filter(|b| {
                let stem = variant_stem(&b.item_id, self.suffix_len).to_owned();
                seen.insert((stem, coordinate_bits(&b.position), coordinate_bits(&b.rotation)))
            })
            .collect()
    }

    fn dedup_within_tolerance(&self, blueprints: Vec<Blueprint>) -> Vec<Blueprint> {
        let mut kept: Vec<Blueprint> = Vec::with_capacity(blueprints.len());
        for candidate in blueprints {
            let stem = variant_stem(&candidate.item_id, self.suffix_len);
            let duplicate = kept.iter().any(|k| {
                variant_stem(&k.item_id, self.suffix_len) == stem
                    && within(&k.position, &candidate.position, self.tolerance)
                    && within(&k.rotation, &candidate.rotation, self.tolerance)
            });
            if !duplicate {
                kept.push(candidate);
            }
        }
        kept
    }
}

/// Returns `item_id` without its last `suffix_len` characters.
#[must_use]
pub fn variant_stem(item_id: &str, suffix_len: usize) -> &str {
    let count = item_id.chars().count();
    if suffix_len >= count {
        return "";
    }
    let cut = item_id
        .char_indices()
        .nth(count - suffix_len)
        .map_or(item_id.len(), |(i, _)| i);
    &item_id[..cut]
}

fn coordinate_bits(v: &Vector3) -> [u64; 3] {
    // adding 0.0 turns -0.0 into 0.0 so both hash alike
    [(v.x + 0.0).to_bits(), (v.y + 0.0).to_bits(), (v.z + 0.0).to_bits()]
}

fn within(a: &Vector3, b: &Vector3, tolerance: f64) -> bool {
    (a - b).iter().all(|d| d.abs() <= tolerance)
}
