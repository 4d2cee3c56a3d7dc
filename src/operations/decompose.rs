use tracing::debug;

/// Remainders smaller than this are treated as zero.
pub const REMAINDER_EPSILON: f64 = 1e-9;

/// One slot of a length decomposition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnitGroup {
    /// `count` whole units of length `unit`. `count` may be zero.
    Whole { unit: f64, count: usize },
    /// Length left over after all whole units were taken.
    Remainder { value: f64 },
}

impl UnitGroup {
    /// Returns the unit length, or `None` for the remainder.
    #[must_use]
    pub fn unit(&self) -> Option<f64> {
        match self {
            Self::Whole { unit, .. } => Some(*unit),
            Self::Remainder { .. } => None,
        }
    }

    /// Returns the number of items in the group. A remainder is one item.
    #[must_use]
    pub fn count(&self) -> usize {
        match self {
            Self::Whole { count, .. } => *count,
            Self::Remainder { .. } => 1,
        }
    }

    /// Returns the total length covered by the group.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn sum(&self) -> f64 {
        match self {
            Self::Whole { unit, count } => unit * *count as f64,
            Self::Remainder { value } => *value,
        }
    }

    /// Returns `true` for a trailing remainder strictly between 0 and 1.
    #[must_use]
    pub fn is_fractional(&self) -> bool {
        matches!(self, Self::Remainder { value } if *value > 0.0 && *value < 1.0)
    }
}

/// Decomposes a length into whole units, largest first, plus a remainder.
///
/// Every unit gets a [`UnitGroup::Whole`] slot, even when its count is zero,
/// so callers can match groups to units by position. A
/// [`UnitGroup::Remainder`] follows only when something is left over.
pub struct DecomposeUnits {
    target: f64,
    units: Vec<f64>,
}

impl DecomposeUnits {
    /// Creates a new `DecomposeUnits` operation.
    #[must_use]
    pub fn new(target: f64, units: &[f64]) -> Self {
        let mut units = units.to_vec();
        units.sort_by(|a, b| b.total_cmp(a));
        Self { target, units }
    }

    /// Executes the decomposition.
    ///
    /// Never fails. Non-positive units always get a count of zero, and a
    /// negative target produces zero counts followed by a negative remainder.
    /// For a non-negative target `count * unit` never exceeds the target by
    /// more than [`REMAINDER_EPSILON`] and no negative remainder is emitted.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn execute(&self) -> Vec<UnitGroup> {
        let mut remaining = self.target;
        let mut groups: Vec<UnitGroup> = self
            .units
            .iter()
            .map(|&unit| {
                let count = if unit > 0.0 && unit.is_finite() && remaining > 0.0 {
                    ((remaining + REMAINDER_EPSILON) / unit).floor() as usize
                } else {
                    0
                };
                remaining -= unit * count as f64;
                UnitGroup::Whole { unit, count }
            })
            .collect();

        // The count bias can overshoot a positive target by at most the
        // epsilon, so anything at or below it is zero.
        if remaining > REMAINDER_EPSILON || self.target < 0.0 {
            groups.push(UnitGroup::Remainder { value: remaining });
        }
        debug!(length = self.target, ?groups, "decomposed length");
        groups
    }
}
