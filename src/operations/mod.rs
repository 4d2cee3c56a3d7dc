pub mod dedup;
pub mod decompose;
pub mod normalize;
pub mod segment_line;
pub mod transform;

pub use decompose::{DecomposeUnits, UnitGroup};
pub use dedup::RemoveSuperimposed;
pub use normalize::{FixedVector, NormalizeBlueprint, SerializedBlueprint, SerializedSpawnpoint};
pub use segment_line::{MakeSegmentLine, SegmentPrefab};
pub use transform::{Rotate, Translate};
