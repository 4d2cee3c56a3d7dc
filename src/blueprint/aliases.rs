/// Short keys for commonly used game assets.
pub const ALIASES: &[(&str, &str)] = &[
    ("cube1", "DrawingBoardCube1mx1m04"),
    ("cube10", "DrawingBoardCube10mx10m04"),
    ("cube5", "DrawingBoardCube5mx5m04"),
    ("cylinder0x1", "DrawingBoardCylinder0.5mx1m04"),
    ("cylinder0x5", "DrawingBoardCylinder0.5mx5m04"),
    ("cylinder1x1", "DrawingBoardCylinder1mx1m04"),
    ("cylinder1x5", "DrawingBoardCylinder1mx5m04"),
    ("plate", "DrawingBoardPlate4mx4m04"),
    ("wall", "DrawingBoardWall5mx5m04"),
    ("beam", "ASLLightBeam02"),
    ("lightHoop1", "ASLLightHoopGate01"),
    ("octgate", "OctagonGate200x200cmGeneric01"),
];

/// Resolves `key` through [`ALIASES`], returning `key` itself on a miss.
///
/// A miss is not an error: canonical asset identifiers are passed directly.
#[must_use]
pub fn resolve_item_id(key: &str) -> &str {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map_or(key, |&(_, item_id)| item_id)
}
