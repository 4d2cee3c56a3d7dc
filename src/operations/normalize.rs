use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::blueprint::{Blueprint, Spawnpoint, DEFAULT_PURPOSE, FLAG_TYPE, NAMED_SPAWNPOINT_TYPE};
use crate::error::{DocumentError, Result};
use crate::math::{degrees, fixed, radians, Vector3};

/// Decimal places used for positions and rotations in saved tracks.
pub const DEFAULT_PRECISION: usize = 5;

/// A vector in the document's fixed-precision text form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedVector {
    #[serde(deserialize_with = "scalar_text")]
    pub x: String,
    #[serde(deserialize_with = "scalar_text")]
    pub y: String,
    #[serde(deserialize_with = "scalar_text")]
    pub z: String,
}

impl FixedVector {
    /// Formats each component with `decimals` fixed decimal places.
    #[must_use]
    pub fn new(v: &Vector3, decimals: usize) -> Self {
        Self {
            x: fixed(v.x, decimals),
            y: fixed(v.y, decimals),
            z: fixed(v.z, decimals),
        }
    }

    /// Parses the components back into a vector.
    ///
    /// # Errors
    ///
    /// Returns an error if a component is not a number.
    pub fn parse(&self) -> Result<Vector3> {
        let parse = |axis: &str, text: &str| {
            text.trim().parse::<f64>().map_err(|_| {
                DocumentError::InvalidBlueprint(format!("{axis} component `{text}` is not a number"))
            })
        };
        Ok(Vector3::new(
            parse("x", &self.x)?,
            parse("y", &self.y)?,
            parse("z", &self.z)?,
        ))
    }
}

/// Spawn point payload as written to the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedSpawnpoint {
    #[serde(rename = "@_xsi:type", default = "named_spawnpoint_type")]
    pub type_tag: String,
    pub name: String,
}

/// A blueprint as written to the document.
///
/// Keys prefixed with `@_` are rendered as XML attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedBlueprint {
    #[serde(rename = "@_xsi:type", default = "flag_type")]
    pub type_tag: String,
    #[serde(rename = "itemID")]
    pub item_id: String,
    pub position: FixedVector,
    /// Degrees.
    pub rotation: FixedVector,
    #[serde(default = "default_purpose")]
    pub purpose: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spawnpoint: Option<SerializedSpawnpoint>,
}

impl SerializedBlueprint {
    /// Rebuilds an in-memory blueprint, converting the rotation back to radians.
    ///
    /// # Errors
    ///
    /// Returns an error if a coordinate cannot be parsed.
    pub fn to_blueprint(&self, id: Uuid) -> Result<Blueprint> {
        let mut blueprint = Blueprint::new(
            id,
            self.item_id.clone(),
            self.position.parse()?,
            radians(&self.rotation.parse()?),
        );
        blueprint.type_tag = Some(self.type_tag.clone());
        blueprint.purpose = Some(self.purpose.clone());
        blueprint.spawnpoint = self.spawnpoint.as_ref().map(|s| Spawnpoint {
            name: s.name.clone(),
            type_tag: s.type_tag.clone(),
        });
        Ok(blueprint)
    }
}

/// Converts blueprints into their serialized form.
///
/// Drops the transient id, fills in the flag discriminator and purpose where
/// the blueprint declares none, formats the position and converts the
/// rotation to degrees, both at fixed precision.
pub struct NormalizeBlueprint {
    decimals: usize,
}

impl Default for NormalizeBlueprint {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION)
    }
}

impl NormalizeBlueprint {
    /// Creates a new `NormalizeBlueprint` operation.
    #[must_use]
    pub fn new(decimals: usize) -> Self {
        Self { decimals }
    }

    /// Executes the conversion for one blueprint.
    #[must_use]
    pub fn execute(&self, blueprint: &Blueprint) -> SerializedBlueprint {
        SerializedBlueprint {
            type_tag: blueprint.type_tag_or_default().to_owned(),
            item_id: blueprint.item_id.clone(),
            position: FixedVector::new(&blueprint.position, self.decimals),
            rotation: FixedVector::new(&degrees(&blueprint.rotation), self.decimals),
            purpose: blueprint
                .purpose
                .clone()
                .unwrap_or_else(default_purpose),
            spawnpoint: blueprint.spawnpoint.as_ref().map(|s| SerializedSpawnpoint {
                type_tag: s.type_tag.clone(),
                name: s.name.clone(),
            }),
        }
    }

    /// Executes the conversion for every blueprint, preserving order.
    #[must_use]
    pub fn execute_all(&self, blueprints: &[Blueprint]) -> Vec<SerializedBlueprint> {
        blueprints.iter().map(|b| self.execute(b)).collect()
    }
}

fn flag_type() -> String {
    FLAG_TYPE.to_owned()
}

fn named_spawnpoint_type() -> String {
    NAMED_SPAWNPOINT_TYPE.to_owned()
}

fn default_purpose() -> String {
    DEFAULT_PURPOSE.to_owned()
}

/// Accepts a component written either as text or as a bare number.
fn scalar_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Number(f64),
    }

    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(text) => text,
        Scalar::Number(n) => n.to_string(),
    })
}
