//! Placed object records and the factory that creates them.

pub mod aliases;
pub mod factory;

pub use aliases::{resolve_item_id, ALIASES};
pub use factory::{BlueprintFactory, IdSource, RandomIds, SequentialIds, DEFAULT_SPAWN_POSITION};

use uuid::Uuid;

use crate::math::Vector3;

/// Discriminator of an ordinary placed object.
pub const FLAG_TYPE: &str = "TrackBlueprintFlag";

/// Discriminator of a spawn point object.
pub const SPAWNPOINT_TYPE: &str = "TrackBlueprintSpawnpoint";

/// Discriminator of the spawn point payload.
pub const NAMED_SPAWNPOINT_TYPE: &str = "NamedDroneSpawnpoint";

/// Purpose given to objects that do not declare one.
pub const DEFAULT_PURPOSE: &str = "Functional";

/// One placed object in a track.
///
/// Positions are world units and rotations are radians, both in natural
/// floating-point form. Conversion to the document's fixed-precision degree
/// representation happens only when the track is saved.
#[derive(Debug, Clone, PartialEq)]
pub struct Blueprint {
    /// Transient identity, never serialized.
    pub id: Uuid,
    /// Resolved game asset identifier.
    pub item_id: String,
    pub position: Vector3,
    pub rotation: Vector3,
    /// Explicit discriminator. `None` means an ordinary flag.
    pub type_tag: Option<String>,
    pub purpose: Option<String>,
    pub spawnpoint: Option<Spawnpoint>,
}

/// Payload carried by spawn point objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spawnpoint {
    /// Display name shown in game.
    pub name: String,
    pub type_tag: String,
}

impl Blueprint {
    /// Creates an ordinary object with no explicit discriminator.
    #[must_use]
    pub fn new(id: Uuid, item_id: impl Into<String>, position: Vector3, rotation: Vector3) -> Self {
        Self {
            id,
            item_id: item_id.into(),
            position,
            rotation,
            type_tag: None,
            purpose: None,
            spawnpoint: None,
        }
    }

    /// Returns the discriminator used when serializing this object.
    #[must_use]
    pub fn type_tag_or_default(&self) -> &str {
        self.type_tag.as_deref().unwrap_or(FLAG_TYPE)
    }

    /// Returns `true` if this object is a spawn point.
    #[must_use]
    pub fn is_spawn_point(&self) -> bool {
        self.spawnpoint.is_some()
    }
}
