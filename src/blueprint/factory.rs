use std::fmt;

use tracing::debug;
use uuid::Uuid;

use super::{resolve_item_id, Blueprint, Spawnpoint, NAMED_SPAWNPOINT_TYPE, SPAWNPOINT_TYPE};
use crate::math::Vector3;

/// Number given to the first spawn point created without an explicit one.
pub const FIRST_SPAWN_NUMBER: u32 = 2;

/// Where a spawn point goes when no position is given.
pub const DEFAULT_SPAWN_POSITION: [f64; 3] = [0.0, 0.0, -30.0];

/// Source of unique blueprint identifiers.
pub trait IdSource: fmt::Debug {
    /// Returns an identifier never returned before by this source.
    fn next_id(&mut self) -> Uuid;
}

/// Random version 4 identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Deterministic identifiers `1, 2, 3, ...` for repeatable output and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialIds {
    last: u128,
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> Uuid {
        self.last += 1;
        Uuid::from_u128(self.last)
    }
}

/// Creates blueprints for one generation session.
///
/// Owns the identifier source and the spawn point counter, so two factories
/// never share numbering state.
pub struct BlueprintFactory {
    ids: Box<dyn IdSource>,
    next_spawn: u32,
}

impl fmt::Debug for BlueprintFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlueprintFactory")
            .field("ids", &self.ids)
            .field("next_spawn", &self.next_spawn)
            .finish()
    }
}

impl Default for BlueprintFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl BlueprintFactory {
    /// Creates a factory issuing random identifiers.
    #[must_use]
    pub fn new() -> Self {
        Self::with_ids(RandomIds)
    }

    /// Creates a factory drawing identifiers from `ids`.
    #[must_use]
    pub fn with_ids(ids: impl IdSource + 'static) -> Self {
        Self {
            ids: Box::new(ids),
            next_spawn: FIRST_SPAWN_NUMBER,
        }
    }

    /// Returns a fresh identifier.
    pub fn next_id(&mut self) -> Uuid {
        self.ids.next_id()
    }

    /// Creates an ordinary object from an alias or a raw asset identifier.
    pub fn make_blueprint(&mut self, key: &str, position: Vector3, rotation: Vector3) -> Blueprint {
        let item_id = resolve_item_id(key);
        if item_id == key {
            debug!(key, "no alias, using item id verbatim");
        }
        Blueprint::new(self.next_id(), item_id, position, rotation)
    }

    /// Creates an object at the origin with zero rotation.
    pub fn make_blueprint_at_origin(&mut self, key: &str) -> Blueprint {
        self.make_blueprint(key, Vector3::zeros(), Vector3::zeros())
    }

    /// Creates a spawn point.
    ///
    /// Without an explicit `number` the session counter is used and advanced,
    /// so consecutive calls yield `Spawn 2`, `Spawn 3`, ...
    pub fn make_spawn_point(
        &mut self,
        position: Vector3,
        rotation: Vector3,
        number: Option<u32>,
    ) -> Blueprint {
        let number = number.unwrap_or_else(|| {
            let n = self.next_spawn;
            self.next_spawn += 1;
            n
        });
        let mut blueprint = Blueprint::new(
            self.next_id(),
            format!("SpawnPointSingle{number:02}"),
            position,
            rotation,
        );
        blueprint.type_tag = Some(SPAWNPOINT_TYPE.to_owned());
        blueprint.spawnpoint = Some(Spawnpoint {
            name: format!("Spawn {number}"),
            type_tag: NAMED_SPAWNPOINT_TYPE.to_owned(),
        });
        blueprint
    }

    /// Creates the next numbered spawn point at [`DEFAULT_SPAWN_POSITION`],
    /// facing along `+Z`.
    pub fn make_default_spawn_point(&mut self) -> Blueprint {
        let [x, y, z] = DEFAULT_SPAWN_POSITION;
        self.make_spawn_point(Vector3::new(x, y, z), Vector3::zeros(), None)
    }
}
