use serde_json::{Map, Value};

use crate::blueprint::{Blueprint, BlueprintFactory};
use crate::error::{DocumentError, Result};
use crate::operations::SerializedBlueprint;

/// Objects enclosing the blueprint list inside a track document.
pub const BLUEPRINTS_PARENT: [&str; 2] = ["Track", "blueprints"];

/// Key of the blueprint list under [`BLUEPRINTS_PARENT`].
pub const BLUEPRINTS_KEY: &str = "TrackBlueprint";

/// A track being generated.
///
/// The document tree holds the template metadata. Its blueprint list at
/// `Track.blueprints.TrackBlueprint` is lifted out into [`instances`](Self::instances) when
/// the document is built and written back by [`into_value`](Self::into_value),
/// so while a track is in memory the instance collection is the only copy.
#[derive(Debug, Clone)]
pub struct TrackDocument {
    name: String,
    root: Value,
    instances: Vec<Blueprint>,
}

impl TrackDocument {
    /// Builds a document from a tree, lifting out any stored blueprints.
    ///
    /// Stored blueprints get fresh ids from `factory`.
    ///
    /// # Errors
    ///
    /// Returns an error if the tree has no `Track.name` or a stored blueprint
    /// is malformed.
    pub fn from_value(mut root: Value, factory: &mut BlueprintFactory) -> Result<Self> {
        let name = root
            .pointer("/Track/name")
            .and_then(Value::as_str)
            .ok_or_else(|| DocumentError::MissingField("Track.name".into()))?
            .to_owned();
        let stored = take_blueprints(&mut root);
        let instances = parse_blueprints(stored, factory)?;
        Ok(Self {
            name,
            root,
            instances,
        })
    }

    /// Returns the track name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `Track.localID.str`, if present.
    #[must_use]
    pub fn local_id(&self) -> Option<&str> {
        self.root.pointer("/Track/localID/str").and_then(Value::as_str)
    }

    /// Returns the metadata tree, without the blueprint list.
    #[must_use]
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Looks up a metadata value by JSON pointer, e.g. `/Track/gameVersion`.
    #[must_use]
    pub fn get(&self, pointer: &str) -> Option<&Value> {
        self.root.pointer(pointer)
    }

    /// Sets a field directly under `Track`.
    ///
    /// # Errors
    ///
    /// Returns an error if the document has no `Track` object.
    pub fn set_track_field(&mut self, key: &str, value: impl Into<Value>) -> Result<()> {
        let track = self
            .root
            .get_mut("Track")
            .and_then(Value::as_object_mut)
            .ok_or_else(|| DocumentError::MissingField("Track".into()))?;
        track.insert(key.to_owned(), value.into());
        Ok(())
    }

    /// Returns the placed objects in insertion order.
    #[must_use]
    pub fn instances(&self) -> &[Blueprint] {
        &self.instances
    }

    /// Returns the placed objects for in-place editing.
    pub fn instances_mut(&mut self) -> &mut Vec<Blueprint> {
        &mut self.instances
    }

    /// Replaces all placed objects.
    pub fn set_instances(&mut self, instances: Vec<Blueprint>) {
        self.instances = instances;
    }

    /// Appends one placed object.
    pub fn push(&mut self, blueprint: Blueprint) {
        self.instances.push(blueprint);
    }

    /// Appends placed objects.
    pub fn extend(&mut self, blueprints: impl IntoIterator<Item = Blueprint>) {
        self.instances.extend(blueprints);
    }

    /// Removes and returns all placed objects.
    pub fn take_instances(&mut self) -> Vec<Blueprint> {
        std::mem::take(&mut self.instances)
    }

    /// Returns the complete tree with `serialized` installed at
    /// `Track.blueprints.TrackBlueprint`.
    ///
    /// Any instances still held are discarded; callers convert them first
    /// with [`take_instances`](Self::take_instances).
    ///
    /// # Errors
    ///
    /// Returns an error if a node on the blueprint path is not an object.
    pub fn into_value(mut self, serialized: &[SerializedBlueprint]) -> Result<Value> {
        let list = serde_json::to_value(serialized)?;
        let mut current = &mut self.root;
        for (depth, key) in BLUEPRINTS_PARENT.iter().enumerate() {
            let map = current
                .as_object_mut()
                .ok_or_else(|| shape_error(&BLUEPRINTS_PARENT[..depth]))?;
            let entry = map
                .entry(*key)
                .or_insert_with(|| Value::Object(Map::new()));
            if entry.is_null() || entry.as_str().is_some_and(|s| s.trim().is_empty()) {
                *entry = Value::Object(Map::new());
            }
            current = entry;
        }
        current
            .as_object_mut()
            .ok_or_else(|| shape_error(&BLUEPRINTS_PARENT))?
            .insert(BLUEPRINTS_KEY.to_owned(), list);
        Ok(self.root)
    }
}

fn shape_error(path: &[&str]) -> DocumentError {
    DocumentError::InvalidShape {
        path: if path.is_empty() { "/".to_owned() } else { path.join(".") },
        expected: "an object",
    }
}

fn take_blueprints(root: &mut Value) -> Option<Value> {
    let mut current = root;
    for key in BLUEPRINTS_PARENT {
        current = current.get_mut(key)?;
    }
    current.as_object_mut()?.remove(BLUEPRINTS_KEY)
}

fn parse_blueprints(stored: Option<Value>, factory: &mut BlueprintFactory) -> Result<Vec<Blueprint>> {
    let items = match stored {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::String(s)) if s.trim().is_empty() => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(item @ Value::Object(_)) => vec![item],
        Some(_) => {
            return Err(DocumentError::InvalidShape {
                path: format!("{}.{BLUEPRINTS_KEY}", BLUEPRINTS_PARENT.join(".")),
                expected: "a list of blueprints",
            }
            .into())
        }
    };
    items
        .into_iter()
        .map(|item| {
            let serialized: SerializedBlueprint = serde_json::from_value(item)?;
            serialized.to_blueprint(factory.next_id())
        })
        .collect()
}
