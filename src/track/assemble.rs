use std::path::{Path, PathBuf};

use serde_json::{json, Value};
use tracing::{debug, info};

use super::{merge_deep_left, TrackDocument};
use crate::blueprint::{Blueprint, BlueprintFactory};
use crate::config::LiftupConfig;
use crate::error::{DocumentError, Result};
use crate::operations::SerializedBlueprint;
use crate::{io, xml};

/// Creates a track named `name` from the configured JSON template.
///
/// # Errors
///
/// Returns an error if the template cannot be read or parsed.
pub fn make_track(
    name: &str,
    config: &LiftupConfig,
    factory: &mut BlueprintFactory,
) -> Result<TrackDocument> {
    debug!(template = %config.template_path.display(), "loading track template");
    let template = io::read_json(&config.template_path)?;
    make_track_from_template(name, template, factory)
}

/// Creates a track named `name` on top of an already loaded template.
///
/// The name, a zero item counter and the local id are merged over the
/// template; every other template value is kept.
///
/// # Errors
///
/// Returns an error if the template holds malformed blueprints.
pub fn make_track_from_template(
    name: &str,
    template: Value,
    factory: &mut BlueprintFactory,
) -> Result<TrackDocument> {
    let overrides = json!({
        "Track": {
            "name": name,
            "lastTrackItemID": 0,
            "localID": { "str": name }
        }
    });
    TrackDocument::from_value(merge_deep_left(overrides, template), factory)
}

/// Removes superimposed duplicates, then converts the survivors into their
/// fixed-precision serialized form. Order is preserved.
#[must_use]
pub fn prepare_instances(instances: Vec<Blueprint>, config: &LiftupConfig) -> Vec<SerializedBlueprint> {
    let kept = config.dedup().execute(instances);
    config.normalizer().execute_all(&kept)
}

/// Saves `track` to `<tracks_dir>/<local id>/<name>.track` and returns the
/// written path.
///
/// The folder is named after `Track.localID.str`, falling back to the track
/// name. The file is written through a temporary sibling and renamed into
/// place.
///
/// # Errors
///
/// Returns an error if the name is unusable as a file name, the document
/// cannot be encoded, or any file operation fails.
pub fn save_track(mut track: TrackDocument, config: &LiftupConfig) -> Result<PathBuf> {
    let name = track.name().to_owned();
    let folder_name = track.local_id().unwrap_or(&name).to_owned();
    for part in [&name, &folder_name] {
        if !is_file_name(part) {
            return Err(DocumentError::InvalidShape {
                path: "Track.name".into(),
                expected: "a plain file name",
            }
            .into());
        }
    }

    let raw = track.instances().len();
    let serialized = prepare_instances(track.take_instances(), config);
    let kept = serialized.len();
    let document = track.into_value(&serialized)?;
    let text = xml::encode(&document, &config.encode_options())?;

    let folder = config.tracks_dir.join(folder_name);
    io::ensure_dir(&folder)?;
    let path = folder.join(format!("{name}.track"));
    io::write_atomic(&path, text.as_bytes())?;
    info!(track = %name, instances = kept, duplicates = raw - kept, path = %path.display(), "saved track");
    Ok(path)
}

/// Reads a saved track back into memory.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid track.
pub fn load_track(path: &Path, factory: &mut BlueprintFactory) -> Result<TrackDocument> {
    let text = io::read_to_string(path)?;
    let track = TrackDocument::from_value(xml::decode(&text)?, factory)?;
    info!(track = track.name(), instances = track.instances().len(), path = %path.display(), "loaded track");
    Ok(track)
}

fn is_file_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::blueprint::SequentialIds;
    use crate::math::Vector3;

    fn template() -> Value {
        json!({
            "Track": {
                "@_xmlns:xsi": "http://www.w3.org/2001/XMLSchema-instance",
                "gameVersion": "1.4.6",
                "localID": { "str": "template", "version": 1, "type": "TRACK" },
                "name": "template",
                "description": "",
                "lastTrackItemID": 17,
                "blueprints": ""
            }
        })
    }

    #[test]
    fn overrides_fill_name_counter_and_local_id() {
        let mut factory = BlueprintFactory::new();
        let track = make_track_from_template("grid", template(), &mut factory).unwrap();
        assert_eq!(track.name(), "grid");
        assert_eq!(track.local_id(), Some("grid"));
        assert_eq!(track.get("/Track/lastTrackItemID"), Some(&json!(0)));
        assert_eq!(track.get("/Track/localID/version"), Some(&json!(1)));
        assert_eq!(track.get("/Track/gameVersion"), Some(&json!("1.4.6")));
    }

    #[test]
    fn prepare_dedups_then_normalizes() {
        let mut factory = BlueprintFactory::with_ids(SequentialIds::default());
        let a = factory.make_blueprint("cube1", Vector3::new(1.0, 0.0, 0.0), Vector3::zeros());
        let b = factory.make_blueprint("cube1", Vector3::new(1.0, 0.0, 0.0), Vector3::zeros());
        let c = factory.make_blueprint("cube5", Vector3::new(2.0, 0.0, 0.0), Vector3::zeros());

        let out = prepare_instances(vec![a, b, c], &LiftupConfig::default());
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].position.x, "1.00000");
        assert_eq!(out[1].item_id, "DrawingBoardCube5mx5m04");
    }

    #[test]
    fn file_names_are_checked() {
        assert!(is_file_name("grid"));
        assert!(!is_file_name(""));
        assert!(!is_file_name(".."));
        assert!(!is_file_name("a/b"));
        assert!(!is_file_name("a\\b"));
    }

    #[test]
    fn missing_template_is_reported() {
        let config = LiftupConfig {
            template_path: std::env::temp_dir().join(format!("no-template-{}.json", uuid::Uuid::new_v4())),
            ..LiftupConfig::default()
        };
        assert!(make_track("x", &config, &mut BlueprintFactory::new()).is_err());
    }
}
