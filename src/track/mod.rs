//! Track documents: template merging, the instance collection and saving.

mod assemble;
mod document;
mod merge;

pub use assemble::{load_track, make_track, make_track_from_template, prepare_instances, save_track};
pub use document::{TrackDocument, BLUEPRINTS_KEY, BLUEPRINTS_PARENT};
pub use merge::merge_deep_left;
