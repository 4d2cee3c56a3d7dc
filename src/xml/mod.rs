//! XML codec for track documents.
//!
//! Documents are held as [`serde_json::Value`] trees. Object keys become
//! elements, arrays become repeated sibling elements, keys starting with
//! [`ATTRIBUTE_PREFIX`] become attributes of the enclosing element and
//! [`TEXT_KEY`] holds the text of an element that also has attributes.

mod decode;
mod encode;

pub use decode::decode;
pub use encode::{encode, EncodeOptions};

/// Marks a key as an XML attribute.
pub const ATTRIBUTE_PREFIX: &str = "@_";

/// Key holding element text next to attributes.
pub const TEXT_KEY: &str = "#text";
