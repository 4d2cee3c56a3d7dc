use std::io::Write;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde_json::Value;

use super::{ATTRIBUTE_PREFIX, TEXT_KEY};
use crate::error::{DocumentError, FormatError, Result};

/// Settings for [`encode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Encoding named in the XML declaration.
    pub encoding: String,
    /// Spaces per nesting level; `0` writes everything on one line.
    pub indent: usize,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            encoding: "utf-8".to_owned(),
            indent: 2,
        }
    }
}

/// Encodes a document tree as XML text.
///
/// The root must be an object; each of its keys is written as a top-level
/// element. Keys starting with `?` (declaration placeholders) are skipped
/// because the declaration is always written from `options`.
///
/// # Errors
///
/// Returns an error if the root is not an object or an attribute holds a
/// nested value.
pub fn encode(document: &Value, options: &EncodeOptions) -> Result<String> {
    let Value::Object(root) = document else {
        return Err(DocumentError::InvalidShape {
            path: "/".into(),
            expected: "an object",
        }
        .into());
    };

    let mut writer = if options.indent > 0 {
        Writer::new_with_indent(Vec::new(), b' ', options.indent)
    } else {
        Writer::new(Vec::new())
    };
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some(options.encoding.as_str()), None)))?;
    for (name, value) in root {
        if name.starts_with('?') {
            continue;
        }
        write_element(&mut writer, name, value)?;
    }

    let bytes = writer.into_inner();
    Ok(String::from_utf8(bytes).map_err(FormatError::Utf8)?)
}

fn write_element<W: Write>(writer: &mut Writer<W>, name: &str, value: &Value) -> Result<()> {
    match value {
        Value::Array(items) => {
            for item in items {
                write_element(writer, name, item)?;
            }
        }
        Value::Null => {
            writer.write_event(Event::Empty(BytesStart::new(name)))?;
        }
        Value::Object(map) => {
            let mut start = BytesStart::new(name);
            let mut text = None;
            let mut children = Vec::new();
            for (key, child) in map {
                if let Some(attribute) = key.strip_prefix(ATTRIBUTE_PREFIX) {
                    let value = scalar_text(child).ok_or_else(|| DocumentError::InvalidShape {
                        path: format!("{name}/{key}"),
                        expected: "a scalar attribute value",
                    })?;
                    start.push_attribute((attribute, value.as_str()));
                } else if key == TEXT_KEY {
                    text = scalar_text(child);
                } else {
                    children.push((key.as_str(), child));
                }
            }

            if children.is_empty() && text.is_none() {
                writer.write_event(Event::Empty(start))?;
                return Ok(());
            }
            writer.write_event(Event::Start(start.borrow()))?;
            if let Some(text) = text {
                writer.write_event(Event::Text(BytesText::new(&text)))?;
            }
            for (key, child) in children {
                write_element(writer, key, child)?;
            }
            writer.write_event(Event::End(BytesEnd::new(name)))?;
        }
        scalar => {
            let text = scalar_text(scalar).unwrap_or_default();
            writer.write_event(Event::Start(BytesStart::new(name)))?;
            if !text.is_empty() {
                writer.write_event(Event::Text(BytesText::new(&text)))?;
            }
            writer.write_event(Event::End(BytesEnd::new(name)))?;
        }
    }
    Ok(())
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        Value::Array(_) | Value::Object(_) => None,
    }
}
