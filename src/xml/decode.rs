use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde_json::{Map, Value};

use super::{ATTRIBUTE_PREFIX, TEXT_KEY};
use crate::error::{FormatError, Result};

struct Frame {
    name: String,
    map: Map<String, Value>,
    text: String,
}

impl Frame {
    fn new(name: String, map: Map<String, Value>) -> Self {
        Self {
            name,
            map,
            text: String::new(),
        }
    }

    fn finish(mut self) -> (String, Value) {
        let value = if self.map.is_empty() {
            Value::String(self.text)
        } else {
            if !self.text.is_empty() {
                self.map.insert(TEXT_KEY.to_owned(), Value::String(self.text));
            }
            Value::Object(self.map)
        };
        (self.name, value)
    }
}

/// Decodes XML text into a document tree, the inverse of
/// [`encode`](super::encode).
///
/// Attributes are stored under [`ATTRIBUTE_PREFIX`]ed keys, repeated sibling
/// elements are collected into arrays and text is kept as strings. An
/// element with neither children, attributes nor text decodes to `""`.
///
/// # Errors
///
/// Returns an error if the XML is malformed.
pub fn decode(xml: &str) -> Result<Value> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut stack = vec![Frame::new(String::new(), Map::new())];
    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let (name, attributes) = read_start(&e)?;
                stack.push(Frame::new(name, attributes));
            }
            Event::Empty(e) => {
                let (name, attributes) = read_start(&e)?;
                let (name, value) = Frame::new(name, attributes).finish();
                if let Some(parent) = stack.last_mut() {
                    insert_child(&mut parent.map, name, value);
                }
            }
            Event::Text(e) => {
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(&e.unescape()?);
                }
            }
            Event::CData(e) => {
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Event::End(_) => {
                if stack.len() > 1 {
                    if let Some(frame) = stack.pop() {
                        let (name, value) = frame.finish();
                        if let Some(parent) = stack.last_mut() {
                            insert_child(&mut parent.map, name, value);
                        }
                    }
                }
            }
            Event::Eof => break,
            Event::Decl(_) | Event::PI(_) | Event::Comment(_) | Event::DocType(_) => {}
        }
    }

    if stack.len() > 1 {
        let name = stack.pop().map(|f| f.name).unwrap_or_default();
        return Err(FormatError::Unclosed(name).into());
    }
    Ok(Value::Object(stack.pop().map(|f| f.map).unwrap_or_default()))
}

fn read_start(e: &BytesStart<'_>) -> Result<(String, Map<String, Value>)> {
    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let mut attributes = Map::new();
    for attribute in e.attributes() {
        let attribute = attribute.map_err(quick_xml::Error::from)?;
        let key = String::from_utf8_lossy(attribute.key.as_ref());
        let value = attribute.unescape_value()?.into_owned();
        attributes.insert(format!("{ATTRIBUTE_PREFIX}{key}"), Value::String(value));
    }
    Ok((name, attributes))
}

fn insert_child(map: &mut Map<String, Value>, name: String, value: Value) {
    match map.get_mut(&name) {
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        None => {
            map.insert(name, value);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::xml::{encode, EncodeOptions};

    #[test]
    fn reads_note() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
            <note>
              <to>Tove</to>
              <from>Jani</from>
              <heading>Reminder</heading>
              <body>Don't forget me this weekend!</body>
            </note>"#;
        assert_eq!(
            decode(xml).unwrap(),
            json!({
                "note": {
                    "to": "Tove",
                    "from": "Jani",
                    "heading": "Reminder",
                    "body": "Don't forget me this weekend!"
                }
            })
        );
    }

    #[test]
    fn attributes_and_text() {
        let xml = r#"<Track xmlns:xsi="x"><name lang="en">Loop</name><empty/></Track>"#;
        assert_eq!(
            decode(xml).unwrap(),
            json!({
                "Track": {
                    "@_xmlns:xsi": "x",
                    "name": { "@_lang": "en", "#text": "Loop" },
                    "empty": ""
                }
            })
        );
    }

    #[test]
    fn repeated_siblings_become_array() {
        let xml = "<list><item>1</item><item>2</item><item>3</item></list>";
        assert_eq!(decode(xml).unwrap(), json!({ "list": { "item": ["1", "2", "3"] } }));
    }

    #[test]
    fn encode_then_decode_keeps_structure() {
        let doc = json!({
            "Track": {
                "@_xmlns:xsi": "http://www.w3.org/2001/XMLSchema-instance",
                "name": "grid",
                "blueprints": {
                    "TrackBlueprint": [
                        { "@_xsi:type": "TrackBlueprintFlag", "itemID": "a", "purpose": "Functional" },
                        { "@_xsi:type": "TrackBlueprintFlag", "itemID": "b", "purpose": "Functional" }
                    ]
                }
            }
        });
        let xml = encode(&doc, &EncodeOptions::default()).unwrap();
        assert_eq!(decode(&xml).unwrap(), doc);
    }

    #[test]
    fn unescapes_entities() {
        let xml = r#"<d k="&quot;q&quot;">a &lt; b</d>"#;
        assert_eq!(decode(xml).unwrap(), json!({ "d": { "@_k": "\"q\"", "#text": "a < b" } }));
    }

    #[test]
    fn mismatched_tags_fail() {
        assert!(decode("<a><b></a>").is_err());
    }

    #[test]
    fn unclosed_element_fails() {
        assert!(decode("<a><b>text</b>").is_err());
    }
}
