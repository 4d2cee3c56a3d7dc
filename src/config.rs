use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{FormatError, Result};
use crate::io;
use crate::math::Vector3;
use crate::operations::dedup::DEFAULT_VARIANT_SUFFIX_LEN;
use crate::operations::normalize::DEFAULT_PRECISION;
use crate::operations::segment_line::DEFAULT_SEGMENT_UNITS;
use crate::operations::{MakeSegmentLine, NormalizeBlueprint, RemoveSuperimposed};
use crate::xml::EncodeOptions;

/// Generator settings, read from a TOML file.
///
/// Every field is optional in the file and falls back to its default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LiftupConfig {
    /// JSON template every track starts from.
    pub template_path: PathBuf,
    /// Directory receiving one folder per saved track.
    pub tracks_dir: PathBuf,
    /// Decimal places for saved positions and rotations.
    pub precision: usize,
    /// Trailing item id characters ignored when looking for duplicates.
    pub variant_suffix_len: usize,
    /// Coordinate tolerance for duplicates; `0.0` compares exactly.
    pub dedup_tolerance: f64,
    /// Segment lengths available to segment lines.
    pub segment_units: Vec<f64>,
    /// Encoding named in the XML declaration.
    pub xml_encoding: String,
    /// Indentation width of saved XML.
    pub xml_indent: usize,
}

impl Default for LiftupConfig {
    fn default() -> Self {
        Self {
            template_path: PathBuf::from("assets/template.json"),
            tracks_dir: PathBuf::from("tracks"),
            precision: DEFAULT_PRECISION,
            variant_suffix_len: DEFAULT_VARIANT_SUFFIX_LEN,
            dedup_tolerance: 0.0,
            segment_units: DEFAULT_SEGMENT_UNITS.to_vec(),
            xml_encoding: "utf-8".to_owned(),
            xml_indent: 2,
        }
    }
}

impl LiftupConfig {
    /// Loads the configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        Self::from_toml(&io::read_to_string(path)?)
    }

    /// Parses the configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML for this schema.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text).map_err(FormatError::Config)?)
    }

    /// Returns the duplicate filter described by this configuration.
    #[must_use]
    pub fn dedup(&self) -> RemoveSuperimposed {
        RemoveSuperimposed::new(self.variant_suffix_len).with_tolerance(self.dedup_tolerance)
    }

    /// Returns the normalizer described by this configuration.
    #[must_use]
    pub fn normalizer(&self) -> NormalizeBlueprint {
        NormalizeBlueprint::new(self.precision)
    }

    /// Returns a segment line between `start` and `end` using the configured units.
    #[must_use]
    pub fn segment_line(&self, variant: u8, start: Vector3, end: Vector3) -> MakeSegmentLine {
        MakeSegmentLine::new(variant, start, end).with_units(&self.segment_units)
    }

    /// Returns the XML writer settings.
    #[must_use]
    pub fn encode_options(&self) -> EncodeOptions {
        EncodeOptions {
            encoding: self.xml_encoding.clone(),
            indent: self.xml_indent,
        }
    }
}
