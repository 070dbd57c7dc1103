//! Output options for the XML writer.

use serde::{Deserialize, Serialize};
use xmle_model::MetadataOptions;

use crate::error::Result;

/// File-level settings as given by the user, before resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSettings {
    /// Metadata selection, see [`MetadataOptions`] for the accepted forms.
    pub add_metadata: String,
    /// Write an osmChange document with `<create>`, `<modify>` and `<delete>`.
    pub xml_change_format: bool,
    /// Write `visible="true|false"` on every object.
    pub force_visible_flag: bool,
    /// The data may contain several versions of the same object.
    pub has_multiple_object_versions: bool,
    /// Write node locations on the `<nd>` elements of ways.
    pub locations_on_ways: bool,
}

/// Resolved options, constant for a whole document.
///
/// The visible flag is never written in change format: an object's
/// visibility is already given by the operation it is listed under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct XmlOutputOptions {
    add_metadata: MetadataOptions,
    add_visible_flag: bool,
    use_change_ops: bool,
    locations_on_ways: bool,
}

impl XmlOutputOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves user settings into output options.
    pub fn from_settings(settings: &FileSettings) -> Result<Self> {
        let add_metadata = settings.add_metadata.parse::<MetadataOptions>()?;
        Ok(Self::new()
            .with_metadata(add_metadata)
            .with_change_ops(settings.xml_change_format)
            .with_visible_flag(
                settings.has_multiple_object_versions || settings.force_visible_flag,
            )
            .with_locations_on_ways(settings.locations_on_ways))
    }

    pub fn with_metadata(mut self, add_metadata: MetadataOptions) -> Self {
        self.add_metadata = add_metadata;
        self
    }

    pub fn with_visible_flag(mut self, enabled: bool) -> Self {
        self.add_visible_flag = enabled;
        self
    }

    pub fn with_change_ops(mut self, enabled: bool) -> Self {
        self.use_change_ops = enabled;
        self
    }

    pub fn with_locations_on_ways(mut self, enabled: bool) -> Self {
        self.locations_on_ways = enabled;
        self
    }

    pub fn add_metadata(&self) -> MetadataOptions {
        self.add_metadata
    }

    pub fn add_visible_flag(&self) -> bool {
        self.add_visible_flag && !self.use_change_ops
    }

    pub fn use_change_ops(&self) -> bool {
        self.use_change_ops
    }

    pub fn locations_on_ways(&self) -> bool {
        self.locations_on_ways
    }
}
