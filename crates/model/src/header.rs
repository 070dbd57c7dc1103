//! Document-level information written before any entity.

use serde::{Deserialize, Serialize};

use crate::bounds::BoundingBox;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Header {
    /// Name of the program that produced the data.
    pub generator: String,
    /// Areas the data covers.
    pub boxes: Vec<BoundingBox>,
    /// JOSM `upload` flag, written only when set.
    pub josm_upload: Option<bool>,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            generator: concat!("xmle/", env!("CARGO_PKG_VERSION")).to_string(),
            boxes: Vec::new(),
            josm_upload: None,
        }
    }
}

impl Header {
    pub fn with_generator(generator: impl Into<String>) -> Self {
        Self {
            generator: generator.into(),
            ..Default::default()
        }
    }

    pub fn add_box(&mut self, bbox: BoundingBox) -> &mut Self {
        self.boxes.push(bbox);
        self
    }
}
