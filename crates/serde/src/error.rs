//! Error types for OSM serialization.
//!
//! Rendering itself has a single data error, [`SerdeError::InvalidMemberType`].
//! It is raised when a relation member refers to a kind of object that has
//! no `<member type="...">` name. Rendering is deterministic, so the error is
//! returned to the caller and never retried.

use thiserror::Error;
use xmle_model::{ItemType, ModelError, ObjectId};

/// Error types for entity serialization and input decoding.
#[derive(Error, Debug)]
pub enum SerdeError {
    /// JSON serialization or deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A line of newline-delimited JSON input that could not be decoded
    #[error("invalid entity on line {line}: {source}")]
    JsonLine {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// XML writer error
    #[cfg(feature = "xml")]
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// IO error during serialization/deserialization
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A relation member whose type cannot be written
    #[error("relation {relation} member {index} has type {item_type}, which is not a member type")]
    InvalidMemberType {
        relation: ObjectId,
        index: usize,
        item_type: ItemType,
    },

    /// Invalid model value, such as an unknown metadata option
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Custom error message
    #[error("{0}")]
    Custom(String),
}

impl From<String> for SerdeError {
    fn from(msg: String) -> Self {
        SerdeError::Custom(msg)
    }
}

impl From<&str> for SerdeError {
    fn from(msg: &str) -> Self {
        SerdeError::Custom(msg.to_string())
    }
}

/// Result type alias for serialization operations
pub type Result<T> = std::result::Result<T, SerdeError>;
