//! Error types for the entity model.

use thiserror::Error;

/// Errors raised while building or parsing model values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A timestamp string that is not RFC 3339, or lies before 1970 or after 2106.
    #[error("invalid timestamp: {0:?}")]
    InvalidTimestamp(String),

    /// An unknown name in a metadata option list.
    #[error("unknown metadata option {0:?} (expected version, timestamp, changeset, uid or user)")]
    InvalidMetadataOption(String),

    /// A bounding box that is not four comma separated coordinates.
    #[error("invalid bounding box {0:?} (expected minlon,minlat,maxlon,maxlat)")]
    InvalidBoundingBox(String),

    /// A latitude outside -90..=90 or a longitude outside -180..=180.
    #[error("invalid location: lat {lat}, lon {lon}")]
    InvalidLocation { lat: String, lon: String },

    /// An item type name that is not known.
    #[error("unknown item type: {0:?}")]
    InvalidItemType(String),
}

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
