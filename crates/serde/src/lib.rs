//! # xmle Serialization Module
//!
//! This crate writes in-memory OpenStreetMap entities as OSM XML and
//! osmChange documents, extended with `<area>` elements.
//!
//! ## Features
//!
//! - **XML Support** (`xml`, enabled by default): a streaming block renderer
//!   built on quick-xml events, document framing, and an ordered parallel
//!   document writer.
//! - **NDJSON Input**: a buffered reader turning newline-delimited JSON into
//!   [`EntityBuffer`](xmle_model::EntityBuffer)s.
//! - **Encoding Primitives**: XML, percent and debug escaping of strings.
//!
//! ## Architecture
//!
//! Rendering is split at the buffer: the renderer turns one buffer into one
//! fragment and has no knowledge of scheduling. The document writer owns the
//! parallelism and puts fragments back into buffer order.
//!
//! ## Examples
//!
//! ```ignore
//! use std::io::BufReader;
//! use xmle_serde::json::{BufferConfig, NdjsonBufferReader};
//! use xmle_serde::xml::{XmlDocumentWriter, XmlOutputOptions};
//!
//! let reader = NdjsonBufferReader::new(BufReader::new(input), BufferConfig::default());
//! let mut document = XmlDocumentWriter::new(std::io::stdout(), XmlOutputOptions::new());
//! document.write_header(&header)?;
//! for buffer in reader {
//!     document.write_buffer(&buffer?)?;
//! }
//! document.finish()?;
//! ```

pub mod encoding;
pub mod error;
pub mod json;

#[cfg(feature = "xml")]
pub mod xml;

// Re-export common types and functions
pub use error::{Result, SerdeError};

pub use encoding::{
    append_debug_encoded_string, append_utf8_encoded_string, append_xml_encoded_string,
    xml_encode,
};
pub use json::{BufferConfig, NdjsonBufferReader, to_ndjson_string};

#[cfg(feature = "xml")]
pub use xml::{
    FileSettings, XmlBlockRenderer, XmlDocumentWriter, XmlOutputFormat, XmlOutputOptions,
    to_xml_string, to_xml_vec, to_xml_writer,
};
