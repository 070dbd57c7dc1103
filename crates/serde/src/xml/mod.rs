//! XML serialization of OpenStreetMap entity buffers.
//!
//! This module writes OSM XML (`<osm>`) and osmChange (`<osmChange>`)
//! documents, extended with `<area>` elements for polygons.
//!
//! ## Architecture
//!
//! - **Block renderer** ([`XmlBlockRenderer`]): turns one [`EntityBuffer`]
//!   into a self-contained fragment. It is a plain function of the buffer and
//!   the options, holds no state between buffers, and knows nothing about
//!   threads.
//! - **Output format** ([`XmlOutputFormat`]): writes the header, renders
//!   buffers and writes the trailer.
//! - **Document writer** ([`XmlDocumentWriter`]): renders batches of buffers
//!   in parallel and writes the fragments in their original order.
//!
//! ## Element shapes
//!
//! ```xml
//! <node id="5" version="1" lat="1" lon="2">
//!   <tag k="amenity" v="cafe"/>
//! </node>
//! <way id="7">
//!   <nd ref="5"/>
//! </way>
//! <relation id="9">
//!   <member type="node" ref="5" role="stop"/>
//! </relation>
//! <area id="14">
//!   <outer_ring>
//!     <nd ref="1" lat="0" lon="0"/>
//!     <inner_ring>
//!       <nd ref="5" lat="0.1" lon="0.1"/>
//!     </inner_ring>
//!   </outer_ring>
//! </area>
//! ```
//!
//! Entities without tags and without children are written as empty
//! elements (`<node id="5"/>`).
//!
//! ## Change format
//!
//! With [`XmlOutputOptions::with_change_ops`] every object is listed under
//! `<delete>` if deleted, `<create>` if it is version 1, and `<modify>`
//! otherwise. Consecutive objects with the same operation share one
//! operation element. Changesets are never wrapped.
//!
//! ## Examples
//!
//! ```ignore
//! use xmle_serde::xml::{XmlOutputOptions, to_xml_string};
//! use xmle_model::{EntityBuffer, Header, Node};
//!
//! let mut buffer = EntityBuffer::new();
//! buffer.push(Node { id: 5, ..Default::default() });
//! let xml = to_xml_string(&Header::default(), &[buffer], XmlOutputOptions::new())?;
//! ```
//!
//! [`EntityBuffer`]: xmle_model::EntityBuffer

pub mod document;
pub mod format;
pub mod meta;
pub mod options;
pub mod ser;
mod utils;

pub use document::{XmlDocumentWriter, to_xml_string, to_xml_vec, to_xml_writer};
pub use format::XmlOutputFormat;
pub use meta::metadata_attributes;
pub use options::{FileSettings, XmlOutputOptions};
pub use ser::{Operation, OperationState, Transition, XmlBlockRenderer};
