//! # xmle entity model
//!
//! In-memory representation of OpenStreetMap data as handed to the xmle
//! writers: nodes, ways, relations, areas and changesets, plus the document
//! header and the metadata selection used when writing.
//!
//! Entities are plain owned values. They are produced by a decoder, grouped
//! into [`EntityBuffer`]s and only read afterwards. Every type implements
//! `serde::Serialize`/`Deserialize`, which is how the command line tool
//! reads entities from newline-delimited JSON:
//!
//! ```json
//! {"type": "node", "id": 5, "version": 1, "location": {"lat": 1.0, "lon": 2.0}, "tags": {"amenity": "cafe"}}
//! {"type": "way", "id": 7, "nodes": [{"ref": 5}, {"ref": 6}]}
//! {"type": "relation", "id": 9, "members": [{"type": "node", "ref": 5, "role": "stop"}]}
//! {"type": "area", "id": 14, "outer_rings": [{"nodes": [{"ref": 5}], "inner_rings": [{"nodes": [{"ref": 6}]}]}]}
//! ```

pub mod area;
pub mod bounds;
pub mod changeset;
pub mod entity;
pub mod error;
pub mod header;
pub mod item_type;
pub mod location;
pub mod metadata_options;
pub mod object;
pub mod tag;
pub mod timestamp;

pub use area::{Area, InnerRing, OuterRing, area_id_to_object_id, object_id_to_area_id};
pub use bounds::BoundingBox;
pub use changeset::{Changeset, ChangesetComment};
pub use entity::{Entity, EntityBuffer};
pub use error::{ModelError, Result};
pub use header::Header;
pub use item_type::ItemType;
pub use location::{
    COORDINATE_PRECISION, LatLon, Location, UNDEFINED_COORDINATE, append_location_coordinate,
    format_location_coordinate,
};
pub use metadata_options::MetadataOptions;
pub use object::{
    ChangesetId, Member, Metadata, Node, NodeRef, ObjectId, ObjectVersion, OsmObject, Relation,
    UserId, Way,
};
pub use tag::{Tag, TagList};
pub use timestamp::Timestamp;
