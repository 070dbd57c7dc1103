//! Helpers shared by the XML block renderer and the document format.
//!
//! Attribute values are escaped with [`crate::encoding`] and pushed as raw
//! bytes, because quick-xml's own attribute escaping leaves newlines, carriage
//! returns and tabs untouched.

use std::borrow::Cow;
use std::fmt::Display;

use quick_xml::events::BytesStart;
use quick_xml::events::attributes::Attribute;
use quick_xml::name::QName;
use xmle_model::{Location, append_location_coordinate};

use crate::encoding::append_xml_encoded_string;

/// Version written on the `<osm>` and `<osmChange>` root elements.
pub const OSM_VERSION: &str = "0.6";

/// Pushes an attribute whose value is already safe to place in markup.
pub fn push_raw_attribute(element: &mut BytesStart<'_>, name: &str, value: &str) {
    element.push_attribute(Attribute {
        key: QName(name.as_bytes()),
        value: Cow::Borrowed(value.as_bytes()),
    });
}

/// Pushes an attribute, escaping the value.
pub fn push_escaped_attribute(element: &mut BytesStart<'_>, name: &str, value: &str) {
    let mut escaped = String::with_capacity(value.len());
    append_xml_encoded_string(&mut escaped, value);
    push_raw_attribute(element, name, &escaped);
}

/// Pushes a numeric attribute.
pub fn push_int_attribute<T: Display>(element: &mut BytesStart<'_>, name: &str, value: T) {
    push_raw_attribute(element, name, &value.to_string());
}

/// Pushes the latitude and longitude of `location` under the given names.
pub fn push_lat_lon_attributes(
    element: &mut BytesStart<'_>,
    lat: &str,
    lon: &str,
    location: &Location,
) {
    let mut value = String::new();
    append_location_coordinate(&mut value, location.y());
    push_raw_attribute(element, lat, &value);

    value.clear();
    append_location_coordinate(&mut value, location.x());
    push_raw_attribute(element, lon, &value);
}

/// Converts a Rust boolean to its string representation for XML.
pub fn bool_to_string(b: bool) -> &'static str {
    if b { "true" } else { "false" }
}

/// Appends `count` spaces to `out`.
pub fn write_spaces(out: &mut Vec<u8>, count: usize) {
    out.extend(std::iter::repeat_n(b' ', count));
}
