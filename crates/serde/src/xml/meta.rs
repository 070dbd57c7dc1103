//! Selection of the metadata attributes written on an object.

use xmle_model::OsmObject;

use crate::xml::options::XmlOutputOptions;
use crate::xml::utils::bool_to_string;

/// Returns the `(name, value)` attributes to write for `object`.
///
/// The order is fixed: id, version, timestamp, uid, user, changeset,
/// visible. `id` is always present. Every other attribute is left out when
/// its category is disabled in the options or when the object does not have
/// a value for it. `visible` is only written when the options ask for it.
///
/// Values are returned unescaped.
pub fn metadata_attributes<O>(options: &XmlOutputOptions, object: &O) -> Vec<(&'static str, String)>
where
    O: OsmObject + ?Sized,
{
    let meta = object.meta();
    let present = options.add_metadata().present_in(meta);

    let mut attributes = Vec::with_capacity(7);
    attributes.push(("id", object.id().to_string()));

    if present.version() {
        attributes.push(("version", meta.version.to_string()));
    }
    if present.timestamp() {
        attributes.push(("timestamp", meta.timestamp.to_iso_all()));
    }
    if present.uid() {
        attributes.push(("uid", meta.uid.to_string()));
    }
    if present.user() {
        attributes.push(("user", meta.user.clone()));
    }
    if present.changeset() {
        attributes.push(("changeset", meta.changeset.to_string()));
    }
    if options.add_visible_flag() {
        attributes.push(("visible", bool_to_string(object.visible()).to_string()));
    }

    attributes
}
