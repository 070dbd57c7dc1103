//! Document framing: header, per-buffer fragments and trailer.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesStart, Event};
use xmle_model::{EntityBuffer, Header};

use crate::error::{Result, SerdeError};
use crate::xml::options::XmlOutputOptions;
use crate::xml::ser::XmlBlockRenderer;
use crate::xml::utils::{
    OSM_VERSION, bool_to_string, push_escaped_attribute, push_lat_lon_attributes,
    push_raw_attribute, write_spaces,
};

/// Writes the pieces of an OSM XML or osmChange document.
///
/// All methods take `&self` and return owned strings, so one format can be
/// shared by threads rendering different buffers at the same time.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlOutputFormat {
    options: XmlOutputOptions,
}

impl XmlOutputFormat {
    pub fn new(options: XmlOutputOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &XmlOutputOptions {
        &self.options
    }

    /// Name of the document root element.
    pub fn root_name(&self) -> &'static str {
        if self.options.use_change_ops() {
            "osmChange"
        } else {
            "osm"
        }
    }

    /// XML declaration, opening root element and `<bounds>` elements.
    ///
    /// The JOSM upload flag is only written in plain (non-change) documents.
    pub fn write_header(&self, header: &Header) -> Result<String> {
        let mut writer = Writer::new(Vec::new());
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        writer.get_mut().push(b'\n');

        let mut root = BytesStart::new(self.root_name());
        push_raw_attribute(&mut root, "version", OSM_VERSION);
        if !self.options.use_change_ops()
            && let Some(upload) = header.josm_upload
        {
            push_raw_attribute(&mut root, "upload", bool_to_string(upload));
        }
        push_escaped_attribute(&mut root, "generator", &header.generator);
        writer.write_event(Event::Start(root))?;
        writer.get_mut().push(b'\n');

        for bbox in &header.boxes {
            let mut bounds = BytesStart::new("bounds");
            push_lat_lon_attributes(&mut bounds, "minlat", "minlon", &bbox.bottom_left);
            push_lat_lon_attributes(&mut bounds, "maxlat", "maxlon", &bbox.top_right);
            write_spaces(writer.get_mut(), 2);
            writer.write_event(Event::Empty(bounds))?;
            writer.get_mut().push(b'\n');
        }

        String::from_utf8(writer.into_inner()).map_err(|e| SerdeError::Custom(e.to_string()))
    }

    /// Renders one buffer into a fragment.
    pub fn write_buffer(&self, buffer: &EntityBuffer) -> Result<String> {
        XmlBlockRenderer::new(self.options).render(buffer)
    }

    /// Closing root element.
    pub fn write_end(&self) -> String {
        format!("</{}>\n", self.root_name())
    }
}
