//! Assembling complete documents from many buffers.
//!
//! Buffers are rendered in parallel on the rayon thread pool. Fragments are
//! collected in buffer order before anything is written, so the output does
//! not depend on which thread finishes first.

use std::io::Write;

use rayon::prelude::*;
use tracing::{debug, info};
use xmle_model::{EntityBuffer, Header};

use crate::error::{Result, SerdeError};
use crate::xml::format::XmlOutputFormat;
use crate::xml::options::XmlOutputOptions;

/// Writes one document: a header, any number of buffers, then the trailer.
pub struct XmlDocumentWriter<W: Write> {
    format: XmlOutputFormat,
    writer: W,
    header_written: bool,
    buffers_written: usize,
    entities_written: usize,
}

impl<W: Write> XmlDocumentWriter<W> {
    pub fn new(writer: W, options: XmlOutputOptions) -> Self {
        Self {
            format: XmlOutputFormat::new(options),
            writer,
            header_written: false,
            buffers_written: 0,
            entities_written: 0,
        }
    }

    pub fn format(&self) -> &XmlOutputFormat {
        &self.format
    }

    pub fn buffers_written(&self) -> usize {
        self.buffers_written
    }

    pub fn entities_written(&self) -> usize {
        self.entities_written
    }

    pub fn write_header(&mut self, header: &Header) -> Result<()> {
        if self.header_written {
            return Err(SerdeError::Custom("document header already written".to_string()));
        }
        let out = self.format.write_header(header)?;
        self.writer.write_all(out.as_bytes())?;
        self.header_written = true;
        info!(
            root = self.format.root_name(),
            generator = %header.generator,
            "Started document"
        );
        Ok(())
    }

    /// Renders and writes a single buffer on the calling thread.
    pub fn write_buffer(&mut self, buffer: &EntityBuffer) -> Result<()> {
        self.ensure_header()?;
        let fragment = self.format.write_buffer(buffer)?;
        self.writer.write_all(fragment.as_bytes())?;
        self.buffers_written += 1;
        self.entities_written += buffer.len();
        Ok(())
    }

    /// Renders `buffers` in parallel and writes the fragments in order.
    ///
    /// If any buffer fails to render, nothing of the batch is written.
    pub fn write_buffers(&mut self, buffers: &[EntityBuffer]) -> Result<()> {
        self.ensure_header()?;
        let format = &self.format;
        let fragments = buffers
            .par_iter()
            .map(|buffer| format.write_buffer(buffer))
            .collect::<Result<Vec<String>>>()?;

        let mut bytes = 0;
        for fragment in &fragments {
            self.writer.write_all(fragment.as_bytes())?;
            bytes += fragment.len();
        }

        let entities: usize = buffers.iter().map(EntityBuffer::len).sum();
        self.buffers_written += buffers.len();
        self.entities_written += entities;
        debug!(buffers = buffers.len(), entities, bytes, "Wrote batch");
        Ok(())
    }

    /// Writes the closing root element, flushes, and returns the writer.
    pub fn finish(mut self) -> Result<W> {
        self.ensure_header()?;
        self.writer.write_all(self.format.write_end().as_bytes())?;
        self.writer.flush()?;
        info!(
            buffers = self.buffers_written,
            entities = self.entities_written,
            "Finished document"
        );
        Ok(self.writer)
    }

    fn ensure_header(&self) -> Result<()> {
        if self.header_written {
            Ok(())
        } else {
            Err(SerdeError::Custom(
                "document header must be written first".to_string(),
            ))
        }
    }
}

/// Serializes a complete document to a writer.
pub fn to_xml_writer<W: Write>(
    header: &Header,
    buffers: &[EntityBuffer],
    options: XmlOutputOptions,
    writer: W,
) -> Result<W> {
    let mut document = XmlDocumentWriter::new(writer, options);
    document.write_header(header)?;
    document.write_buffers(buffers)?;
    document.finish()
}

/// Serializes a complete document to a byte vector.
pub fn to_xml_vec(
    header: &Header,
    buffers: &[EntityBuffer],
    options: XmlOutputOptions,
) -> Result<Vec<u8>> {
    to_xml_writer(header, buffers, options, Vec::new())
}

/// Serializes a complete document to a string.
pub fn to_xml_string(
    header: &Header,
    buffers: &[EntityBuffer],
    options: XmlOutputOptions,
) -> Result<String> {
    let buffer = to_xml_vec(header, buffers, options)?;
    String::from_utf8(buffer).map_err(|e| SerdeError::Custom(e.to_string()))
}
