//! Conversion of newline-delimited JSON entities into OSM XML documents.
//!
//! The `xmle` binary is a thin wrapper around [`convert`]: input lines are
//! grouped into buffers, batches of buffers are rendered in parallel and the
//! fragments are written in input order.

pub mod config;

use std::io::{BufRead, Write};

use anyhow::Context;
use tracing::{debug, info};
use xmle_model::EntityBuffer;
use xmle_serde::{NdjsonBufferReader, XmlDocumentWriter, XmlOutputOptions};

pub use config::Config;

/// Counts reported after a successful conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    pub lines: usize,
    pub buffers: usize,
    pub entities: usize,
}

/// Reads all entities from `reader` and writes one document to `writer`.
///
/// Nothing is written for a batch that fails to render; the error is
/// returned and the document is left unterminated.
pub fn convert<R, W>(config: &Config, reader: R, writer: W) -> anyhow::Result<ConversionSummary>
where
    R: BufRead,
    W: Write,
{
    let options = XmlOutputOptions::from_settings(&config.file_settings())
        .context("Invalid output settings")?;
    let header = config.header().context("Invalid header settings")?;

    let mut document = XmlDocumentWriter::new(writer, options);
    document.write_header(&header)?;

    let mut input = NdjsonBufferReader::new(reader, config.buffer_config());
    let mut batch: Vec<EntityBuffer> = Vec::with_capacity(config.batch_size);
    for buffer in input.by_ref() {
        batch.push(buffer.context("Failed to read input")?);
        if batch.len() >= config.batch_size {
            write_batch(&mut document, &mut batch)?;
        }
    }
    write_batch(&mut document, &mut batch)?;

    let summary = ConversionSummary {
        lines: input.line_number(),
        buffers: document.buffers_written(),
        entities: document.entities_written(),
    };
    document.finish()?;
    Ok(summary)
}

fn write_batch<W: Write>(
    document: &mut XmlDocumentWriter<W>,
    batch: &mut Vec<EntityBuffer>,
) -> anyhow::Result<()> {
    if batch.is_empty() {
        return Ok(());
    }
    debug!(buffers = batch.len(), "Rendering batch");
    document
        .write_buffers(batch)
        .context("Failed to render batch")?;
    batch.clear();
    Ok(())
}

/// Initializes the tracing subscriber, logging to stderr.
///
/// `RUST_LOG` takes precedence over `level` when set.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "xmle={level},xmle_cli={level},xmle_serde={level},xmle_model={level}"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
    info!(level, "Logging initialized");
}
