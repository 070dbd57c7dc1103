//! Newline-delimited JSON input and output for entity buffers.
//!
//! Every non-empty line holds one entity tagged with its `"type"`. Lines are
//! grouped into [`EntityBuffer`]s of a configurable size, which is the unit
//! the XML writer renders in parallel.

use std::io::{BufRead, Lines};

use tracing::{debug, warn};
use xmle_model::{Entity, EntityBuffer};

use crate::error::{Result, SerdeError};

/// Configuration for [`NdjsonBufferReader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferConfig {
    /// Maximum number of entities per buffer.
    pub buffer_size: usize,
    /// Log and skip lines that are not valid entities instead of failing.
    pub skip_invalid_lines: bool,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            buffer_size: 1000,
            skip_invalid_lines: false,
        }
    }
}

/// Reads entity buffers from newline-delimited JSON.
pub struct NdjsonBufferReader<R: BufRead> {
    lines: Lines<R>,
    config: BufferConfig,
    line_number: usize,
    buffer_index: usize,
    finished: bool,
}

impl<R: BufRead> NdjsonBufferReader<R> {
    pub fn new(reader: R, config: BufferConfig) -> Self {
        Self {
            lines: reader.lines(),
            config,
            line_number: 0,
            buffer_index: 0,
            finished: false,
        }
    }

    /// Number of lines read so far.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    fn fail(&mut self, err: SerdeError) -> Option<Result<EntityBuffer>> {
        self.finished = true;
        Some(Err(err))
    }
}

impl<R: BufRead> Iterator for NdjsonBufferReader<R> {
    type Item = Result<EntityBuffer>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let capacity = self.config.buffer_size.max(1);
        let mut buffer = EntityBuffer::with_capacity(capacity);

        while buffer.len() < capacity {
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(e)) => return self.fail(e.into()),
                None => {
                    self.finished = true;
                    break;
                }
            };
            self.line_number += 1;

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match serde_json::from_str::<Entity>(line) {
                Ok(entity) => buffer.push(entity),
                Err(source) if self.config.skip_invalid_lines => {
                    warn!(line = self.line_number, error = %source, "Skipping invalid entity");
                }
                Err(source) => {
                    let line = self.line_number;
                    return self.fail(SerdeError::JsonLine { line, source });
                }
            }
        }

        if buffer.is_empty() {
            return None;
        }

        debug!(
            buffer = self.buffer_index,
            entities = buffer.len(),
            "Read entity buffer"
        );
        self.buffer_index += 1;
        Some(Ok(buffer))
    }
}

/// Serializes a buffer as newline-delimited JSON, one entity per line.
pub fn to_ndjson_string(buffer: &EntityBuffer) -> Result<String> {
    let mut out = String::new();
    for entity in buffer {
        out.push_str(&serde_json::to_string(entity)?);
        out.push('\n');
    }
    Ok(out)
}
