//! Command line configuration for the `xmle` converter.
//!
//! Every option can also be given through an environment variable.
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `XMLE_ADD_METADATA` | all | Metadata attributes to write |
//! | `XMLE_CHANGE_FORMAT` | false | Write an osmChange document |
//! | `XMLE_FORCE_VISIBLE_FLAG` | false | Always write `visible` |
//! | `XMLE_MULTIPLE_VERSIONS` | false | Input has several versions per object |
//! | `XMLE_LOCATIONS_ON_WAYS` | false | Write locations on way node refs |
//! | `XMLE_GENERATOR` | xmle/VERSION | Generator attribute |
//! | `XMLE_BBOX` | | Bounding boxes, separated by `;` |
//! | `XMLE_JOSM_UPLOAD` | | JOSM upload flag |
//! | `XMLE_BUFFER_SIZE` | 1000 | Entities per buffer |
//! | `XMLE_BATCH_SIZE` | 16 | Buffers rendered in parallel |
//! | `XMLE_THREADS` | 0 | Worker threads, 0 for one per core |
//! | `XMLE_SKIP_INVALID_LINES` | false | Skip undecodable input lines |
//! | `XMLE_LOG_LEVEL` | info | Log level |

use std::path::PathBuf;

use clap::Parser;
use xmle_model::{BoundingBox, Header, MetadataOptions};
use xmle_serde::{BufferConfig, FileSettings};

/// Converter configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "xmle")]
#[command(about = "Convert newline-delimited JSON OSM entities to OSM XML")]
#[command(version)]
pub struct Config {
    /// Input file with one JSON entity per line. Reads stdin if omitted or `-`.
    pub input: Option<PathBuf>,

    /// Output file. Writes stdout if omitted or `-`.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Metadata to write: all, none, or a `+` separated list of
    /// version, timestamp, changeset, uid and user.
    #[arg(long, env = "XMLE_ADD_METADATA", default_value = "all")]
    pub add_metadata: String,

    /// Write an osmChange document.
    #[arg(long, env = "XMLE_CHANGE_FORMAT")]
    pub change_format: bool,

    /// Write the visible attribute on every object.
    #[arg(long, env = "XMLE_FORCE_VISIBLE_FLAG")]
    pub force_visible_flag: bool,

    /// The input contains several versions of the same objects.
    #[arg(long, env = "XMLE_MULTIPLE_VERSIONS")]
    pub multiple_versions: bool,

    /// Write node locations on the node references of ways.
    #[arg(long, env = "XMLE_LOCATIONS_ON_WAYS")]
    pub locations_on_ways: bool,

    /// Generator written on the root element.
    #[arg(long, env = "XMLE_GENERATOR")]
    pub generator: Option<String>,

    /// Bounding box as `minlon,minlat,maxlon,maxlat`. Can be repeated.
    #[arg(long, env = "XMLE_BBOX", value_delimiter = ';')]
    pub bbox: Vec<String>,

    /// JOSM upload flag (true or false), only written in plain documents.
    #[arg(long, env = "XMLE_JOSM_UPLOAD")]
    pub josm_upload: Option<bool>,

    /// Number of entities per buffer.
    #[arg(long, env = "XMLE_BUFFER_SIZE", default_value = "1000")]
    pub buffer_size: usize,

    /// Number of buffers rendered in parallel before writing.
    #[arg(long, env = "XMLE_BATCH_SIZE", default_value = "16")]
    pub batch_size: usize,

    /// Worker threads for rendering, 0 uses one per core.
    #[arg(long, env = "XMLE_THREADS", default_value = "0")]
    pub threads: usize,

    /// Log and skip input lines that are not valid entities.
    #[arg(long, env = "XMLE_SKIP_INVALID_LINES")]
    pub skip_invalid_lines: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "XMLE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            add_metadata: "all".to_string(),
            change_format: false,
            force_visible_flag: false,
            multiple_versions: false,
            locations_on_ways: false,
            generator: None,
            bbox: Vec::new(),
            josm_upload: None,
            buffer_size: 1000,
            batch_size: 16,
            threads: 0,
            skip_invalid_lines: false,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if let Err(e) = self.add_metadata.parse::<MetadataOptions>() {
            errors.push(e.to_string());
        }

        for bbox in &self.bbox {
            if let Err(e) = bbox.parse::<BoundingBox>() {
                errors.push(e.to_string());
            }
        }

        if self.buffer_size == 0 {
            errors.push("Buffer size cannot be 0".to_string());
        }

        if self.batch_size == 0 {
            errors.push("Batch size cannot be 0".to_string());
        }

        if !matches!(
            self.log_level.as_str(),
            "error" | "warn" | "info" | "debug" | "trace"
        ) {
            errors.push(format!("Unknown log level '{}'", self.log_level));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Settings handed to the XML writer.
    pub fn file_settings(&self) -> FileSettings {
        FileSettings {
            add_metadata: self.add_metadata.clone(),
            xml_change_format: self.change_format,
            force_visible_flag: self.force_visible_flag,
            has_multiple_object_versions: self.multiple_versions,
            locations_on_ways: self.locations_on_ways,
        }
    }

    /// Document header from the generator, bounding boxes and upload flag.
    pub fn header(&self) -> Result<Header, xmle_model::ModelError> {
        let mut header = match &self.generator {
            Some(generator) => Header::with_generator(generator.clone()),
            None => Header::default(),
        };
        for bbox in &self.bbox {
            header.add_box(bbox.parse()?);
        }
        header.josm_upload = self.josm_upload;
        Ok(header)
    }

    pub fn buffer_config(&self) -> BufferConfig {
        BufferConfig {
            buffer_size: self.buffer_size,
            skip_invalid_lines: self.skip_invalid_lines,
        }
    }

    /// Input path, `None` for stdin.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|p| p.as_os_str() != "-")
    }

    /// Output path, `None` for stdout.
    pub fn output_path(&self) -> Option<&PathBuf> {
        self.output.as_ref().filter(|p| p.as_os_str() != "-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.add_metadata, "all");
        assert_eq!(config.buffer_size, 1000);
        assert!(!config.change_format);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_arguments() {
        let config = Config::try_parse_from([
            "xmle",
            "in.ndjson",
            "-o",
            "out.osc",
            "--change-format",
            "--add-metadata",
            "version+user",
            "--bbox",
            "1,2,3,4",
            "--bbox",
            "5,6,7,8",
            "--josm-upload",
            "false",
        ])
        .unwrap();
        assert_eq!(config.input, Some(PathBuf::from("in.ndjson")));
        assert_eq!(config.output, Some(PathBuf::from("out.osc")));
        assert!(config.change_format);
        assert_eq!(config.bbox, vec!["1,2,3,4", "5,6,7,8"]);
        assert_eq!(config.josm_upload, Some(false));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = Config {
            add_metadata: "version+colour".to_string(),
            bbox: vec!["1,2,3".to_string()],
            buffer_size: 0,
            batch_size: 0,
            log_level: "loud".to_string(),
            ..Default::default()
        };
        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(errors.iter().any(|e| e.contains("Buffer size")));
        assert!(errors.iter().any(|e| e.contains("loud")));
    }

    #[test]
    fn test_file_settings() {
        let config = Config {
            add_metadata: "none".to_string(),
            multiple_versions: true,
            locations_on_ways: true,
            ..Default::default()
        };
        let settings = config.file_settings();
        assert_eq!(settings.add_metadata, "none");
        assert!(settings.has_multiple_object_versions);
        assert!(settings.locations_on_ways);
        assert!(!settings.xml_change_format);
    }

    #[test]
    fn test_header() {
        let config = Config {
            generator: Some("my tool".to_string()),
            bbox: vec!["2,1,4,3".to_string()],
            josm_upload: Some(true),
            ..Default::default()
        };
        let header = config.header().unwrap();
        assert_eq!(header.generator, "my tool");
        assert_eq!(header.boxes.len(), 1);
        assert_eq!(header.josm_upload, Some(true));
    }

    #[test]
    fn test_dash_means_standard_streams() {
        let config = Config {
            input: Some(PathBuf::from("-")),
            output: Some(PathBuf::from("out.osm")),
            ..Default::default()
        };
        assert!(config.input_path().is_none());
        assert_eq!(config.output_path(), Some(&PathBuf::from("out.osm")));
    }
}
