//! xmle: newline-delimited JSON OSM entities to OSM XML or osmChange.

use std::fs::File;
use std::io::{self, BufReader, BufWriter};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use xmle_cli::{Config, convert, init_logging};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    if config.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .build_global()
            .context("Failed to configure worker threads")?;
    }

    info!(
        input = ?config.input_path(),
        output = ?config.output_path(),
        change_format = config.change_format,
        add_metadata = %config.add_metadata,
        threads = rayon::current_num_threads(),
        "Starting conversion"
    );

    let reader: Box<dyn io::BufRead> = match config.input_path() {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let summary = match config.output_path() {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            convert(&config, reader, BufWriter::new(file))?
        }
        None => convert(&config, reader, BufWriter::new(io::stdout().lock()))?,
    };

    info!(
        lines = summary.lines,
        buffers = summary.buffers,
        entities = summary.entities,
        "Conversion finished"
    );
    Ok(())
}
