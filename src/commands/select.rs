use crate::config::{Config, Destination};
use crate::error::SelpgError;
use crate::paging::{check_range, stream, OutputSink, PipeSink, StreamReport, StreamSink};
use anyhow::{Context, Result};
use log::info;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

/// Run one selection: open the input, open the sink, stream the requested
/// pages, then check the range against what the input actually held.
pub fn run(config: &Config) -> Result<StreamReport> {
    let input: Box<dyn BufRead> = match &config.input {
        Some(path) => {
            if !path
                .try_exists()
                .map_err(|e| SelpgError::io("stat input", e))?
            {
                return Err(SelpgError::InputNotFound { path: path.clone() }.into());
            }
            let file = File::open(path)
                .map_err(|e| SelpgError::io("open input", e))
                .with_context(|| format!("Failed to open {}", path.display()))?;
            info!("reading {}", path.display());
            Box::new(BufReader::new(file))
        }
        None => {
            info!("reading stdin");
            Box::new(io::stdin().lock())
        }
    };

    let sink: Box<dyn OutputSink> = match &config.destination {
        Destination::Stdout => Box::new(StreamSink::stdout()),
        Destination::Printer { name, spooler } => Box::new(PipeSink::printer(spooler, name)?),
    };

    select(config, input, sink)
}

/// Stream from an opened input into an opened sink. The sink is released on
/// every return path, so a spooler always sees end of input.
fn select(
    config: &Config,
    input: Box<dyn BufRead>,
    mut sink: Box<dyn OutputSink>,
) -> Result<StreamReport> {
    let report = stream(config.range, config.mode, input, sink.as_mut())?;
    sink.finish()?;
    info!(
        "wrote {} of {} units ({} bytes), last page {}",
        report.units_written, report.units_read, report.bytes_written, report.last_page
    );

    check_range(config.range, &report)?;
    Ok(report)
}
