use crate::cli::{Cli, DEFAULT_PAGE_LENGTH};
use crate::error::ValidationError;
use crate::page_range::PageRange;
use std::fmt;
use std::path::PathBuf;

/// How form-feed delimited chunks are numbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFeedNumbering {
    /// First chunk is page 1.
    Corrected,
    /// The counter advances before each chunk is checked, so the first chunk
    /// is page 2, and once more for the final end-of-stream read.
    Legacy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagingMode {
    Lines { page_length: u64 },
    FormFeed { numbering: FormFeedNumbering },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    Printer { name: String, spooler: String },
}

/// Validated, immutable settings for one selection run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub range: PageRange,
    pub mode: PagingMode,
    pub input: Option<PathBuf>,
    pub destination: Destination,
}

/// Outcome of resolving command-line arguments.
#[derive(Debug, PartialEq, Eq)]
pub enum Resolved {
    /// The page range was not given; the caller should print usage and stop.
    Usage,
    Run(Config),
}

/// Turn parsed arguments into a `Config`. Checks run in a fixed order and the
/// first failing check wins.
pub fn resolve(cli: Cli) -> Result<Resolved, ValidationError> {
    let (start, end) = match (cli.start_page, cli.end_page) {
        (Some(start), Some(end)) => (start, end),
        _ => return Ok(Resolved::Usage),
    };

    let range = PageRange::new(start, end)?;

    if cli.form_feed && cli.page_length != DEFAULT_PAGE_LENGTH {
        return Err(ValidationError::ConflictingPaging {
            page_length: cli.page_length,
        });
    }
    if cli.page_length <= 0 {
        return Err(ValidationError::PageLengthTooSmall {
            page_length: cli.page_length,
        });
    }

    let mode = if cli.form_feed {
        let numbering = if cli.legacy_ff_count {
            FormFeedNumbering::Legacy
        } else {
            FormFeedNumbering::Corrected
        };
        PagingMode::FormFeed { numbering }
    } else {
        PagingMode::Lines {
            page_length: cli.page_length as u64,
        }
    };

    let destination = match cli.dest {
        Some(name) if !name.is_empty() => Destination::Printer {
            name,
            spooler: cli.spooler,
        },
        _ => Destination::Stdout,
    };

    Ok(Resolved::Run(Config {
        range,
        mode,
        input: cli.input.filter(|p| !p.as_os_str().is_empty()),
        destination,
    }))
}

/// Human-readable summary of the resolved settings.
impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "-".repeat(50))?;
        writeln!(f, "startPage: {}", self.range.start)?;
        writeln!(f, "endPage: {}", self.range.end)?;
        match &self.input {
            Some(path) => writeln!(f, "inputFile: {}", path.display())?,
            None => writeln!(f, "inputFile: stdin")?,
        }
        match self.mode {
            PagingMode::Lines { page_length } => {
                writeln!(f, "pageLength: {}", page_length)?;
                writeln!(f, "pageType: page length")?;
            }
            PagingMode::FormFeed { numbering } => {
                writeln!(f, "pageLength: according to end sign")?;
                match numbering {
                    FormFeedNumbering::Corrected => writeln!(f, "pageType: end sign \\f")?,
                    FormFeedNumbering::Legacy => writeln!(f, "pageType: end sign \\f (legacy numbering)")?,
                }
            }
        }
        match &self.destination {
            Destination::Stdout => write!(f, "destFile: stdout"),
            Destination::Printer { name, .. } => write!(f, "destFile: {}", name),
        }
    }
}
