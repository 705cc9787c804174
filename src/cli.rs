use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_PAGE_LENGTH: i64 = 72;
pub const DEFAULT_SPOOLER: &str = "lp";

#[derive(Parser, Debug)]
#[command(name = "selpg")]
#[command(about = "Select a range of pages from a text stream")]
#[command(version)]
pub struct Cli {
    /// The start page of a text
    #[arg(short = 's', long = "startPage", allow_negative_numbers = true)]
    pub start_page: Option<i64>,

    /// The end page of a text
    #[arg(short = 'e', long = "endPage", allow_negative_numbers = true)]
    pub end_page: Option<i64>,

    /// The page length of a text, in lines
    #[arg(
        short = 'l',
        long = "pageLength",
        default_value_t = DEFAULT_PAGE_LENGTH,
        allow_negative_numbers = true
    )]
    pub page_length: i64,

    /// The page type: paging by form feed (\f)
    #[arg(short = 'f', long = "pageType")]
    pub form_feed: bool,

    /// Send output to this printer destination instead of stdout
    #[arg(short = 'd', long = "destFile")]
    pub dest: Option<String>,

    /// Number form-feed pages the way older selpg releases did (first chunk is page 2)
    #[arg(long)]
    pub legacy_ff_count: bool,

    /// Print spooling program used with -d
    #[arg(long, env = "SELPG_SPOOLER", default_value = DEFAULT_SPOOLER, hide = true)]
    pub spooler: String,

    /// Input file (reads stdin when omitted)
    pub input: Option<PathBuf>,
}
