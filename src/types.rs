use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Output format options
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Plain,
    Jsonl,
    Csv,
}

/// CLI arguments structure
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    // INPUT
    /// CIDR range or IP to process (e.g., 127.0.0.0/24).
    #[arg(short = 'r', value_name = "CIDR", help_heading = "INPUT")]
    pub range: Option<String>,

    /// Path to a file containing a list of CIDR ranges, one per line.
    #[arg(short = 'l', value_name = "FILE", help_heading = "INPUT")]
    pub list: Option<PathBuf>,

    // NETWORK
    /// Base URL of the lookup service.
    #[arg(long, default_value = DEFAULT_BASE_URL, help_heading = "NETWORK")]
    pub base_url: String,

    /// Timeout for each request in seconds.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, help_heading = "NETWORK")]
    pub timeout: u64,

    /// Use a proxy for requests (e.g., "http://127.0.0.1:8080").
    #[arg(long, help_heading = "NETWORK")]
    pub proxy: Option<String>,

    /// Accept invalid TLS certificates.
    #[arg(long, help_heading = "NETWORK")]
    pub insecure: bool,

    // CACHE
    /// Directory where fetched pages are cached while being processed.
    #[arg(long, default_value = ".", help_heading = "CACHE")]
    pub cache_dir: PathBuf,

    // OUTPUT
    /// Run in silent mode, output only results.
    #[arg(long, help_heading = "OUTPUT")]
    pub silent: bool,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain, help_heading = "OUTPUT")]
    pub format: OutputFormat,

    /// Disable color output.
    #[arg(long, help_heading = "OUTPUT")]
    pub no_color: bool,
}

/// Where identifiers are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Single(String),
    List(PathBuf),
    Stdin,
}

impl Cli {
    /// Parse arguments, accepting the single-dash `-silent` spelling.
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    pub fn input_source(&self) -> InputSource {
        if let Some(range) = self.range.as_ref().filter(|r| !r.is_empty()) {
            InputSource::Single(range.clone())
        } else if let Some(list) = &self.list {
            InputSource::List(list.clone())
        } else {
            InputSource::Stdin
        }
    }
}

/// Rewrite `-silent` to `--silent` so clap does not read it as `-s -i -l ...`.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| if arg == "-silent" { OsString::from("--silent") } else { arg })
        .collect()
}
