pub mod formatter;
pub mod logger;

pub use formatter::{CSV_HEADER, HostnameRecord, format_record};
pub use logger::{Level, Logger};
