use colored::*;
use std::fmt::Display;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

/// Informational/error line writer, configured explicitly instead of a global flag.
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    silent: bool,
    colored: bool,
}

impl Logger {
    pub fn new(silent: bool, colored: bool) -> Self {
        Self { silent, colored }
    }

    pub fn is_silent(&self) -> bool {
        self.silent
    }

    pub fn info<W: Write>(&self, out: &mut W, message: impl Display) -> io::Result<()> {
        self.log(out, Level::Info, message)
    }

    pub fn error<W: Write>(&self, out: &mut W, message: impl Display) -> io::Result<()> {
        self.log(out, Level::Error, message)
    }

    pub fn log<W: Write>(&self, out: &mut W, level: Level, message: impl Display) -> io::Result<()> {
        if self.silent {
            return Ok(());
        }
        writeln!(out, "{}", self.format_line(level, message))
    }

    /// Render one log line, e.g. `[INF] Processing CIDR: 10.0.0.0/24`
    pub fn format_line(&self, level: Level, message: impl Display) -> String {
        let tag = match (level, self.colored) {
            (Level::Info, true) => "INF".cyan().to_string(),
            (Level::Error, true) => "ERR".red().to_string(),
            (Level::Info, false) => "INF".to_string(),
            (Level::Error, false) => "ERR".to_string(),
        };
        format!("[{}] {}", tag, message)
    }
}
