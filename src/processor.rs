use anyhow::Result;
use std::io::Write;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::cache::CacheStore;
use crate::filter::filter_hostnames;
use crate::http::Fetch;
use crate::output::{CSV_HEADER, HostnameRecord, Logger, format_record};
use crate::types::OutputFormat;
use crate::utils::{extract_second_column, parse_document};

/// Result of processing a single identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The page was loaded; holds the number of hostnames printed.
    Extracted(usize),
    /// Fetching or loading the page failed.
    Skipped,
}

/// Running totals across a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub identifiers: usize,
    pub hostnames: usize,
    pub skipped: usize,
}

/// Drives identifiers one at a time through cache, fetch, parse, filter and cleanup.
///
/// Results and log lines share the same writer. Only failures writing to that
/// writer are returned as errors; everything else is logged and the run goes on.
pub struct Processor<F, W> {
    cache: CacheStore,
    fetcher: F,
    logger: Logger,
    format: OutputFormat,
    out: W,
    csv_header_written: bool,
    summary: Summary,
}

impl<F: Fetch, W: Write> Processor<F, W> {
    pub fn new(cache: CacheStore, fetcher: F, logger: Logger, format: OutputFormat, out: W) -> Self {
        Self {
            cache,
            fetcher,
            logger,
            format,
            out,
            csv_header_written: false,
            summary: Summary::default(),
        }
    }

    pub fn summary(&self) -> Summary {
        self.summary
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    /// Process one identifier: CHECK_CACHE, FETCH on miss, LOAD, EXTRACT, PRINT, CLEANUP.
    pub async fn process_identifier(&mut self, id: &str) -> Result<Outcome> {
        self.logger
            .info(&mut self.out, format!("Processing CIDR: {}", id))?;

        let outcome = match self.load_hostnames(id).await? {
            Some(hostnames) => {
                self.print_hostnames(id, &hostnames)?;
                Outcome::Extracted(hostnames.len())
            }
            None => Outcome::Skipped,
        };

        self.cleanup(id).await?;

        self.summary.identifiers += 1;
        match outcome {
            Outcome::Extracted(n) => self.summary.hostnames += n,
            Outcome::Skipped => self.summary.skipped += 1,
        }
        Ok(outcome)
    }

    /// Process a newline-delimited file of identifiers
    pub async fn process_list(&mut self, path: &Path) -> Result<Summary> {
        self.logger.info(
            &mut self.out,
            format!("Processing CIDR list from file: {}", path.display()),
        )?;

        let file = match File::open(path).await {
            Ok(file) => file,
            Err(e) => {
                self.logger
                    .error(&mut self.out, format!("Failed to open file: {}", e))?;
                return Ok(self.summary);
            }
        };

        self.process_reader(BufReader::new(file)).await
    }

    /// Process identifiers from a line stream such as stdin
    pub async fn process_reader<R>(&mut self, reader: R) -> Result<Summary>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = reader.lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    let id = line.trim();
                    if id.is_empty() {
                        continue;
                    }
                    self.process_identifier(id).await?;
                }
                Ok(None) => break,
                Err(e) => {
                    self.logger
                        .error(&mut self.out, format!("Error reading input: {}", e))?;
                    break;
                }
            }
        }

        let summary = self.summary;
        self.logger.info(
            &mut self.out,
            format!(
                "Processed {} identifiers ({} skipped), found {} hostnames",
                summary.identifiers, summary.skipped, summary.hostnames
            ),
        )?;
        Ok(summary)
    }

    /// Returns `None` when the page could not be fetched or loaded
    async fn load_hostnames(&mut self, id: &str) -> Result<Option<Vec<String>>> {
        if !self.cache.exists(id).await {
            self.logger.info(&mut self.out, "Fetching page from the web...")?;
            match self.fetch_and_cache(id).await {
                Ok(()) => {
                    let path = self.cache.entry_path(id);
                    self.logger.info(
                        &mut self.out,
                        format!("Page cached successfully: {}", path.display()),
                    )?;
                }
                Err(e) => {
                    self.logger.error(
                        &mut self.out,
                        format!("Failed to fetch and cache page for {}: {:#}", id, e),
                    )?;
                    return Ok(None);
                }
            }
        }

        let path = self.cache.entry_path(id);
        self.logger
            .info(&mut self.out, format!("Loading cached page: {}...", path.display()))?;

        let candidates = match self.load_candidates(id).await {
            Ok(candidates) => candidates,
            Err(e) => {
                self.logger
                    .error(&mut self.out, format!("Failed to load cached page: {:#}", e))?;
                return Ok(None);
            }
        };
        self.logger
            .info(&mut self.out, "Cached page loaded successfully.")?;

        Ok(Some(filter_hostnames(candidates)))
    }

    async fn fetch_and_cache(&self, id: &str) -> Result<()> {
        let body = self.fetcher.fetch(id).await?;
        self.cache.write(id, &body).await?;
        Ok(())
    }

    async fn load_candidates(&self, id: &str) -> Result<Vec<String>> {
        let bytes = self.cache.read(id).await?;
        let document = parse_document(&bytes);
        extract_second_column(&document)
    }

    fn print_hostnames(&mut self, id: &str, hostnames: &[String]) -> Result<()> {
        if hostnames.is_empty() {
            self.logger.info(&mut self.out, "No hostnames found.")?;
            return Ok(());
        }

        if self.format == OutputFormat::Csv && !self.csv_header_written {
            self.out.write_all(CSV_HEADER.as_bytes())?;
            self.csv_header_written = true;
        }

        for hostname in hostnames {
            let record = HostnameRecord {
                identifier: id,
                hostname: hostname.as_str(),
            };
            self.out
                .write_all(format_record(&record, self.format).as_bytes())?;
        }
        Ok(())
    }

    /// Remove the cache entry if one is left; failure is logged, never retried.
    async fn cleanup(&mut self, id: &str) -> Result<()> {
        if !self.cache.exists(id).await {
            return Ok(());
        }
        let path = self.cache.entry_path(id);
        match self.cache.delete(id).await {
            Ok(()) => self.logger.info(
                &mut self.out,
                format!("Cache file {} deleted successfully.", path.display()),
            )?,
            Err(e) => self
                .logger
                .error(&mut self.out, format!("{:#}", e))?,
        }
        Ok(())
    }
}
