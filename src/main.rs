use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use tokio::io::BufReader;

use iphosts::cache::CacheStore;
use iphosts::http::{HttpFetcher, build_http_client};
use iphosts::output::Logger;
use iphosts::processor::Processor;
use iphosts::types::{Cli, InputSource};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_normalized();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let client = build_http_client(&cli)?;
    let fetcher = HttpFetcher::new(client, cli.base_url.clone(), StdRng::from_entropy());
    let logger = Logger::new(cli.silent, !cli.no_color);

    let mut processor = Processor::new(
        CacheStore::new(&cli.cache_dir),
        fetcher,
        logger,
        cli.format,
        io::stdout(),
    );

    match cli.input_source() {
        InputSource::Single(id) => {
            processor.process_identifier(&id).await?;
        }
        InputSource::List(path) => {
            processor.process_list(&path).await?;
        }
        InputSource::Stdin => {
            processor
                .process_reader(BufReader::new(tokio::io::stdin()))
                .await?;
        }
    }

    processor.flush()
}
