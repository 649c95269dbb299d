use anyhow::Result;
use reqwest::{Client, redirect::Policy};
use std::time::Duration;

use crate::constants::DEFAULT_REDIRECT_LIMIT;
use crate::types::Cli;

/// Build HTTP client from CLI configuration
pub fn build_http_client(cli: &Cli) -> Result<Client> {
    let mut client_builder = Client::builder()
        .timeout(Duration::from_secs(cli.timeout))
        .redirect(Policy::limited(DEFAULT_REDIRECT_LIMIT));

    if cli.insecure {
        client_builder = client_builder.danger_accept_invalid_certs(true);
    }

    if let Some(proxy_url) = &cli.proxy {
        let proxy = reqwest::Proxy::all(proxy_url)?;
        client_builder = client_builder.proxy(proxy);
    }

    Ok(client_builder.build()?)
}
