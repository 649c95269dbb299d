pub mod client;
pub mod fetcher;
pub mod headers;
pub mod url;

pub use client::build_http_client;
pub use fetcher::{Fetch, HttpFetcher};
pub use headers::{random_user_agent, spoofed_headers};
pub use url::lookup_url;
