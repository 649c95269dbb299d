pub mod cache;
pub mod constants;
pub mod filter;
pub mod http;
pub mod output;
pub mod processor;
pub mod types;
pub mod utils;
