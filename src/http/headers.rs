use rand::Rng;
use rand::seq::SliceRandom;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use crate::constants::USER_AGENTS;

/// Pick a User-Agent from the pool using the given random source
pub fn random_user_agent<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    USER_AGENTS.choose(rng).copied().unwrap_or(USER_AGENTS[0])
}

/// Build the per-request header map carrying a randomized User-Agent
pub fn spoofed_headers<R: Rng + ?Sized>(rng: &mut R) -> HeaderMap {
    let mut header_map = HeaderMap::new();
    header_map.insert(
        USER_AGENT,
        HeaderValue::from_static(random_user_agent(rng)),
    );
    header_map
}
