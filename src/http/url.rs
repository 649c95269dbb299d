use anyhow::{Context, Result, anyhow};
use reqwest::Url;

use crate::constants::LOOKUP_PATH;

/// Build the lookup URL for an identifier.
///
/// Each `/`-separated piece of the identifier becomes its own percent-encoded
/// path segment, so a CIDR such as `10.0.0.0/24` maps to `.../ips/10.0.0.0/24`
/// while characters like `?`, `#` or spaces cannot leak into the query.
pub fn lookup_url(base_url: &str, id: &str) -> Result<Url> {
    let mut url =
        Url::parse(base_url).with_context(|| format!("invalid base URL: {}", base_url))?;
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| anyhow!("base URL cannot carry a path: {}", base_url))?;
        segments.pop_if_empty().push(LOOKUP_PATH);
        segments.extend(id.split('/'));
    }
    Ok(url)
}
