use anyhow::{Result, anyhow};
use scraper::{Html, Selector};

use crate::constants::{HOSTNAME_CELL_SELECTOR, ROW_SELECTOR};

/// Parse raw cached bytes into an HTML document
///
/// Invalid UTF-8 sequences are replaced rather than rejected, so one stray
/// byte does not cost the rest of the page.
pub fn parse_document(bytes: &[u8]) -> Html {
    Html::parse_document(&String::from_utf8_lossy(bytes))
}

/// Extract the trimmed, non-empty text of the second cell of every table row
pub fn extract_second_column(document: &Html) -> Result<Vec<String>> {
    let row_selector =
        Selector::parse(ROW_SELECTOR).map_err(|e| anyhow!("invalid row selector: {:?}", e))?;
    let cell_selector = Selector::parse(HOSTNAME_CELL_SELECTOR)
        .map_err(|e| anyhow!("invalid cell selector: {:?}", e))?;

    Ok(document
        .select(&row_selector)
        .map(|row| {
            row.select(&cell_selector)
                .flat_map(|cell| cell.text())
                .collect::<String>()
        })
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .collect())
}
