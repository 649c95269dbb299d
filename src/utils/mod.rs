pub mod html;

pub use html::{extract_second_column, parse_document};
