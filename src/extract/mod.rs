//! Record extraction from parsed documents

mod quotes;

pub use quotes::{extract_quotes, QuoteRecord, QUOTE_FIELDS, TAG_SEPARATOR};
