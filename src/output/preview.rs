//! Human-readable console output for a finished run

use crate::extract::QuoteRecord;
use std::fmt::Write;

/// Number of records shown after a run
pub const PREVIEW_LIMIT: usize = 3;

pub const BANNER: &str = "\
======= Quote Scraper =======
Scrapes the quotes published on quotes.toscrape.com
Note: for learning purposes only; respect the site's terms of use
=============================";

pub const USAGE_GUIDANCE: &str = "\
======= Usage =======
1. Pass a URL argument or set [target] url in a config file to scrape another page
2. Adjust the CSS selectors under [selectors] to extract other content
3. Requests use a random delay and a browser-like User-Agent header
4. Important: follow each site's robots.txt rules and applicable laws";

/// Renders the first `limit` records as numbered entries
///
/// # Example
///
/// ```
/// use quote_scraper::extract::QuoteRecord;
/// use quote_scraper::output::render_preview;
///
/// let quotes = vec![QuoteRecord {
///     text: "Hi".to_string(),
///     author: "Me".to_string(),
///     tags: "a, b".to_string(),
/// }];
/// let text = render_preview(&quotes, 3);
/// assert!(text.contains("1. Quote: Hi"));
/// ```
pub fn render_preview(records: &[QuoteRecord], limit: usize) -> String {
    let mut out = format!("Preview of the first {} results:\n", limit);
    for (i, record) in records.iter().take(limit).enumerate() {
        let _ = writeln!(out, "\n{}. Quote: {}", i + 1, record.text);
        let _ = writeln!(out, "   Author: {}", record.author);
        let _ = writeln!(out, "   Tags: {}", record.tags);
    }
    out
}

/// Prints the preview followed by the usage guidance
pub fn print_preview(records: &[QuoteRecord]) {
    println!("\n{}", render_preview(records, PREVIEW_LIMIT));
    println!("{}", USAGE_GUIDANCE);
}
