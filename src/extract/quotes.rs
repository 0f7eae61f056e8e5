//! Quote record extraction
//!
//! Each container matched by the container selector becomes one
//! [`QuoteRecord`]. A container without a text or author node is skipped
//! with a warning; the remaining containers are still extracted.

use crate::config::QuoteSelectors;
use crate::html::{compile_selector, Document};
use crate::output::TableRow;
use crate::ScrapeError;
use scraper::{ElementRef, Selector};

/// Output columns, in order
pub const QUOTE_FIELDS: [&str; 3] = ["text", "author", "tags"];

/// Separator placed between tag names
pub const TAG_SEPARATOR: &str = ", ";

/// One extracted quote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRecord {
    pub text: String,
    pub author: String,
    /// Tag names joined with `", "`
    pub tags: String,
}

impl TableRow for QuoteRecord {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "text" => Some(&self.text),
            "author" => Some(&self.author),
            "tags" => Some(&self.tags),
            _ => None,
        }
    }
}

/// Selectors compiled once per extraction
struct CompiledSelectors {
    container: Selector,
    text: Selector,
    author: Selector,
    tag: Selector,
}

impl CompiledSelectors {
    fn new(selectors: &QuoteSelectors) -> Result<Self, ScrapeError> {
        Ok(Self {
            container: compile_selector(&selectors.container)?,
            text: compile_selector(&selectors.text)?,
            author: compile_selector(&selectors.author)?,
            tag: compile_selector(&selectors.tag)?,
        })
    }
}

/// Extracts every quote in `document`, in document order
///
/// # Errors
///
/// Fails only when one of the selectors is not valid CSS.
pub fn extract_quotes(
    document: &Document,
    selectors: &QuoteSelectors,
) -> Result<Vec<QuoteRecord>, ScrapeError> {
    let compiled = CompiledSelectors::new(selectors)?;

    let records = document
        .select_with(&compiled.container)
        .into_iter()
        .enumerate()
        .filter_map(|(index, container)| extract_one(index, container, &compiled))
        .collect();

    Ok(records)
}

fn extract_one(
    index: usize,
    container: ElementRef<'_>,
    selectors: &CompiledSelectors,
) -> Option<QuoteRecord> {
    let Some(text) = first_text(container, &selectors.text) else {
        tracing::warn!("Skipping quote #{}: no text node", index + 1);
        return None;
    };
    let Some(author) = first_text(container, &selectors.author) else {
        tracing::warn!("Skipping quote #{}: no author node", index + 1);
        return None;
    };

    let tags: Vec<String> = container
        .select(&selectors.tag)
        .map(|tag| tag.text().collect::<String>())
        .collect();

    Some(QuoteRecord {
        text,
        author,
        tags: tags.join(TAG_SEPARATOR),
    })
}

/// Trimmed text of the first match inside `container`
fn first_text(container: ElementRef<'_>, selector: &Selector) -> Option<String> {
    container
        .select(selector)
        .next()
        .map(|node| node.text().collect::<String>().trim().to_string())
}
