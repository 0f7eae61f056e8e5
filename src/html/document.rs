//! Parsed documents and CSS selector queries

use crate::ScrapeError;
use scraper::{ElementRef, Html, Selector};

/// A parsed HTML payload
///
/// Elements returned by [`Document::select`] borrow the document, so no query
/// result can outlive it.
#[derive(Debug)]
pub struct Document {
    html: Html,
}

/// Owned snapshot of one matched element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Lowercase tag name
    pub name: String,

    /// Concatenated descendant text, untrimmed
    pub text: String,

    pub inner_html: String,

    /// Attributes in source order
    pub attributes: Vec<(String, String)>,
}

impl Node {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

impl From<ElementRef<'_>> for Node {
    fn from(element: ElementRef<'_>) -> Self {
        Self {
            name: element.value().name().to_string(),
            text: element.text().collect(),
            inner_html: element.inner_html(),
            attributes: element
                .value()
                .attrs()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

/// Compiles a CSS selector, mapping failures to [`ScrapeError::Selector`]
pub fn compile_selector(css: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector {
        selector: css.to_string(),
        message: e.to_string(),
    })
}

/// Parses raw markup into a document
///
/// `None` and empty input yield `None` rather than an error.
///
/// # Example
///
/// ```
/// use quote_scraper::html::parse;
///
/// assert!(parse(None).is_none());
/// assert!(parse(Some("")).is_none());
/// assert!(parse(Some("<p>hi</p>")).is_some());
/// ```
pub fn parse(raw: Option<&str>) -> Option<Document> {
    match raw {
        Some(text) if !text.is_empty() => Some(Document {
            html: Html::parse_document(text),
        }),
        _ => None,
    }
}

impl Document {
    /// Returns every element matching `css`, in document order
    pub fn select(&self, css: &str) -> Result<Vec<ElementRef<'_>>, ScrapeError> {
        let selector = compile_selector(css)?;
        Ok(self.select_with(&selector))
    }

    /// Same as [`select`](Self::select) with an already compiled selector
    pub fn select_with(&self, selector: &Selector) -> Vec<ElementRef<'_>> {
        self.html.select(selector).collect()
    }
}

/// Queries a possibly absent document
///
/// A `None` document yields an empty list, never an error, as long as the
/// selector itself is valid.
pub fn select<'a>(
    document: Option<&'a Document>,
    css: &str,
) -> Result<Vec<ElementRef<'a>>, ScrapeError> {
    match document {
        Some(doc) => doc.select(css),
        None => {
            compile_selector(css)?;
            Ok(Vec::new())
        }
    }
}

/// Parses `raw` and runs `css` against it in one step
pub fn parse_select(raw: Option<&str>, css: &str) -> Result<Vec<Node>, ScrapeError> {
    let document = parse(raw);
    Ok(select(document.as_ref(), css)?
        .into_iter()
        .map(Node::from)
        .collect())
}
