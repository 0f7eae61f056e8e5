//! HTML parsing and querying
//!
//! This module turns raw markup into a [`Document`], runs CSS selector
//! queries against it and extracts anchor links.

mod document;
mod links;

pub use document::{compile_selector, parse, parse_select, select, Document, Node};
pub use links::{extract_links, extract_links_from_html};
