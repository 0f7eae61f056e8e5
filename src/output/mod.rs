//! Output module for persisting and displaying extracted records
//!
//! This module handles:
//! - The generic `Record` row and the `TableRow` trait
//! - Writing rows to CSV and reading them back
//! - The console preview printed after a run

mod csv_output;
pub mod preview;
mod record;

pub use csv_output::{read_table, save_to_table, write_table};
pub use preview::{print_preview, render_preview, BANNER, PREVIEW_LIMIT, USAGE_GUIDANCE};
pub use record::{Record, TableRow};
