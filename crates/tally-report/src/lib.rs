//! Line-item report generation library.
//!
//! This crate renders role-filtered line items in two formats:
//!
//! - **CSV**: header row, one record per visible item, blank line, total
//! - **HTML**: a minimal document with one table row per visible item
//!
//! Assembly runs header, body and footer in order and trims the result once.
//! Any other format token renders as an empty string. Rendering fails only
//! when opt-in CSV quoting cannot write a record.

mod assemble;
mod body;
mod common;
mod error;
mod footer;
mod header;
mod options;
mod visibility;

// Re-export public types and functions
pub use assemble::{RenderedReport, assemble_report, generate_report};
pub use body::{AggregationResult, ItemLine, apply_priority_rule, render_body, transform_item};
pub use common::{PRIORITY_THRESHOLD, STANDARD_VISIBILITY_LIMIT};
pub use error::{ReportError, Result};
pub use footer::render_footer;
pub use header::render_header;
pub use options::RenderOptions;
pub use visibility::{is_visible, visible_indices};
