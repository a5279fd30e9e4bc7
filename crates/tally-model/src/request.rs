//! Request document accepted by front ends.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TallyError};
use crate::item::LineItem;
use crate::viewer::Viewer;

/// A viewer plus the items to report on.
///
/// `items` is required: a missing or `null` array is rejected rather than
/// rendered as an empty report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRequest {
    pub user: Viewer,
    pub items: Vec<LineItem>,
}

impl ReportRequest {
    pub fn from_json_str(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(TallyError::Message("request document is empty".to_string()));
        }
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::from_json_str(&text)
    }
}
