//! Request document loading.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use tally_model::ReportRequest;
use tracing::{debug, info};

/// Path token that selects standard input.
pub const STDIN_TOKEN: &str = "-";

/// Load a request document from `path`, or stdin when the path is `-`.
pub fn load_request(path: &Path) -> Result<ReportRequest> {
    if path.as_os_str() == STDIN_TOKEN {
        debug!("reading request from stdin");
        return load_request_from_reader(io::stdin().lock()).context("read request from stdin");
    }
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let request = load_request_from_reader(BufReader::new(file))
        .with_context(|| format!("read request {}", path.display()))?;
    info!(path = %path.display(), items = request.items.len(), "loaded request");
    Ok(request)
}

pub fn load_request_from_reader<R: Read>(reader: R) -> Result<ReportRequest> {
    Ok(ReportRequest::from_reader(reader)?)
}
