use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use tally_cli::input::load_request;
use tally_model::ReportFormat;
use tally_report::{RenderOptions, assemble_report};

use crate::cli::RenderArgs;
use crate::summary::formats_table;
use crate::types::RenderOutcome;

pub fn run_formats() -> Result<()> {
    println!("{}", formats_table());
    Ok(())
}

pub fn run_render(args: &RenderArgs) -> Result<RenderOutcome> {
    let format = ReportFormat::parse(&args.format);
    let span = info_span!("render", format = %format, request = %args.request.display());
    let _guard = span.enter();

    if !format.is_recognized() {
        warn!(
            token = %format,
            "format is not one of {:?}; the report will be empty",
            ReportFormat::RECOGNIZED
        );
    }

    let mut request = load_request(&args.request)?;
    let options = RenderOptions::default()
        .with_escape_html(args.escape_html)
        .with_quote_csv(args.quote_csv);
    let report = assemble_report(&format, &request.user, &mut request.items, options)
        .with_context(|| format!("render {format} report"))?;
    info!(
        visible = report.visible,
        hidden = report.hidden,
        promoted = report.promoted.len(),
        "rendered report"
    );

    Ok(RenderOutcome {
        viewer: request.user,
        format,
        report,
    })
}
