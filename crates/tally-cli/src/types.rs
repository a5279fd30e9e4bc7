use tally_model::{ReportFormat, Viewer};
use tally_report::RenderedReport;

#[derive(Debug)]
pub struct RenderOutcome {
    pub viewer: Viewer,
    pub format: ReportFormat,
    pub report: RenderedReport,
}
