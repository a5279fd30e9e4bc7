//! Report closing text.

use tally_model::{Number, ReportFormat};

use crate::common::CSV_TOTAL_LABEL;

/// Render the format-specific closing text carrying `total`.
pub fn render_footer(format: &ReportFormat, total: f64) -> String {
    let total = Number(total);
    match format {
        ReportFormat::Csv => format!("\n{CSV_TOTAL_LABEL}\n{total},,\n"),
        ReportFormat::Html => format!("</table>\n<h3>Total: {total}</h3>\n</body></html>\n"),
        ReportFormat::Unrecognized(_) => String::new(),
    }
}
