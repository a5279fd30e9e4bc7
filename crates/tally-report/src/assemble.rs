//! Report orchestration: header, body, footer, final trim.

use tally_model::{LineItem, ReportFormat, Viewer};
use tracing::{debug, debug_span};

use crate::body::render_body;
use crate::error::Result;
use crate::footer::render_footer;
use crate::header::render_header;
use crate::options::RenderOptions;

/// A rendered report plus what happened while rendering it.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedReport {
    /// Assembled output with leading and trailing whitespace trimmed.
    pub text: String,
    /// Sum of values over visible items (0 for unrecognized formats).
    pub total: f64,
    pub visible: usize,
    pub hidden: usize,
    /// Indices of items whose priority flag was set by this call.
    pub promoted: Vec<usize>,
}

/// Render a report for `viewer` over `items`.
///
/// Admin viewers mark visible items above the priority threshold by
/// setting `priority` on the caller's items.
pub fn generate_report(format: &ReportFormat, viewer: &Viewer, items: &mut [LineItem]) -> String {
    // Default options never quote, so rendering cannot fail.
    assemble_report(format, viewer, items, RenderOptions::default())
        .map(|report| report.text)
        .unwrap_or_default()
}

/// Render a report and keep the totals and item bookkeeping.
///
/// Fails only when `options.quote_csv` is set and a record cannot be
/// written.
pub fn assemble_report(
    format: &ReportFormat,
    viewer: &Viewer,
    items: &mut [LineItem],
    options: RenderOptions,
) -> Result<RenderedReport> {
    let span = debug_span!("report", format = %format, role = %viewer.role);
    let _guard = span.enter();

    if !format.is_recognized() {
        debug!(token = format.as_str(), "unrecognized report format, rendering empty fragments");
    }

    let header = render_header(format, viewer, &options);
    let body = render_body(format, viewer, items, &options)?;
    let footer = render_footer(format, body.total);

    let mut text = String::with_capacity(header.len() + body.content.len() + footer.len());
    text.push_str(&header);
    text.push_str(&body.content);
    text.push_str(&footer);
    let text = text.trim().to_string();

    let hidden = items.len() - body.visible;
    debug!(
        visible = body.visible,
        hidden,
        promoted = body.promoted.len(),
        bytes = text.len(),
        "assembled report"
    );

    Ok(RenderedReport {
        text,
        total: body.total,
        visible: body.visible,
        hidden,
        promoted: body.promoted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_hidden_items() {
        let mut items = vec![
            LineItem::new(1, "A", 100.0),
            LineItem::new(2, "B", 600.0),
            LineItem::new(3, "C", 900.0),
        ];
        let report = assemble_report(
            &ReportFormat::Csv,
            &Viewer::standard("Bia"),
            &mut items,
            RenderOptions::default(),
        )
        .unwrap();
        assert_eq!(report.visible, 1);
        assert_eq!(report.hidden, 2);
        assert_eq!(report.total, 100.0);
    }

    #[test]
    fn trim_applies_to_whole_output_only() {
        let mut items = vec![LineItem::new(1, "  padded  ", 10.0)];
        let text = generate_report(&ReportFormat::Csv, &Viewer::standard("Bia"), &mut items);
        assert!(text.contains("\n1,  padded  ,10,Bia\n"));
        assert!(text.starts_with("ID,NOME"));
        assert!(text.ends_with("10,,"));
    }

    #[test]
    fn quoting_reaches_the_assembled_text() {
        let mut items = vec![LineItem::new(1, "a,b", 10.0)];
        let options = RenderOptions::default().with_quote_csv(true);
        let report =
            assemble_report(&ReportFormat::Csv, &Viewer::standard("Bia"), &mut items, options)
                .unwrap();
        assert!(report.text.contains("\n1,\"a,b\",10,Bia\n"));
    }
}
