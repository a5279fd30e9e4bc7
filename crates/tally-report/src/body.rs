//! Per-item transformation and aggregation.
//!
//! The body walks the caller's items in order, skips the ones the viewer
//! may not see, and renders the rest. Rendering an item can write to it:
//! admins mark every visible item above [`PRIORITY_THRESHOLD`] as priority,
//! whatever the output format. The write happens before the format branch,
//! so an HTML row picks up a flag set during the same call.

use tally_model::{LineItem, ReportFormat, Viewer};
use tracing::trace;

use crate::common::{PRIORITY_ROW_STYLE, PRIORITY_THRESHOLD, csv_record, html_text};
use crate::error::Result;
use crate::options::RenderOptions;
use crate::visibility::visible_indices;

/// Rendered fragment and total contribution of one item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemLine {
    pub line: String,
    pub value: f64,
}

/// Concatenated body content and the running total over visible items.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregationResult {
    pub content: String,
    pub total: f64,
    /// Number of items that passed the visibility filter.
    pub visible: usize,
    /// Indices into the input slice of items whose priority flag this call set.
    pub promoted: Vec<usize>,
}

/// Apply the admin priority rule to `item`.
///
/// Returns true when the flag flipped from unset to set.
pub fn apply_priority_rule(viewer: &Viewer, item: &mut LineItem) -> bool {
    if viewer.is_admin() && item.numeric_value() > PRIORITY_THRESHOLD {
        let flipped = !item.priority;
        item.priority = true;
        return flipped;
    }
    false
}

/// Render one visible item.
///
/// Fields render from the raw request text; only the total uses the
/// numeric contribution.
pub fn transform_item(
    viewer: &Viewer,
    item: &mut LineItem,
    format: &ReportFormat,
    options: &RenderOptions,
) -> Result<ItemLine> {
    apply_priority_rule(viewer, item);
    render_line(viewer, item, format, options)
}

fn render_line(
    viewer: &Viewer,
    item: &LineItem,
    format: &ReportFormat,
    options: &RenderOptions,
) -> Result<ItemLine> {
    let line = match format {
        ReportFormat::Csv => {
            let id = item.id_text();
            let name = item.name_text();
            let value = item.value_text();
            let user = viewer.display_name();
            csv_record(&[id.as_ref(), name.as_ref(), value.as_ref(), user.as_ref()], options)?
        }
        ReportFormat::Html => {
            let style = if item.priority { PRIORITY_ROW_STYLE } else { "" };
            format!(
                "<tr{style}><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                html_text(&item.id_text(), options),
                html_text(&item.name_text(), options),
                html_text(&item.value_text(), options),
            )
        }
        ReportFormat::Unrecognized(_) => {
            return Ok(ItemLine {
                line: String::new(),
                value: 0.0,
            });
        }
    };
    Ok(ItemLine {
        line,
        value: item.contribution(),
    })
}

/// Filter, transform and total `items` for `viewer`.
pub fn render_body(
    format: &ReportFormat,
    viewer: &Viewer,
    items: &mut [LineItem],
    options: &RenderOptions,
) -> Result<AggregationResult> {
    let mut result = AggregationResult {
        content: String::new(),
        total: 0.0,
        visible: 0,
        promoted: Vec::new(),
    };
    for index in visible_indices(viewer, items) {
        let item = &mut items[index];
        result.visible += 1;
        let was_priority = item.priority;
        let rendered = transform_item(viewer, item, format, options)?;
        if item.priority && !was_priority {
            result.promoted.push(index);
        }
        trace!(
            index,
            value = item.numeric_value(),
            priority = item.priority,
            "rendered item"
        );
        result.content.push_str(&rendered.line);
        result.total += rendered.value;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(viewer: &Viewer, item: &mut LineItem, format: &ReportFormat) -> ItemLine {
        transform_item(viewer, item, format, &RenderOptions::default()).unwrap()
    }

    fn aggregate(
        format: &ReportFormat,
        viewer: &Viewer,
        items: &mut [LineItem],
    ) -> AggregationResult {
        render_body(format, viewer, items, &RenderOptions::default()).unwrap()
    }

    #[test]
    fn admin_marks_high_values_in_csv() {
        let viewer = Viewer::admin("Ana");
        let mut item = LineItem::new(1, "X", 1500.0);
        let line = render(&viewer, &mut item, &ReportFormat::Csv);
        assert!(item.priority);
        assert_eq!(line.line, "1,X,1500,Ana\n");
        assert_eq!(line.value, 1500.0);
    }

    #[test]
    fn admin_marks_even_for_unrecognized_format() {
        let viewer = Viewer::admin("Ana");
        let mut item = LineItem::new(1, "X", 1000.5);
        let line = render(&viewer, &mut item, &ReportFormat::parse("XML"));
        assert!(item.priority);
        assert!(line.line.is_empty());
        assert_eq!(line.value, 0.0);
    }

    #[test]
    fn threshold_is_strict() {
        let viewer = Viewer::admin("Ana");
        let mut item = LineItem::new(1, "X", 1000.0);
        assert!(!apply_priority_rule(&viewer, &mut item));
        assert!(!item.priority);
    }

    #[test]
    fn numeric_strings_reach_the_threshold() {
        let viewer = Viewer::admin("Ana");
        let mut item: LineItem = serde_json::from_str(r#"{"id": 1, "value": "1500"}"#).unwrap();
        assert!(apply_priority_rule(&viewer, &mut item));
    }

    #[test]
    fn standard_viewer_never_marks() {
        let viewer = Viewer::standard("Ana");
        let mut item = LineItem::new(1, "X", 5000.0);
        render(&viewer, &mut item, &ReportFormat::Html);
        assert!(!item.priority);
    }

    #[test]
    fn preset_priority_bolds_html_row() {
        let viewer = Viewer::standard("Ana");
        let mut item = LineItem::new(3, "Y", 10.0).with_priority(true);
        let line = render(&viewer, &mut item, &ReportFormat::Html);
        assert_eq!(
            line.line,
            "<tr style=\"font-weight:bold;\"><td>3</td><td>Y</td><td>10</td></tr>\n"
        );
    }

    #[test]
    fn plain_html_row_has_no_style() {
        let viewer = Viewer::admin("Ana");
        let mut item = LineItem::new(3, "Y", 10.0);
        let line = render(&viewer, &mut item, &ReportFormat::Html);
        assert_eq!(line.line, "<tr><td>3</td><td>Y</td><td>10</td></tr>\n");
    }

    #[test]
    fn body_records_promotions_by_input_index() {
        let viewer = Viewer::admin("Ana");
        let mut items = vec![
            LineItem::new(1, "A", 2000.0),
            LineItem::new(2, "B", 50.0),
            LineItem::new(3, "C", 3000.0).with_priority(true),
            LineItem::new(4, "D", 1001.0),
        ];
        let body = aggregate(&ReportFormat::Csv, &viewer, &mut items);
        assert_eq!(body.promoted, vec![0, 3]);
        assert_eq!(body.visible, 4);
        assert_eq!(body.total, 6051.0);
    }

    #[test]
    fn body_skips_hidden_items_for_standard_viewer() {
        let viewer = Viewer::standard("Bia");
        let mut items = vec![
            LineItem::new(1, "A", 100.0),
            LineItem::new(2, "B", 600.0),
            LineItem::new(3, "C", 500.0),
        ];
        let body = aggregate(&ReportFormat::Csv, &viewer, &mut items);
        assert_eq!(body.content, "1,A,100,Bia\n3,C,500,Bia\n");
        assert_eq!(body.total, 600.0);
        assert_eq!(body.visible, 2);
        assert!(body.promoted.is_empty());
    }

    #[test]
    fn poison_value_propagates_to_total() {
        let viewer = Viewer::admin("Ana");
        let mut items = vec![LineItem::new(1, "A", 100.0), LineItem::new(2, "B", f64::NAN)];
        let body = aggregate(&ReportFormat::Csv, &viewer, &mut items);
        assert!(body.total.is_nan());
        assert_eq!(body.content, "1,A,100,Ana\n2,B,NaN,Ana\n");
    }

    #[test]
    fn raw_text_renders_while_null_adds_zero() {
        let viewer = Viewer::standard("Bia");
        let json = r#"[{"id": 1, "name": "A", "value": 40}, {"id": 2, "value": null}]"#;
        let mut items: Vec<LineItem> = serde_json::from_str(json).unwrap();
        let body = aggregate(&ReportFormat::Html, &viewer, &mut items);
        assert_eq!(
            body.content,
            "<tr><td>1</td><td>A</td><td>40</td></tr>\n\
             <tr><td>2</td><td>undefined</td><td>null</td></tr>\n"
        );
        assert_eq!(body.total, 40.0);
    }
}
