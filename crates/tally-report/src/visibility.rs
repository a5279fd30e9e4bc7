//! Role-based item visibility.

use tally_model::{LineItem, Viewer};

use crate::common::STANDARD_VISIBILITY_LIMIT;

/// Check whether `viewer` may see `item`.
///
/// Admins see everything. Standard viewers see values up to and including
/// the limit, compared through the item's numeric view: `null` counts as 0,
/// numeric strings parse, and anything that coerces to NaN is hidden.
pub fn is_visible(viewer: &Viewer, item: &LineItem) -> bool {
    viewer.is_admin() || item.numeric_value() <= STANDARD_VISIBILITY_LIMIT
}

/// Indices of the items `viewer` may see, in input order.
pub fn visible_indices(viewer: &Viewer, items: &[LineItem]) -> Vec<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| is_visible(viewer, item))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<LineItem> {
        vec![
            LineItem::new(1, "low", 100.0),
            LineItem::new(2, "edge", 500.0),
            LineItem::new(3, "high", 500.01),
            LineItem::new(4, "negative", -20.0),
            LineItem::new(5, "zero", 0.0),
            LineItem::new(6, "poison", f64::NAN),
        ]
    }

    #[test]
    fn standard_viewer_sees_up_to_limit() {
        let items = items();
        assert_eq!(visible_indices(&Viewer::standard("Ana"), &items), [0, 1, 3, 4]);
    }

    #[test]
    fn admin_sees_everything() {
        let items = items();
        assert_eq!(visible_indices(&Viewer::admin("Ana"), &items).len(), items.len());
    }

    #[test]
    fn loosely_typed_values_compare_numerically() {
        let items: Vec<LineItem> = serde_json::from_str(
            r#"[{"value": "100"}, {"value": null}, {}, {"value": "n/d"}, {"value": "600"}]"#,
        )
        .unwrap();
        assert_eq!(visible_indices(&Viewer::standard("Ana"), &items), [0, 1]);
    }
}
