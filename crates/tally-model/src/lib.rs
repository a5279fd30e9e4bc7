pub mod enums;
pub mod error;
pub mod field;
pub mod item;
pub mod number;
pub mod request;
pub mod viewer;

pub use enums::{ReportFormat, Role};
pub use error::{Result, TallyError};
pub use field::FieldValue;
pub use item::LineItem;
pub use number::{ABSENT_VALUE, Number, format_number};
pub use request::ReportRequest;
pub use viewer::Viewer;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewer_defaults_to_standard() {
        let viewer: Viewer = serde_json::from_str(r#"{"name": "Ana"}"#).unwrap();
        assert_eq!(viewer.role, Role::Standard);
        assert_eq!(viewer.display_name(), "Ana");
    }

    #[test]
    fn viewer_name_of_any_shape_decodes() {
        let number: Viewer = serde_json::from_str(r#"{"name": 7}"#).unwrap();
        let null: Viewer = serde_json::from_str(r#"{"name": null}"#).unwrap();
        let absent: Viewer = serde_json::from_str("{}").unwrap();
        assert_eq!(number.display_name(), "7");
        assert_eq!(null.display_name(), "null");
        assert_eq!(absent.display_name(), "undefined");
    }

    #[test]
    fn request_serializes() {
        let request = ReportRequest {
            user: Viewer::admin("Ana"),
            items: vec![LineItem::new(1, "A", 100.0)],
        };
        let json = serde_json::to_string(&request).expect("serialize request");
        let round: ReportRequest = serde_json::from_str(&json).expect("deserialize request");
        assert_eq!(round, request);
    }
}
