use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::enums::Role;
use crate::field::FieldValue;

/// The person requesting a report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewer {
    #[serde(default, skip_serializing_if = "FieldValue::is_absent")]
    pub name: FieldValue,
    #[serde(default)]
    pub role: Role,
}

impl Viewer {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: FieldValue::Text(name.into()),
            role,
        }
    }

    pub fn admin(name: impl Into<String>) -> Self {
        Self::new(name, Role::Admin)
    }

    pub fn standard(name: impl Into<String>) -> Self {
        Self::new(name, Role::Standard)
    }

    /// Name as shown in reports; absent names render as `undefined`.
    pub fn display_name(&self) -> Cow<'_, str> {
        self.name.text()
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
