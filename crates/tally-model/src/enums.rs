//! Closed enumerations for viewer roles and report formats.
//!
//! Both enums are parsed from the exact, case-sensitive tokens callers pass
//! in. Parsing never fails: anything that is not a known token lands in an
//! explicit fallback arm (`Role::Standard`, `ReportFormat::Unrecognized`)
//! so the renderer can degrade instead of erroring.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Access level of the report viewer.
///
/// Only the literal token `ADMIN` grants elevated access. Every other
/// token, including `admin` and the empty string, is a standard viewer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Role {
    /// Sees items up to the visibility limit only.
    #[default]
    Standard,
    /// Sees every item and triggers priority marking.
    Admin,
}

impl Role {
    /// Token that selects [`Role::Admin`].
    pub const ADMIN_TOKEN: &'static str = "ADMIN";

    /// Returns the canonical token.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Standard => "STANDARD",
            Role::Admin => Self::ADMIN_TOKEN,
        }
    }

    /// Parse a role token. Exact match on `ADMIN`, everything else is standard.
    pub fn parse(token: &str) -> Self {
        if token == Self::ADMIN_TOKEN {
            Role::Admin
        } else {
            Role::Standard
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Role::parse(s))
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    /// Non-string and null roles decode as [`Role::Standard`].
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(serde_json::Value::String(token)) => Role::parse(&token),
            _ => Role::Standard,
        })
    }
}

/// Output format of a rendered report.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReportFormat {
    /// Comma-separated values, one line per item.
    Csv,
    /// A minimal HTML document with one table row per item.
    Html,
    /// Any other token. Renders empty fragments and contributes nothing.
    Unrecognized(String),
}

impl ReportFormat {
    /// Tokens that select a real format, in display order.
    pub const RECOGNIZED: [&'static str; 2] = ["CSV", "HTML"];

    /// Parse a format token (exact, case-sensitive).
    pub fn parse(token: &str) -> Self {
        match token {
            "CSV" => ReportFormat::Csv,
            "HTML" => ReportFormat::Html,
            other => ReportFormat::Unrecognized(other.to_string()),
        }
    }

    /// Returns the token this format was parsed from.
    pub fn as_str(&self) -> &str {
        match self {
            ReportFormat::Csv => "CSV",
            ReportFormat::Html => "HTML",
            ReportFormat::Unrecognized(token) => token,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, ReportFormat::Unrecognized(_))
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReportFormat {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ReportFormat::parse(s))
    }
}

impl From<String> for ReportFormat {
    fn from(token: String) -> Self {
        ReportFormat::parse(&token)
    }
}

impl From<&str> for ReportFormat {
    fn from(token: &str) -> Self {
        ReportFormat::parse(token)
    }
}

impl From<ReportFormat> for String {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Unrecognized(token) => token,
            other => other.as_str().to_string(),
        }
    }
}
