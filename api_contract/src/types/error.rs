use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Field name to its validation messages, in order.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Error payload returned by a server. Every field is optional.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ErrorData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusCode>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

/// Status as sent on the wire: either a JSON number or a JSON string.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum StatusCode {
    Number(Number),
    Text(String),
}

impl StatusCode {
    /// The status as an HTTP code, if it is one (strings are parsed).
    pub fn as_u16(&self) -> Option<u16> {
        match self {
            StatusCode::Number(n) => match n.as_u64() {
                Some(code) => u16::try_from(code).ok(),
                None => n
                    .as_f64()
                    .filter(|f| f.fract() == 0.0 && (0.0..=f64::from(u16::MAX)).contains(f))
                    .map(|f| f as u16),
            },
            StatusCode::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusCode::Number(n) => write!(f, "{}", n),
            StatusCode::Text(s) => f.write_str(s),
        }
    }
}

impl From<u16> for StatusCode {
    fn from(status: u16) -> Self {
        StatusCode::Number(Number::from(status))
    }
}

impl ApiError {
    pub fn message(&self) -> Option<&str> {
        self.data.as_ref()?.message.as_deref()
    }

    /// Messages recorded against `field`; empty when there are none.
    pub fn field_errors(&self, field: &str) -> &[String] {
        self.data
            .as_ref()
            .and_then(|d| d.errors.as_ref())
            .and_then(|errors| errors.get(field))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn status_code(&self) -> Option<u16> {
        self.status.as_ref().and_then(StatusCode::as_u16)
    }
}
