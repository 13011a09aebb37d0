//! Cart Line Attribute Model

use serde::{Deserialize, Serialize};

/// Opaque key/value pair attached to a cart line
///
/// Persisted by the remote cart service and carried into order records.
/// Keys outside the reserved customization set must survive
/// reconciliation untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineAttribute {
    pub key: String,
    pub value: String,
}

impl LineAttribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Payload for the remote cart mutation boundary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineInput {
    pub merchandise_id: String,
    pub quantity: i32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<LineAttribute>,
}

/// Cart line state returned by the remote cart service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: String,
    pub quantity: i32,
    #[serde(default)]
    pub attributes: Vec<LineAttribute>,
}
