//! Line Item Field Set Model
//!
//! Field sets let products share customization definitions without
//! duplicating variant data; their entered values become cart line
//! attributes at add-to-cart. Sourced from CMS content at product-load
//! time and read-only for the lifetime of a page view.

use serde::{Deserialize, Serialize};

/// Input control kind for a customization field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Textarea,
    Url,
    Select,
}

impl FieldKind {
    /// Parse a CMS-authored kind string (case-insensitive)
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "text" => Some(Self::Text),
            "textarea" => Some(Self::Textarea),
            "url" => Some(Self::Url),
            "select" => Some(Self::Select),
            _ => None,
        }
    }
}

/// One dynamically defined customization field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItemField {
    /// Attribute key the entered value is written under
    pub key: String,
    pub label: String,
    pub kind: FieldKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    #[serde(default)]
    pub sort_order: f64,
    #[serde(default)]
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    /// Only include this field when an option with this name is selected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_when_option_name: Option<String>,
    /// Further restrict visibility to this option value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_when_option_value: Option<String>,
    /// Choice list for `Select` fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<String>>,
}

/// Ordered set of customization fields for a product
///
/// Fields are sorted ascending by sort order at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSet {
    pub title: String,
    pub fields: Vec<LineItemField>,
}

impl FieldSet {
    pub fn field(&self, key: &str) -> Option<&LineItemField> {
        self.fields.iter().find(|field| field.key == key)
    }
}
