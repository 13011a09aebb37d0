//! Product Option Models

use super::media::Media;
use serde::{Deserialize, Serialize};

/// One currently-selected product option (name/value pair)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedOption {
    pub name: String,
    pub value: String,
}

impl SelectedOption {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One renderable value of a named product option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionValueState {
    pub value: String,
    /// Display label override; falls back to `value`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub selected: bool,
    /// Whether the mapped variant is purchasable
    #[serde(default = "default_true")]
    pub available: bool,
    /// Whether a real variant maps to this value
    #[serde(default = "default_true")]
    pub exists: bool,
    #[serde(default)]
    pub disabled: bool,
    /// Swatch color carried on the variant option value, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swatch_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swatch_image: Option<Media>,
}

impl OptionValueState {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }
}

impl Default for OptionValueState {
    fn default() -> Self {
        Self {
            value: String::new(),
            label: None,
            selected: false,
            available: true,
            exists: true,
            disabled: false,
            swatch_color: None,
            swatch_image: None,
        }
    }
}

fn default_true() -> bool {
    true
}
