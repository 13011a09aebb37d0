//! Option Presentation Model

use super::media::Media;
use serde::{Deserialize, Serialize};

/// Visual mode for rendering one option value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PresentationMode {
    Swatch,
    Thumbnail,
    Icon,
    #[default]
    Text,
}

impl PresentationMode {
    /// Parse a CMS-authored mode string (case-insensitive)
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "swatch" => Some(Self::Swatch),
            "thumbnail" => Some(Self::Thumbnail),
            "icon" => Some(Self::Icon),
            "text" => Some(Self::Text),
            _ => None,
        }
    }
}

/// Presentation metadata for one (option name, option value) pair
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Presentation {
    /// Explicit mode override; resolved from media/swatch data when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<PresentationMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ascending display sort key; missing sorts after all defined ones
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swatch_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Media>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Media>,
}

/// One CMS-authored presentation record, prior to map construction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresentationEntry {
    pub option_name: String,
    pub value: String,
    pub presentation: Presentation,
}
