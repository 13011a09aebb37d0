//! Finish Palette Model

use super::media::Media;
use serde::{Deserialize, Serialize};

/// One finish swatch inside a palette
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Swatch {
    pub label: String,
    /// Raw underlying value (travels into cart attributes)
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Media>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ascending display sort key; missing sorts last
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<f64>,
}

/// Wood/finish palette, keyed by an owning option name/value pair
///
/// Constructed once per page load from CMS content, immutable thereafter,
/// and matched against the product's live selected options on each render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub option_name: String,
    pub option_value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub swatches: Vec<Swatch>,
}
