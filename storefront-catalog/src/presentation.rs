//! Presentation entry parsing

use serde::Deserialize;
use serde_json::Value;
use storefront_core::models::{Presentation, PresentationEntry, PresentationMode};
use storefront_core::options::PresentationMap;
use tracing::debug;

use crate::error::CatalogError;
use crate::media::resolve_media;

/// Raw CMS presentation row. Both camel- and snake-case spellings occur
/// in authored content; media and sort order keep their raw JSON shape
/// until resolution.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPresentationEntry {
    #[serde(default, rename = "optionName", alias = "option_name")]
    pub option_name: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "sortOrder", alias = "sort_order")]
    pub sort_order: Option<Value>,
    #[serde(default, rename = "type")]
    pub mode: Option<String>,
    #[serde(default, rename = "swatchColor", alias = "swatch_color")]
    pub swatch_color: Option<String>,
    #[serde(default)]
    pub image: Option<Value>,
    #[serde(default)]
    pub icon: Option<Value>,
}

/// Convert one raw row into a typed entry. Rows without an option name
/// or value are placeholders and yield `None`.
pub fn parse_presentation_entry(raw: &RawPresentationEntry) -> Option<PresentationEntry> {
    let option_name = non_empty(raw.option_name.as_deref())?;
    let value = non_empty(raw.value.as_deref())?;

    Some(PresentationEntry {
        option_name,
        value,
        presentation: Presentation {
            mode: raw.mode.as_deref().and_then(PresentationMode::parse),
            label: raw.label.clone(),
            description: raw.description.clone(),
            sort_order: raw.sort_order.as_ref().and_then(coerce_sort_order),
            swatch_color: raw.swatch_color.clone(),
            image: raw.image.as_ref().and_then(resolve_media),
            icon: raw.icon.as_ref().and_then(resolve_media),
        },
    })
}

/// Parse a list of raw presentation rows from a GraphQL payload,
/// dropping placeholder rows.
pub fn presentation_entries_from_value(
    raw: &Value,
) -> Result<Vec<PresentationEntry>, CatalogError> {
    let rows: Vec<RawPresentationEntry> = serde_json::from_value(raw.clone())?;
    Ok(rows
        .iter()
        .filter_map(|row| {
            let entry = parse_presentation_entry(row);
            if entry.is_none() {
                debug!("dropping presentation row without option name/value");
            }
            entry
        })
        .collect())
}

/// Parse straight into a [`PresentationMap`]; later rows win on
/// normalized-key collisions.
pub fn presentation_map_from_value(raw: &Value) -> Result<PresentationMap, CatalogError> {
    Ok(PresentationMap::from_entries(
        presentation_entries_from_value(raw)?,
    ))
}

/// Numbers pass through; numeric strings convert; anything else means
/// "no sort order" (sort last, by original order).
fn coerce_sort_order(raw: &Value) -> Option<f64> {
    match raw {
        Value::Number(number) => number.as_f64().filter(|n| n.is_finite()),
        Value::String(raw) => raw.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

fn non_empty(raw: Option<&str>) -> Option<String> {
    raw.filter(|s| !s.is_empty()).map(str::to_string)
}
