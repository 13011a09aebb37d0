//! Palette and swatch parsing

use serde_json::Value;
use storefront_core::models::{Palette, Swatch};
use storefront_core::options::display::compare_sort_keys;
use tracing::debug;

use crate::error::CatalogError;
use crate::media::resolve_media;
use crate::metaobject::Metaobject;

/// Parse one swatch metaobject. Requires a trimmed, non-empty `label`
/// and `value`; anything else is optional.
pub fn parse_swatch(metaobject: &Metaobject) -> Option<Swatch> {
    let fields = metaobject.field_map();

    let label = fields.get("label").map(|raw| raw.trim()).unwrap_or("");
    let value = fields.get("value").map(|raw| raw.trim()).unwrap_or("");
    if label.is_empty() || value.is_empty() {
        return None;
    }

    let image = metaobject
        .field("image")
        .and_then(|field| field.reference.as_ref())
        .and_then(resolve_media);

    Some(Swatch {
        label: label.to_string(),
        value: value.to_string(),
        image,
        description: fields.get("description").map(|raw| raw.to_string()),
        sort_order: fields.get("sort_order").and_then(|raw| parse_number(raw)),
    })
}

/// Parse one palette metaobject. Requires the owning option name/value
/// pair; swatches come from the `swatches` reference list, sorted
/// ascending by sort key with missing keys last.
pub fn parse_palette(metaobject: &Metaobject) -> Option<Palette> {
    let fields = metaobject.field_map();

    let option_name = fields
        .get("wood_option_name")
        .map(|raw| raw.trim())
        .unwrap_or("");
    let option_value = fields
        .get("wood_option_value")
        .map(|raw| raw.trim())
        .unwrap_or("");
    if option_name.is_empty() || option_value.is_empty() {
        return None;
    }

    let mut swatches: Vec<Swatch> = Vec::new();
    for node in metaobject.referenced_nodes("swatches") {
        match parse_swatch(&node) {
            Some(swatch) => swatches.push(swatch),
            None => debug!(option_value, "dropping malformed swatch node"),
        }
    }

    let mut keyed: Vec<(usize, Swatch)> = swatches.into_iter().enumerate().collect();
    keyed.sort_by(|a, b| compare_sort_keys(a.1.sort_order, a.0, b.1.sort_order, b.0));

    Some(Palette {
        option_name: option_name.to_string(),
        option_value: option_value.to_string(),
        title: fields.get("title").map(|raw| raw.to_string()),
        swatches: keyed.into_iter().map(|(_, swatch)| swatch).collect(),
    })
}

/// Parse a list of palette metaobjects from a raw GraphQL payload.
/// Malformed individual palettes are dropped.
pub fn palettes_from_value(raw: &Value) -> Result<Vec<Palette>, CatalogError> {
    let nodes: Vec<Metaobject> = serde_json::from_value(raw.clone())?;
    Ok(nodes
        .iter()
        .filter_map(|node| {
            let palette = parse_palette(node);
            if palette.is_none() {
                debug!("dropping palette metaobject without option name/value");
            }
            palette
        })
        .collect())
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}
