//! Line item field-set parsing

use serde_json::Value;
use storefront_core::models::{FieldKind, FieldSet, LineItemField};
use storefront_core::options::display::compare_sort_keys;
use tracing::debug;

use crate::error::CatalogError;
use crate::metaobject::Metaobject;

const DEFAULT_TITLE: &str = "Customization";

/// Parse one field-definition metaobject. The key, label, and kind are
/// required (several authored spellings are accepted); a field that
/// lacks any of them is dropped.
pub fn parse_field(metaobject: &Metaobject) -> Option<LineItemField> {
    let fields = metaobject.field_map();

    let key = first_non_empty(&fields, &["key", "attribute_key", "attributeKey"])?;
    let label = first_non_empty(&fields, &["label", "title", "name"])?;
    let kind = fields.get("type").and_then(|raw| FieldKind::parse(raw))?;

    let choices: Option<Vec<String>> = fields
        .get("choices")
        .or_else(|| fields.get("options"))
        .map(|raw| {
            raw.lines()
                .map(str::trim)
                .filter(|choice| !choice.is_empty())
                .map(str::to_string)
                .collect()
        })
        .filter(|choices: &Vec<String>| !choices.is_empty());

    Some(LineItemField {
        key,
        label,
        kind,
        help_text: fields.get("help_text").map(|raw| raw.to_string()),
        sort_order: fields
            .get("sort_order")
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|n| n.is_finite())
            .unwrap_or(0.0),
        required: fields
            .get("required")
            .is_some_and(|raw| raw.trim().eq_ignore_ascii_case("true")),
        max_length: fields
            .get("max_length")
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|&n| n > 0),
        show_when_option_name: fields
            .get("show_when_option_name")
            .map(|raw| raw.to_string()),
        show_when_option_value: fields
            .get("show_when_option_value")
            .map(|raw| raw.to_string()),
        choices,
    })
}

/// Parse a field-set metaobject: title (defaulting when unset) plus its
/// referenced field definitions, sorted ascending by sort order. A set
/// whose every field was dropped is itself dropped.
pub fn parse_field_set(metaobject: &Metaobject) -> Option<FieldSet> {
    let field_map = metaobject.field_map();
    let title = first_non_empty(&field_map, &["title", "name", "label"])
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    let mut nodes = metaobject.referenced_nodes("fields");
    if nodes.is_empty() {
        // Some authored sets carry the references on an arbitrary field
        nodes = metaobject
            .fields
            .iter()
            .find(|field| field.references.is_some())
            .map(|field| metaobject.referenced_nodes(&field.key))
            .unwrap_or_default();
    }

    let mut parsed: Vec<LineItemField> = Vec::new();
    for node in &nodes {
        match parse_field(node) {
            Some(field) => parsed.push(field),
            None => debug!("dropping field definition without key/label/type"),
        }
    }
    if parsed.is_empty() {
        return None;
    }

    let mut keyed: Vec<(usize, LineItemField)> = parsed.into_iter().enumerate().collect();
    keyed.sort_by(|a, b| {
        compare_sort_keys(Some(a.1.sort_order), a.0, Some(b.1.sort_order), b.0)
    });

    Some(FieldSet {
        title,
        fields: keyed.into_iter().map(|(_, field)| field).collect(),
    })
}

/// Parse a list of field-set metaobjects from a GraphQL payload.
pub fn field_sets_from_value(raw: &Value) -> Result<Vec<FieldSet>, CatalogError> {
    let nodes: Vec<Metaobject> = serde_json::from_value(raw.clone())?;
    Ok(nodes.iter().filter_map(parse_field_set).collect())
}

fn first_non_empty(
    fields: &std::collections::HashMap<&str, &str>,
    keys: &[&str],
) -> Option<String> {
    keys.iter().find_map(|key| {
        let trimmed = fields.get(key)?.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}
