//! End-to-end ingestion: raw CMS payloads through matching and
//! reconciliation.

use serde_json::json;
use storefront_catalog::{field_sets_from_value, palettes_from_value, presentation_map_from_value};
use storefront_core::cart::{AttributeSchema, FieldValues, collect_attributes};
use storefront_core::models::LineAttribute;
use storefront_core::options::match_palette;
use storefront_core::SelectedOption;

fn swatch_node(label: &str, sort_order: &str, url: &str) -> serde_json::Value {
    json!({"fields": [
        {"key": "label", "value": label},
        {"key": "value", "value": label.to_lowercase()},
        {"key": "sort_order", "value": sort_order},
        {"key": "image", "reference": {"image": {"url": url}}},
    ]})
}

#[test]
fn test_palette_payload_to_match() {
    let payload = json!([
        {"fields": [
            {"key": "wood_option_name", "value": "Wood Species"},
            {"key": "wood_option_value", "value": "Oak"},
            {"key": "swatches", "references": {"nodes": [
                swatch_node("Natural", "1", "https://cdn.example/natural.png"),
            ]}},
        ]},
        {"fields": [
            {"key": "wood_option_name", "value": "Wood Species"},
            {"key": "wood_option_value", "value": "Walnut"},
            {"key": "swatches", "references": {"nodes": [
                swatch_node("Umber", "2", "https://cdn.example/umber.png"),
                swatch_node("Ebony", "1", "https://cdn.example/ebony.png"),
            ]}},
        ]},
    ]);

    let palettes = palettes_from_value(&payload).unwrap();
    assert_eq!(palettes.len(), 2);

    let selected = vec![
        SelectedOption::new("Size", "Seats 4"),
        SelectedOption::new("wood species", "WALNUT"),
    ];
    let matched = match_palette(&palettes, &selected).unwrap();
    assert_eq!(matched.selected_value, "WALNUT");

    let labels: Vec<&str> = matched
        .palette
        .swatches
        .iter()
        .map(|s| s.label.as_str())
        .collect();
    assert_eq!(labels, vec!["Ebony", "Umber"]);
}

#[test]
fn test_presentation_payload_to_lookup() {
    let payload = json!([
        {"optionName": "Wood Species", "value": "Oak", "sortOrder": "1",
         "image": "https://cdn.example/oak.png"},
        {"option_name": "wood species", "value": "oak", "sort_order": 4},
        {"label": "placeholder"},
    ]);

    let map = presentation_map_from_value(&payload).unwrap();
    // Normalized key: last write wins; exact key: first entry intact
    assert_eq!(
        map.lookup(" WOOD SPECIES ", "OAK").unwrap().sort_order,
        Some(4.0)
    );
    assert_eq!(
        map.lookup("Wood Species", "Oak").unwrap().sort_order,
        Some(1.0)
    );
}

#[test]
fn test_field_set_payload_to_cart_attributes() {
    let payload = json!([{
        "fields": [
            {"key": "title", "value": "Engraving"},
            {"key": "fields", "references": {"nodes": [
                {"fields": [
                    {"key": "key", "value": "Engraving Text"},
                    {"key": "label", "value": "Engraving text"},
                    {"key": "type", "value": "textarea"},
                    {"key": "sort_order", "value": "1"},
                    {"key": "show_when_option_name", "value": "Engraving"},
                ]},
                {"fields": [
                    {"key": "key", "value": "Monogram"},
                    {"key": "label", "value": "Monogram"},
                    {"key": "type", "value": "text"},
                    {"key": "sort_order", "value": "0"},
                ]},
            ]}},
        ]
    }]);

    let sets = field_sets_from_value(&payload).unwrap();
    let set = &sets[0];
    assert_eq!(set.title, "Engraving");

    let selected = vec![SelectedOption::new("Engraving Style", "Script")];
    let values: FieldValues = [("Monogram", " JW "), ("Engraving Text", "To Dad")]
        .into_iter()
        .collect();

    let updates = collect_attributes(set, &values, &selected);
    assert_eq!(
        updates,
        vec![
            LineAttribute::new("Monogram", "JW"),
            LineAttribute::new("Engraving Text", "To Dad"),
        ]
    );

    let schema = AttributeSchema::from_field_set(set, ["Finish Color".to_string()]);
    let existing = vec![
        LineAttribute::new("Gift Note", "Happy birthday"),
        LineAttribute::new("Monogram", "old"),
        LineAttribute::new("Finish Color", "Ash Grey"),
    ];
    let merged = schema.merge(&existing, updates);
    assert_eq!(
        merged,
        vec![
            LineAttribute::new("Gift Note", "Happy birthday"),
            LineAttribute::new("Monogram", "JW"),
            LineAttribute::new("Engraving Text", "To Dad"),
        ]
    );
}
