//! Reserved attribute keys and the fixed customization fields

use serde::{Deserialize, Serialize};

use crate::models::{FieldSet, LineAttribute};

/// The set of cart-line attribute keys a product's customization owns,
/// in canonical write order.
///
/// Injected into every reconciliation call so the fixed legacy fields
/// and per-product dynamic field sets share one merge mechanism. Keys
/// outside the schema are opaque and survive merges untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSchema {
    reserved: Vec<String>,
}

impl AttributeSchema {
    pub const ENGRAVING_TEXT: &'static str = "Engraving Text";
    pub const LOGO_URL: &'static str = "Engraving Logo URL";
    pub const COLOR: &'static str = "Color";
    pub const NOTES: &'static str = "Customer Notes";

    /// The fixed legacy customization keys
    pub fn legacy() -> Self {
        Self {
            reserved: vec![
                Self::ENGRAVING_TEXT.to_string(),
                Self::LOGO_URL.to_string(),
                Self::COLOR.to_string(),
                Self::NOTES.to_string(),
            ],
        }
    }

    /// Reserved keys derived from a dynamic field set, plus any extra
    /// derived keys (e.g. the finish-color attribute). Duplicates keep
    /// their first position.
    pub fn from_field_set(
        field_set: &FieldSet,
        extra_keys: impl IntoIterator<Item = String>,
    ) -> Self {
        let mut reserved: Vec<String> = Vec::new();
        for key in field_set
            .fields
            .iter()
            .map(|field| field.key.clone())
            .chain(extra_keys)
        {
            if !reserved.contains(&key) {
                reserved.push(key);
            }
        }
        Self { reserved }
    }

    pub fn keys(&self) -> &[String] {
        &self.reserved
    }

    pub fn is_reserved(&self, key: &str) -> bool {
        self.reserved.iter().any(|reserved| reserved == key)
    }

    /// Reconcile a line's attributes with a new customization set.
    ///
    /// Every existing attribute under a reserved key is removed, then
    /// `updates` is appended in full: non-reserved attributes first in
    /// their original order, new reserved attributes after. Re-applying
    /// the same updates is a no-op beyond the first application.
    pub fn merge(
        &self,
        existing: &[LineAttribute],
        updates: Vec<LineAttribute>,
    ) -> Vec<LineAttribute> {
        let mut merged: Vec<LineAttribute> = existing
            .iter()
            .filter(|attribute| !self.is_reserved(&attribute.key))
            .cloned()
            .collect();
        merged.extend(updates);
        merged
    }

    /// Remove every reserved attribute, keeping the rest.
    pub fn clear(&self, existing: &[LineAttribute]) -> Vec<LineAttribute> {
        self.merge(existing, Vec::new())
    }
}

/// User-entered values for the fixed customization fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomFields {
    pub engraving_text: String,
    pub logo_url: String,
    pub color: String,
    pub notes: String,
}

impl CustomFields {
    /// Attributes for the trimmed, non-empty fields, in canonical order.
    /// Blank fields produce no attribute (never an empty-string value).
    pub fn normalize(&self) -> Vec<LineAttribute> {
        let slots = [
            (AttributeSchema::ENGRAVING_TEXT, &self.engraving_text),
            (AttributeSchema::LOGO_URL, &self.logo_url),
            (AttributeSchema::COLOR, &self.color),
            (AttributeSchema::NOTES, &self.notes),
        ];

        slots
            .into_iter()
            .filter_map(|(key, value)| {
                let trimmed = value.trim();
                (!trimmed.is_empty()).then(|| LineAttribute::new(key, trimmed))
            })
            .collect()
    }

    /// Extract the fixed fields from a line's attributes. Absent keys
    /// default to empty strings; unknown keys are ignored.
    pub fn parse(attributes: &[LineAttribute]) -> Self {
        let mut fields = Self::default();
        for attribute in attributes {
            match attribute.key.as_str() {
                AttributeSchema::ENGRAVING_TEXT => {
                    fields.engraving_text = attribute.value.clone();
                }
                AttributeSchema::LOGO_URL => fields.logo_url = attribute.value.clone(),
                AttributeSchema::COLOR => fields.color = attribute.value.clone(),
                AttributeSchema::NOTES => fields.notes = attribute.value.clone(),
                _ => {}
            }
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_omits_blank_fields() {
        let fields = CustomFields {
            engraving_text: "  To Dad  ".to_string(),
            logo_url: String::new(),
            color: "   ".to_string(),
            notes: "Ship early".to_string(),
        };

        let attributes = fields.normalize();
        assert_eq!(
            attributes,
            vec![
                LineAttribute::new("Engraving Text", "To Dad"),
                LineAttribute::new("Customer Notes", "Ship early"),
            ]
        );
    }

    #[test]
    fn test_parse_defaults_and_ignores_unknown() {
        let attributes = vec![
            LineAttribute::new("Gift Note", "Happy birthday"),
            LineAttribute::new("Color", "Walnut"),
        ];
        let fields = CustomFields::parse(&attributes);

        assert_eq!(fields.color, "Walnut");
        assert_eq!(fields.engraving_text, "");
        assert_eq!(fields.logo_url, "");
        assert_eq!(fields.notes, "");
    }

    #[test]
    fn test_merge_preserves_unreserved_attributes() {
        let schema = AttributeSchema::legacy();
        let existing = vec![
            LineAttribute::new("Gift Note", "Happy birthday"),
            LineAttribute::new("Engraving Text", "old"),
        ];
        let updates = CustomFields {
            engraving_text: "new".to_string(),
            ..CustomFields::default()
        }
        .normalize();

        let merged = schema.merge(&existing, updates);
        assert_eq!(
            merged,
            vec![
                LineAttribute::new("Gift Note", "Happy birthday"),
                LineAttribute::new("Engraving Text", "new"),
            ]
        );
    }

    #[test]
    fn test_merge_is_idempotent() {
        let schema = AttributeSchema::legacy();
        let existing = vec![
            LineAttribute::new("Gift Note", "Happy birthday"),
            LineAttribute::new("Color", "Oak"),
        ];
        let updates = CustomFields {
            color: "Walnut".to_string(),
            notes: "Ring twice".to_string(),
            ..CustomFields::default()
        }
        .normalize();

        let once = schema.merge(&existing, updates.clone());
        let twice = schema.merge(&once, updates);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_clear_removes_only_reserved() {
        let schema = AttributeSchema::legacy();
        let existing = vec![
            LineAttribute::new("Gift Note", "Happy birthday"),
            LineAttribute::new("Engraving Text", "To Dad"),
            LineAttribute::new("Customer Notes", "Ship early"),
        ];

        assert_eq!(
            schema.clear(&existing),
            vec![LineAttribute::new("Gift Note", "Happy birthday")]
        );
    }

    #[test]
    fn test_round_trip() {
        let fields = CustomFields {
            engraving_text: "To Dad".to_string(),
            logo_url: "https://cdn.example/logo.svg".to_string(),
            color: "Walnut".to_string(),
            notes: "Ship early".to_string(),
        };
        let existing = vec![LineAttribute::new("Gift Note", "Happy birthday")];

        let schema = AttributeSchema::legacy();
        let merged = schema.merge(&existing, fields.normalize());
        assert_eq!(CustomFields::parse(&merged), fields);
    }
}
