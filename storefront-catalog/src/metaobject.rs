//! Raw CMS metaobject shapes
//!
//! Mirrors the GraphQL response shape for metaobjects: a flat list of
//! key/value fields where a field may also carry a typed `reference` (a
//! single nested record or media) or `references` (a list of nested
//! records). Unknown fields are tolerated everywhere.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One field of a metaobject
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetaobjectField {
    pub key: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Single referenced record or media, shape left to the consumer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub references: Option<ReferenceList>,
}

/// Connection wrapper around referenced records
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceList {
    #[serde(default)]
    pub nodes: Vec<Value>,
}

/// A CMS-authored metaobject record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metaobject {
    #[serde(default)]
    pub fields: Vec<MetaobjectField>,
}

impl Metaobject {
    /// Flatten the fields into a key -> value lookup, skipping fields
    /// without a scalar value.
    pub fn field_map(&self) -> HashMap<&str, &str> {
        self.fields
            .iter()
            .filter_map(|field| Some((field.key.as_str(), field.value.as_deref()?)))
            .collect()
    }

    pub fn field(&self, key: &str) -> Option<&MetaobjectField> {
        self.fields.iter().find(|field| field.key == key)
    }

    /// Nodes referenced by the named field, decoded as metaobjects.
    /// Nodes that do not decode are dropped.
    pub fn referenced_nodes(&self, key: &str) -> Vec<Metaobject> {
        self.field(key)
            .and_then(|field| field.references.as_ref())
            .map(|references| {
                references
                    .nodes
                    .iter()
                    .filter_map(|node| serde_json::from_value(node.clone()).ok())
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_map_skips_null_values() {
        let metaobject: Metaobject = serde_json::from_value(json!({
            "fields": [
                {"key": "label", "value": "Walnut"},
                {"key": "image", "value": null},
            ]
        }))
        .unwrap();

        let map = metaobject.field_map();
        assert_eq!(map.get("label"), Some(&"Walnut"));
        assert!(!map.contains_key("image"));
    }

    #[test]
    fn test_referenced_nodes_drop_undecodable() {
        let metaobject: Metaobject = serde_json::from_value(json!({
            "fields": [{
                "key": "swatches",
                "references": {"nodes": [
                    {"fields": [{"key": "label", "value": "Oak"}]},
                    null,
                ]}
            }]
        }))
        .unwrap();

        let nodes = metaobject.referenced_nodes("swatches");
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].field_map().get("label"), Some(&"Oak"));
        assert!(metaobject.referenced_nodes("missing").is_empty());
    }
}
