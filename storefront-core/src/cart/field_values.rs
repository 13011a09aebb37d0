//! Dynamic field-set values and visibility

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{FieldSet, LineAttribute, LineItemField, SelectedOption};
use crate::util::normalize;

/// User-entered values for a dynamic field set, keyed by field key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValues {
    values: HashMap<String, String>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// Whether a field is visible under the current selection.
///
/// A field without a `show_when` predicate is always visible. Otherwise
/// an option whose normalized name contains (or equals) the predicate
/// name must be selected, and when a predicate value is present too, the
/// selected value must contain (or equal) it.
pub fn field_visible(field: &LineItemField, selected_options: &[SelectedOption]) -> bool {
    let Some(want_name) = field.show_when_option_name.as_deref() else {
        return true;
    };
    let want_name = normalize(want_name);

    let Some(option) = selected_options.iter().find(|option| {
        let name = normalize(&option.name);
        name == want_name || name.contains(&want_name)
    }) else {
        return false;
    };

    match field.show_when_option_value.as_deref() {
        None => true,
        Some(want_value) => {
            let want_value = normalize(want_value);
            let value = normalize(&option.value);
            value == want_value || value.contains(&want_value)
        }
    }
}

/// Collect the visible, trimmed, non-empty field values into attributes,
/// in field-set order.
pub fn collect_attributes(
    field_set: &FieldSet,
    values: &FieldValues,
    selected_options: &[SelectedOption],
) -> Vec<LineAttribute> {
    field_set
        .fields
        .iter()
        .filter(|field| field_visible(field, selected_options))
        .filter_map(|field| {
            let trimmed = values.get(&field.key)?.trim();
            (!trimmed.is_empty()).then(|| LineAttribute::new(field.key.clone(), trimmed))
        })
        .collect()
}

/// Keys of visible required fields that still lack a value
pub fn missing_required<'a>(
    field_set: &'a FieldSet,
    values: &FieldValues,
    selected_options: &[SelectedOption],
) -> Vec<&'a str> {
    field_set
        .fields
        .iter()
        .filter(|field| field.required && field_visible(field, selected_options))
        .filter(|field| {
            values
                .get(&field.key)
                .is_none_or(|value| value.trim().is_empty())
        })
        .map(|field| field.key.as_str())
        .collect()
}
