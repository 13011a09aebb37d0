//! Two-tier size picker derivation
//!
//! A seating-capacity option mixes base sizes and extension tiers in one
//! flat value list. This module splits that list into a base-size row and
//! an extension row for the selected base, resolving each rendered entry
//! to the concrete option value a selection should navigate to.

use std::collections::HashMap;

use crate::models::OptionValueState;
use crate::options::size::{SizeExtension, make_size_value, parse_size_value};

/// Rendering plan for a seating-capacity option
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SizePickerPlan {
    /// One entry per distinct base size, in first-seen order
    pub base_row: Vec<OptionValueState>,
    /// One entry per extension tier of the selected base; empty when no
    /// base is selected
    pub extension_row: Vec<OptionValueState>,
    /// Values whose base or extension clause failed to decode, in input
    /// order; rendered flat, never dropped
    pub ungrouped: Vec<OptionValueState>,
}

struct SizeEntry<'a> {
    base: String,
    value: &'a OptionValueState,
}

/// Derive the two-tier plan for a size option.
///
/// Returns `None` when no value fully decodes as a size value; callers
/// then render the option as a plain flat list.
pub fn build_size_picker(values: &[OptionValueState]) -> Option<SizePickerPlan> {
    let mut entries: Vec<SizeEntry<'_>> = Vec::new();
    let mut ungrouped: Vec<OptionValueState> = Vec::new();

    for value in values {
        let parsed = parse_size_value(&value.value);
        match (parsed.base, parsed.ext) {
            (Some(base), Some(_)) => entries.push(SizeEntry { base, value }),
            _ => ungrouped.push(value.clone()),
        }
    }

    if entries.is_empty() {
        return None;
    }

    let mut base_order: Vec<String> = Vec::new();
    for entry in &entries {
        if !base_order.contains(&entry.base) {
            base_order.push(entry.base.clone());
        }
    }

    let value_map: HashMap<&str, &OptionValueState> = values
        .iter()
        .map(|value| (value.value.as_str(), value))
        .collect();

    let active_parsed = values
        .iter()
        .find(|value| value.selected)
        .map(|value| parse_size_value(&value.value));
    let selected_base = active_parsed.as_ref().and_then(|p| p.base.clone());
    let selected_ext = active_parsed.as_ref().and_then(|p| p.ext);

    let base_row = base_order
        .iter()
        .map(|base| {
            let default = default_value(&value_map, base);
            let target = resolve_target(&value_map, base, selected_ext);
            let has_available = entries
                .iter()
                .any(|entry| &entry.base == base && entry.value.available);

            OptionValueState {
                value: target
                    .or(default)
                    .map(|v| v.value.clone())
                    .unwrap_or_else(|| base.clone()),
                label: Some(base.clone()),
                selected: selected_base.as_deref() == Some(base.as_str()),
                available: has_available,
                exists: default.is_some(),
                disabled: !has_available,
                swatch_color: default.and_then(|v| v.swatch_color.clone()),
                swatch_image: default.and_then(|v| v.swatch_image.clone()),
            }
        })
        .collect();

    let extension_row = match selected_base.as_deref() {
        None => Vec::new(),
        Some(base) => SizeExtension::ALL
            .iter()
            .map(|&ext| {
                let target = lookup(&value_map, base, ext);
                let available = target.is_some_and(|v| v.available);

                OptionValueState {
                    value: target
                        .map(|v| v.value.clone())
                        .unwrap_or_else(|| make_size_value(base, ext)),
                    label: Some(extension_label(ext)),
                    selected: match selected_ext {
                        Some(selected) => selected == ext,
                        None => ext == SizeExtension::None,
                    },
                    available,
                    exists: target.is_some(),
                    disabled: !available,
                    swatch_color: target.and_then(|v| v.swatch_color.clone()),
                    swatch_image: target.and_then(|v| v.swatch_image.clone()),
                }
            })
            .collect(),
    };

    Some(SizePickerPlan {
        base_row,
        extension_row,
        ungrouped,
    })
}

type ValueMap<'a> = HashMap<&'a str, &'a OptionValueState>;

fn lookup<'a>(value_map: &ValueMap<'a>, base: &str, ext: SizeExtension) -> Option<&'a OptionValueState> {
    value_map.get(make_size_value(base, ext).as_str()).copied()
}

/// Target value when this base is chosen: keep the current extension
/// tier when purchasable, fall back to any purchasable tier, then to
/// whatever exists.
fn resolve_target<'a>(
    value_map: &ValueMap<'a>,
    base: &str,
    selected_ext: Option<SizeExtension>,
) -> Option<&'a OptionValueState> {
    let preferred = lookup(value_map, base, selected_ext.unwrap_or(SizeExtension::None));
    if preferred.is_some_and(|v| v.available) {
        return preferred;
    }
    let no_extension = lookup(value_map, base, SizeExtension::None);
    if no_extension.is_some_and(|v| v.available) {
        return no_extension;
    }
    for ext in SizeExtension::ALL {
        let candidate = lookup(value_map, base, ext);
        if candidate.is_some_and(|v| v.available) {
            return candidate;
        }
    }
    preferred.or(no_extension)
}

fn default_value<'a>(value_map: &ValueMap<'a>, base: &str) -> Option<&'a OptionValueState> {
    SizeExtension::ALL
        .iter()
        .find_map(|&ext| lookup(value_map, base, ext))
}

fn extension_label(ext: SizeExtension) -> String {
    match ext.seat_count() {
        None => "No extension".to_string(),
        Some(seats) => format!("+{seats} seats"),
    }
}
