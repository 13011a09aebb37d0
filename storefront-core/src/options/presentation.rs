//! Presentation map construction and lookup
//!
//! CMS-authored presentation records are keyed by `"{name}::{value}"`.
//! Each record is stored under both its exact and its normalized key so
//! lookups survive case/whitespace drift between the CMS and the catalog.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{OptionValueState, Presentation, PresentationEntry, PresentationMode};
use crate::util::normalize;

fn presentation_key(option_name: &str, value: &str) -> String {
    format!("{option_name}::{value}")
}

/// Lookup of (option name, option value) -> presentation metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresentationMap {
    entries: HashMap<String, Presentation>,
}

impl PresentationMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Build the map from CMS records.
    ///
    /// Entries with an empty option name or value are dropped (CMS
    /// content may include placeholder rows). When two entries collide on
    /// the same normalized key, the later one wins.
    pub fn from_entries(entries: impl IntoIterator<Item = PresentationEntry>) -> Self {
        let mut map = Self::new();
        for entry in entries {
            if entry.option_name.is_empty() || entry.value.is_empty() {
                continue;
            }
            map.insert(&entry.option_name, &entry.value, entry.presentation);
        }
        map
    }

    /// Insert one record under both its exact and normalized keys.
    pub fn insert(&mut self, option_name: &str, value: &str, presentation: Presentation) {
        let exact = presentation_key(option_name, value);
        let normalized = presentation_key(&normalize(option_name), &normalize(value));
        if normalized != exact {
            self.entries.insert(normalized, presentation.clone());
        }
        self.entries.insert(exact, presentation);
    }

    /// Insert a value-only record, reachable through the bare-value
    /// fallback of [`Self::lookup`].
    pub fn insert_bare(&mut self, value: &str, presentation: Presentation) {
        self.entries.insert(value.to_string(), presentation);
    }

    /// Look up the presentation for one option value.
    ///
    /// Precedence: exact key, then normalized key, then the bare value.
    pub fn lookup(&self, option_name: &str, value: &str) -> Option<&Presentation> {
        self.entries
            .get(&presentation_key(option_name, value))
            .or_else(|| {
                self.entries
                    .get(&presentation_key(&normalize(option_name), &normalize(value)))
            })
            .or_else(|| self.entries.get(value))
    }
}

/// Resolve the visual mode for one option value.
///
/// An explicit mode wins; otherwise swatch data (variant swatch image or
/// color, or an authored swatch color) selects `Swatch`, an authored
/// image selects `Thumbnail`, an authored icon selects `Icon`, and plain
/// text is the fallback.
pub fn resolve_mode(
    state: &OptionValueState,
    presentation: Option<&Presentation>,
) -> PresentationMode {
    if let Some(mode) = presentation.and_then(|p| p.mode) {
        return mode;
    }

    let has_swatch = state.swatch_image.is_some()
        || non_empty(state.swatch_color.as_deref())
        || presentation.is_some_and(|p| non_empty(p.swatch_color.as_deref()));
    if has_swatch {
        return PresentationMode::Swatch;
    }
    if presentation.is_some_and(|p| p.image.is_some()) {
        return PresentationMode::Thumbnail;
    }
    if presentation.is_some_and(|p| p.icon.is_some()) {
        return PresentationMode::Icon;
    }

    PresentationMode::Text
}

/// Display label for one option value: authored label, then the value's
/// own label override, then the raw value.
pub fn display_label<'a>(
    state: &'a OptionValueState,
    presentation: Option<&'a Presentation>,
) -> &'a str {
    presentation
        .and_then(|p| p.label.as_deref())
        .or(state.label.as_deref())
        .unwrap_or(&state.value)
}

fn non_empty(raw: Option<&str>) -> bool {
    raw.is_some_and(|s| !s.is_empty())
}
