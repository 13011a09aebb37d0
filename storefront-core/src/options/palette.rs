//! Finish palette matching

use crate::models::{Palette, SelectedOption};
use crate::util::normalize;

/// Result of matching the palette list against the live selected options
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteMatch<'a> {
    pub palette: &'a Palette,
    /// Raw (pre-normalization) selected option value that matched
    pub selected_value: &'a str,
}

/// Find the palette owned by one of the currently selected options.
///
/// Names and values compare trimmed and lowercased. Palettes are tried in
/// input (CMS source) order and the first match wins, so the result is
/// stable for a fixed palette list and selection. A matching palette with
/// zero swatches is still returned; emptiness is the caller's call.
pub fn match_palette<'a>(
    palettes: &'a [Palette],
    selected_options: &'a [SelectedOption],
) -> Option<PaletteMatch<'a>> {
    for palette in palettes {
        let name = normalize(&palette.option_name);
        let value = normalize(&palette.option_value);
        if value.is_empty() {
            continue;
        }

        let matched = selected_options
            .iter()
            .find(|option| normalize(&option.name) == name && normalize(&option.value) == value);

        if let Some(option) = matched {
            return Some(PaletteMatch {
                palette,
                selected_value: &option.value,
            });
        }
    }

    None
}
