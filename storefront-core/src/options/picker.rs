//! Selection commands
//!
//! Pickers stay pure presentation: choosing a value produces a discrete
//! [`Selection`] the caller applies, rather than running a callback that
//! captures wider UI state.

use serde::{Deserialize, Serialize};

use crate::models::SelectedOption;
use crate::util::normalize;

/// A user's choice of one option value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub option_name: String,
    pub value: String,
}

impl Selection {
    pub fn new(option_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            option_name: option_name.into(),
            value: value.into(),
        }
    }
}

/// Apply a selection to the current selected-option list.
///
/// Replaces the entry for the same (normalized) option name in place, or
/// appends when the option was not selected yet. The input is untouched;
/// the result feeds the next variant query.
pub fn apply_selection(selected: &[SelectedOption], selection: &Selection) -> Vec<SelectedOption> {
    let name = normalize(&selection.option_name);
    let mut next: Vec<SelectedOption> = selected.to_vec();

    match next.iter_mut().find(|o| normalize(&o.name) == name) {
        Some(option) => option.value = selection.value.clone(),
        None => next.push(SelectedOption::new(
            selection.option_name.clone(),
            selection.value.clone(),
        )),
    }
    next
}

/// Whether an engraving-style option is currently switched on.
///
/// True when any option whose name contains "engraving" carries a value
/// other than empty, "none", or "no" (case-insensitive).
pub fn is_engraving_selected(selected_options: &[SelectedOption]) -> bool {
    let Some(option) = selected_options
        .iter()
        .find(|option| option.name.to_lowercase().contains("engraving"))
    else {
        return false;
    };

    let value = option.value.to_lowercase();
    !value.is_empty() && value != "none" && value != "no"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_selection_replaces_in_place() {
        let selected = vec![
            SelectedOption::new("Size", "Seats 4"),
            SelectedOption::new("Wood", "Oak"),
        ];
        let next = apply_selection(&selected, &Selection::new("wood", "Walnut"));

        assert_eq!(next.len(), 2);
        assert_eq!(next[1].name, "Wood");
        assert_eq!(next[1].value, "Walnut");
        // Input untouched
        assert_eq!(selected[1].value, "Oak");
    }

    #[test]
    fn test_apply_selection_appends_new_option() {
        let next = apply_selection(&[], &Selection::new("Size", "Seats 4"));
        assert_eq!(next, vec![SelectedOption::new("Size", "Seats 4")]);
    }

    #[test]
    fn test_is_engraving_selected() {
        let on = vec![SelectedOption::new("Engraving Style", "Script")];
        assert!(is_engraving_selected(&on));

        let off = vec![SelectedOption::new("Engraving Style", "None")];
        assert!(!is_engraving_selected(&off));
        let no = vec![SelectedOption::new("Engraving Style", "no")];
        assert!(!is_engraving_selected(&no));

        let unrelated = vec![SelectedOption::new("Wood", "Oak")];
        assert!(!is_engraving_selected(&unrelated));
    }
}
