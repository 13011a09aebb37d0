//! Display ordering for option values

use std::cmp::Ordering;

use crate::models::OptionValueState;
use crate::options::presentation::PresentationMap;

/// Order option values for display.
///
/// Values with an authored sort order come first, ascending; values
/// without one keep their original relative order after them. The sort is
/// stable: equal sort keys tie-break on insertion order.
pub fn sort_for_display(
    values: Vec<OptionValueState>,
    option_name: &str,
    presentation_map: &PresentationMap,
) -> Vec<OptionValueState> {
    let mut keyed: Vec<(usize, Option<f64>, OptionValueState)> = values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let sort_order = presentation_map
                .lookup(option_name, &value.value)
                .and_then(|p| p.sort_order);
            (index, sort_order, value)
        })
        .collect();

    keyed.sort_by(|a, b| compare_sort_keys(a.1, a.0, b.1, b.0));
    keyed.into_iter().map(|(_, _, value)| value).collect()
}

/// Ascending by sort order, missing keys last, insertion order as
/// tie-break. Shared with swatch ordering in the catalog crate.
pub fn compare_sort_keys(
    a_order: Option<f64>,
    a_index: usize,
    b_order: Option<f64>,
    b_index: usize,
) -> Ordering {
    match (a_order, b_order) {
        (None, None) => a_index.cmp(&b_index),
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => a
            .partial_cmp(&b)
            .unwrap_or(Ordering::Equal)
            .then(a_index.cmp(&b_index)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Presentation, PresentationEntry};

    fn map_with_orders(orders: &[(&str, Option<f64>)]) -> PresentationMap {
        PresentationMap::from_entries(orders.iter().map(|(value, sort_order)| {
            PresentationEntry {
                option_name: "Size".to_string(),
                value: value.to_string(),
                presentation: Presentation {
                    sort_order: *sort_order,
                    ..Presentation::default()
                },
            }
        }))
    }

    #[test]
    fn test_defined_orders_first_undefined_stable() {
        let map = map_with_orders(&[("a", None), ("b", Some(3.0)), ("d", Some(1.0))]);
        let values = ["a", "b", "c", "d"]
            .map(|v| OptionValueState::new(v))
            .to_vec();

        let sorted = sort_for_display(values, "Size", &map);
        let order: Vec<&str> = sorted.iter().map(|v| v.value.as_str()).collect();
        // Sort keys [None, 3, None, 1] at indices [0,1,2,3] -> [3,1,0,2]
        assert_eq!(order, vec!["d", "b", "a", "c"]);
    }

    #[test]
    fn test_no_presentation_keeps_input_order() {
        let values = ["c", "a", "b"]
            .map(|v| OptionValueState::new(v))
            .to_vec();
        let sorted = sort_for_display(values, "Size", &PresentationMap::new());
        let order: Vec<&str> = sorted.iter().map(|v| v.value.as_str()).collect();
        assert_eq!(order, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_equal_orders_keep_input_order() {
        let map = map_with_orders(&[("x", Some(1.0)), ("y", Some(1.0))]);
        let values = ["y", "x"].map(|v| OptionValueState::new(v)).to_vec();
        let sorted = sort_for_display(values, "Size", &map);
        let order: Vec<&str> = sorted.iter().map(|v| v.value.as_str()).collect();
        assert_eq!(order, vec!["y", "x"]);
    }
}
