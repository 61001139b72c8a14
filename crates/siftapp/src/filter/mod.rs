//! # Filtering Rules
//!
//! This module decides whether a single item is visible for a given filter state.
//! It knows nothing about timers, pages or counters: [`is_visible`] is a pure
//! function of the item, the wired controls, the current control values and the
//! reference date used by date windows.
//!
//! ## Control Kinds
//!
//! | Kind | Empty value | Match rule |
//! |------|-------------|------------|
//! | [`ControlKind::Text`] | blank after trim | case-insensitive substring in ANY configured field |
//! | [`ControlKind::Select`] | `""` or a declared "any" value | exact equality with one attribute |
//! | [`ControlKind::Bucket`] | `""` | attribute parsed as a number, bucket name equality |
//! | [`ControlKind::DateWindow`] | `""` | attribute parsed as a date, inside `today`/`week`/`month` |
//!
//! Every control is AND-combined: an item is visible only when every control
//! either has an empty value or matches.

use crate::model::Item;
use chrono::NaiveDate;
use std::collections::BTreeMap;

pub mod bucket;
pub mod control;
pub mod date;
pub mod text;

pub use bucket::{Bucket, BucketSpec};
pub use control::{ControlKind, ControlSpec};
pub use date::DateWindow;
pub use text::TextQuery;

/// Current value of every control, keyed by control selector.
///
/// A control with no recorded value reads as `""`, which never constrains.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    values: BTreeMap<String, String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, selector: impl Into<String>, value: impl Into<String>) {
        self.values.insert(selector.into(), value.into());
    }

    pub fn get(&self, selector: &str) -> &str {
        self.values.get(selector).map(String::as_str).unwrap_or("")
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

/// Check whether `item` passes every control for the given state.
pub fn is_visible(
    item: &Item,
    controls: &[ControlSpec],
    state: &FilterState,
    today: NaiveDate,
) -> bool {
    controls
        .iter()
        .all(|control| control.matches(item, state.get(&control.selector), today))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
    }

    fn controls() -> Vec<ControlSpec> {
        vec![
            ControlSpec::text("#property-search", ["property-name", "zone"]),
            ControlSpec::select("#zone-filter", "zone"),
            ControlSpec::bucket("#price-filter", "price", BucketSpec::price_ranges()),
        ]
    }

    fn marina() -> Item {
        Item::new("1")
            .with_attr("property-name", "Marina Tower")
            .with_attr("zone", "West Bay")
            .with_attr("price", "4500")
    }

    #[test]
    fn empty_state_shows_everything() {
        assert!(is_visible(&marina(), &controls(), &FilterState::new(), today()));
    }

    #[test]
    fn text_and_select_are_and_combined() {
        let mut state = FilterState::new();
        state.set("#property-search", "marina");
        state.set("#zone-filter", "The Pearl");
        assert!(!is_visible(&marina(), &controls(), &state, today()));

        state.set("#zone-filter", "West Bay");
        assert!(is_visible(&marina(), &controls(), &state, today()));
    }

    #[test]
    fn bucket_participates_in_and() {
        let mut state = FilterState::new();
        state.set("#price-filter", "high");
        assert!(!is_visible(&marina(), &controls(), &state, today()));

        state.set("#price-filter", "mid");
        assert!(is_visible(&marina(), &controls(), &state, today()));
    }

    #[test]
    fn state_values_for_unwired_selectors_are_ignored() {
        let mut state = FilterState::new();
        state.set("#bedroom-filter", "3");
        assert!(is_visible(&marina(), &controls(), &state, today()));
    }

    #[test]
    fn clearing_state_restores_visibility() {
        let mut state = FilterState::new();
        state.set("#property-search", "nothing matches this");
        assert!(!is_visible(&marina(), &controls(), &state, today()));

        state.clear();
        assert!(is_visible(&marina(), &controls(), &state, today()));
    }
}
