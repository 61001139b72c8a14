//! Filter controls.
//!
//! A [`ControlSpec`] pairs the selector of one widget on the page (a search box,
//! a `<select>`, a group of category buttons) with the rule used to match its
//! current value against item attributes. The same type drives the property
//! search, the portion and inquiry selects, the tenant/contact/job/help text
//! searches and the price buckets.

use super::bucket::BucketSpec;
use super::date::{parse_item_date, DateWindow};
use super::text::TextQuery;
use crate::model::Item;
use chrono::NaiveDate;

/// How a control's value is matched against an item.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlKind {
    /// Free text, debounced, substring match across any of `fields`.
    Text { fields: Vec<String> },
    /// Discrete choice, exact equality with `field`.
    Select {
        field: String,
        /// Values meaning "no constraint" besides the empty string (e.g. "all").
        any_values: Vec<String>,
    },
    /// Numeric attribute mapped to a named bucket before comparison.
    Bucket { field: String, buckets: BucketSpec },
    /// Date attribute checked against a window relative to the reference date.
    DateWindow { field: String },
}

/// One filter control wired to an item collection.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlSpec {
    /// Selector of the widget (e.g. "#zone-filter")
    pub selector: String,
    /// The match rule
    pub kind: ControlKind,
}

impl ControlSpec {
    pub fn new(selector: impl Into<String>, kind: ControlKind) -> Self {
        Self {
            selector: selector.into(),
            kind,
        }
    }

    /// Convenience: a debounced text search over `fields`.
    pub fn text<I, F>(selector: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<String>,
    {
        Self::new(
            selector,
            ControlKind::Text {
                fields: fields.into_iter().map(Into::into).collect(),
            },
        )
    }

    /// Convenience: an exact-match select on `field`.
    pub fn select(selector: impl Into<String>, field: impl Into<String>) -> Self {
        Self::new(
            selector,
            ControlKind::Select {
                field: field.into(),
                any_values: Vec::new(),
            },
        )
    }

    /// Convenience: a bucket select on a numeric `field`.
    pub fn bucket(selector: impl Into<String>, field: impl Into<String>, buckets: BucketSpec) -> Self {
        Self::new(
            selector,
            ControlKind::Bucket {
                field: field.into(),
                buckets,
            },
        )
    }

    /// Convenience: a date window select on `field`.
    pub fn date_window(selector: impl Into<String>, field: impl Into<String>) -> Self {
        Self::new(
            selector,
            ControlKind::DateWindow {
                field: field.into(),
            },
        )
    }

    /// Declare an extra "no constraint" value. Only meaningful for selects.
    pub fn with_any_value(mut self, value: impl Into<String>) -> Self {
        if let ControlKind::Select { any_values, .. } = &mut self.kind {
            any_values.push(value.into());
        }
        self
    }

    /// Text controls wait for a quiet period; everything else applies on change.
    pub fn is_debounced(&self) -> bool {
        matches!(self.kind, ControlKind::Text { .. })
    }

    /// Check whether `value` places no constraint on items.
    pub fn is_unconstrained(&self, value: &str) -> bool {
        match &self.kind {
            ControlKind::Text { .. } => value.trim().is_empty(),
            ControlKind::Select { any_values, .. } => {
                value.is_empty() || any_values.iter().any(|v| v == value)
            }
            ControlKind::Bucket { .. } | ControlKind::DateWindow { .. } => value.is_empty(),
        }
    }

    /// Check if `item` passes this control with the control set to `value`.
    ///
    /// Missing attributes never match an active control. `today` is only read
    /// by date windows.
    pub fn matches(&self, item: &Item, value: &str, today: NaiveDate) -> bool {
        if self.is_unconstrained(value) {
            return true;
        }

        match &self.kind {
            ControlKind::Text { fields } => TextQuery::new(value).matches(item, fields),
            ControlKind::Select { field, .. } => item.attr(field) == Some(value),
            ControlKind::Bucket { field, buckets } => buckets.classify(item.attr(field)) == Some(value),
            ControlKind::DateWindow { field } => {
                let Some(window) = DateWindow::parse(value) else {
                    return false;
                };
                item.attr(field)
                    .and_then(parse_item_date)
                    .is_some_and(|date| window.contains(date, today))
            }
        }
    }

    /// The attribute names this control reads.
    pub fn fields(&self) -> Vec<&str> {
        match &self.kind {
            ControlKind::Text { fields } => fields.iter().map(String::as_str).collect(),
            ControlKind::Select { field, .. }
            | ControlKind::Bucket { field, .. }
            | ControlKind::DateWindow { field } => vec![field.as_str()],
        }
    }
}
