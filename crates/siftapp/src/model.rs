use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A rendered record (property card, job card, tenant row, help article...).
///
/// Items carry only their identifier and data attributes. Whether an item is
/// visible is never stored here; it is derived on every filter pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
}

impl Item {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attrs: BTreeMap::new(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }
}

/// Outcome of one recompute pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultSummary {
    /// Ids of visible items, in render order.
    pub visible_ids: Vec<String>,
    pub total: usize,
    /// Rendered counter text, when the page has a counter element.
    pub counter_text: Option<String>,
}

impl ResultSummary {
    pub fn visible(&self) -> usize {
        self.visible_ids.len()
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.visible_ids.iter().any(|v| v == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attr_lookup() {
        let item = Item::new("1").with_attr("zone", "West Bay");
        assert_eq!(item.attr("zone"), Some("West Bay"));
        assert_eq!(item.attr("price"), None);
    }

    #[test]
    fn item_deserializes_without_attrs() {
        let item: Item = serde_json::from_str(r#"{"id":"7"}"#).unwrap();
        assert_eq!(item.id, "7");
        assert!(item.attrs.is_empty());
    }

    #[test]
    fn summary_counts_visible() {
        let summary = ResultSummary {
            visible_ids: vec!["a".into(), "c".into()],
            total: 3,
            counter_text: None,
        };
        assert_eq!(summary.visible(), 2);
        assert!(summary.is_visible("c"));
        assert!(!summary.is_visible("b"));
    }
}
