use super::{ItemProvider, ItemView};
use crate::error::Result;
use crate::model::Item;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// In-memory page for tests, snapshots and headless use.
///
/// Items start visible, as rendered by the server.
#[derive(Debug, Default, Clone)]
pub struct MemoryPage {
    collections: BTreeMap<String, Vec<Item>>,
    elements: BTreeSet<String>,
    hidden: HashMap<String, BTreeSet<String>>,
    texts: BTreeMap<String, String>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(mut self, selector: impl Into<String>, items: Vec<Item>) -> Self {
        self.collections
            .entry(selector.into())
            .or_default()
            .extend(items);
        self
    }

    pub fn with_element(mut self, selector: impl Into<String>) -> Self {
        self.elements.insert(selector.into());
        self
    }

    pub fn with_elements<I, S>(mut self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.elements.extend(selectors.into_iter().map(Into::into));
        self
    }

    /// Current visibility of an item. Unknown items read as visible.
    pub fn is_visible(&self, selector: &str, id: &str) -> bool {
        !self
            .hidden
            .get(selector)
            .is_some_and(|hidden| hidden.contains(id))
    }

    /// Ids of the currently visible items of a collection, in render order.
    pub fn visible_ids(&self, selector: &str) -> Vec<String> {
        self.collections
            .get(selector)
            .map(|items| {
                items
                    .iter()
                    .filter(|item| self.is_visible(selector, &item.id))
                    .map(|item| item.id.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn text(&self, selector: &str) -> Option<&str> {
        self.texts.get(selector).map(String::as_str)
    }
}

impl ItemProvider for MemoryPage {
    fn items(&self, selector: &str) -> Result<Vec<Item>> {
        Ok(self.collections.get(selector).cloned().unwrap_or_default())
    }

    fn has_element(&self, selector: &str) -> bool {
        self.elements.contains(selector)
    }
}

impl ItemView for MemoryPage {
    fn set_visible(&mut self, selector: &str, id: &str, visible: bool) {
        let hidden = self.hidden.entry(selector.to_string()).or_default();
        if visible {
            hidden.remove(id);
        } else {
            hidden.insert(id.to_string());
        }
    }

    fn set_text(&mut self, selector: &str, text: &str) {
        // Counters only exist if the page rendered them
        if self.elements.contains(selector) {
            self.texts.insert(selector.to_string(), text.to_string());
        }
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub const PROPERTY_CARDS: &str = ".property-card";

    pub fn property(id: &str, name: &str, zone: &str, price: &str, bedrooms: &str) -> Item {
        Item::new(id)
            .with_attr("property-name", name)
            .with_attr("zone", zone)
            .with_attr("price", price)
            .with_attr("bedrooms", bedrooms)
    }

    pub struct PageFixture {
        pub page: MemoryPage,
    }

    impl Default for PageFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl PageFixture {
        pub fn new() -> Self {
            Self {
                page: MemoryPage::new(),
            }
        }

        /// The full property listing: search box, three selects and the counter.
        pub fn property_listing(self) -> Self {
            self.with_elements(&[
                "#property-search",
                "#zone-filter",
                "#price-filter",
                "#bedroom-filter",
                "#results-count",
            ])
        }

        pub fn with_elements(mut self, selectors: &[&str]) -> Self {
            self.page = self.page.with_elements(selectors.iter().copied());
            self
        }

        pub fn with_property(
            mut self,
            id: &str,
            name: &str,
            zone: &str,
            price: &str,
            bedrooms: &str,
        ) -> Self {
            self.page = self
                .page
                .with_items(PROPERTY_CARDS, vec![property(id, name, zone, price, bedrooms)]);
            self
        }

        /// Marina Tower (West Bay) and Pearl Residences (The Pearl).
        pub fn with_doha_properties(self) -> Self {
            self.with_property("1", "Marina Tower", "West Bay", "2999", "2")
                .with_property("2", "Pearl Residences", "The Pearl", "6000", "3")
        }

        pub fn build(self) -> MemoryPage {
            self.page
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn items_keep_render_order() {
        let page = PageFixture::new().with_doha_properties().build();
        let ids: Vec<_> = page
            .items(PROPERTY_CARDS)
            .unwrap()
            .into_iter()
            .map(|item| item.id)
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn unknown_collection_is_empty() {
        let page = MemoryPage::new();
        assert!(page.items(".job-card").unwrap().is_empty());
    }

    #[test]
    fn items_start_visible_and_toggle() {
        let mut page = PageFixture::new().with_doha_properties().build();
        assert_eq!(page.visible_ids(PROPERTY_CARDS), vec!["1", "2"]);

        page.set_visible(PROPERTY_CARDS, "1", false);
        assert_eq!(page.visible_ids(PROPERTY_CARDS), vec!["2"]);

        page.set_visible(PROPERTY_CARDS, "1", true);
        assert!(page.is_visible(PROPERTY_CARDS, "1"));
    }

    #[test]
    fn text_only_written_to_existing_elements() {
        let mut page = PageFixture::new().with_elements(&["#results-count"]).build();

        page.set_text("#results-count", "2 properties found");
        page.set_text("#job-count", "0 jobs available");

        assert_eq!(page.text("#results-count"), Some("2 properties found"));
        assert_eq!(page.text("#job-count"), None);
    }

    #[test]
    fn has_element_reflects_rendered_controls() {
        let page = PageFixture::new().property_listing().build();
        assert!(page.has_element("#zone-filter"));
        assert!(!page.has_element("#job-search"));
    }
}
