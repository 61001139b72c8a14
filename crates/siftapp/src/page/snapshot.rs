use super::memory::MemoryPage;
use crate::error::Result;
use crate::model::Item;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// A rendered page captured as JSON.
///
/// ```json
/// {
///   "elements": ["#property-search", "#results-count"],
///   "collections": {
///     ".property-card": [{ "id": "1", "attrs": { "zone": "West Bay" } }]
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSnapshot {
    /// Selectors of optional elements present on the page (controls, counters)
    #[serde(default)]
    pub elements: Vec<String>,
    /// Item collections keyed by item selector
    #[serde(default)]
    pub collections: BTreeMap<String, Vec<Item>>,
}

impl PageSnapshot {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn into_page(self) -> MemoryPage {
        self.collections
            .into_iter()
            .fold(MemoryPage::new().with_elements(self.elements), |page, (selector, items)| {
                page.with_items(selector, items)
            })
    }
}

impl MemoryPage {
    /// Load a page from a JSON snapshot file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(PageSnapshot::load(path)?.into_page())
    }
}
