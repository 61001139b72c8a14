//! # Page Boundary
//!
//! The filter never touches a rendering engine. Everything it reads and writes
//! goes through two traits:
//!
//! - [`ItemProvider`]: returns the item records of a collection and reports
//!   which optional elements (controls, counters) exist on the page.
//! - [`ItemView`]: receives the output of a recompute, one visibility flag per
//!   item and the counter text.
//!
//! ## Design Rationale
//!
//! The page is abstracted behind traits to:
//! - Enable **headless testing** with [`memory::MemoryPage`]
//! - Allow **other front ends** (a WASM binding, a TUI) without changing core logic
//! - Keep matching rules **decoupled** from how items are rendered
//!
//! ## Implementations
//!
//! - [`memory::MemoryPage`]: owns items, elements and the last rendered state
//! - [`snapshot::PageSnapshot`]: JSON file format that loads into a `MemoryPage`
//!
//! The page content is assumed immutable for the duration of one filter session;
//! only visibility and counter text change.

use crate::error::Result;
use crate::model::Item;

pub mod memory;
pub mod snapshot;

/// Read side of a rendered page.
pub trait ItemProvider {
    /// All items matching `selector`, in render order. Unknown selectors yield no items.
    fn items(&self, selector: &str) -> Result<Vec<Item>>;

    /// Whether an optional element (control or counter) exists on the page.
    fn has_element(&self, selector: &str) -> bool;
}

/// Write side of a rendered page.
pub trait ItemView {
    /// Show or hide one item of a collection.
    fn set_visible(&mut self, selector: &str, id: &str, visible: bool);

    /// Replace the text content of an element.
    fn set_text(&mut self, selector: &str, text: &str);
}
