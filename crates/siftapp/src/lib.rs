//! # Sift Architecture
//!
//! Sift is a **UI-agnostic list filtering library**. Listing pages (property
//! cards, job cards, tenants, contacts, help articles) render every item up
//! front; sift decides which of them stay visible as the user types into a
//! search box or picks options in selects, and what the result counter says.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/sift)                                    │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs) + Command Layer (commands/*.rs)         │
//! │  - Resolves presets and configuration                       │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Filter Core (component.rs, filter/, debounce.rs)           │
//! │  - AttributeFilter: configure / input / change / advance    │
//! │  - Pure matching rules, trailing-edge debounce              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Boundaries (page/, saved/)                                 │
//! │  - ItemProvider / ItemView traits: the rendered page        │
//! │  - KeyValueStore trait: saved id lists and preferences      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No Rendering Engine, No Clock
//!
//! The filter core reads items through [`page::ItemProvider`], writes
//! visibility through [`page::ItemView`] and receives event times from its
//! caller. The same core can back a browser binding, a TUI, or the CLI in
//! this repository, and every behavior (including debouncing) is testable
//! with plain values.
//!
//! ## Testing Strategy
//!
//! 1. **Core** (`filter/`, `debounce.rs`, `component.rs`): thorough unit tests
//!    of matching and timing. This is where most tests live.
//! 2. **Commands** (`commands/*.rs`): tests of one-shot filtering, replays and
//!    saved lists against in-memory pages and storage.
//! 3. **API** (`api.rs`): dispatch and preset resolution.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`component`]: The debounced attribute filter
//! - [`filter`]: Matching rules per control kind
//! - [`debounce`]: Trailing-edge debouncer
//! - [`page`]: Page boundary traits, in-memory page, JSON snapshots
//! - [`presets`]: Per-listing filter configurations
//! - [`saved`]: Saved id lists and UI preferences
//! - [`model`]: Core data types (`Item`, `ResultSummary`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod component;
pub mod config;
pub mod debounce;
pub mod error;
pub mod filter;
pub mod model;
pub mod page;
pub mod presets;
pub mod saved;
