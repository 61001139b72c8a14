//! # Saved Lists and Preferences
//!
//! The only state that outlives a page load: flat lists of item ids stored under
//! fixed keys (favorited properties, watched help videos, saved jobs) and a few
//! single-value UI preferences.
//!
//! ## Storage Format
//!
//! Storage is a flat string key-value space behind [`KeyValueStore`]. Saved
//! lists are stored as a JSON array of strings, in insertion order:
//!
//! ```text
//! favorite_properties = ["12","7","31"]
//! portfolio_view      = list
//! ```
//!
//! ## Implementations
//!
//! - [`memory::MemoryStorage`]: no persistence, for tests
//! - [`fs::FileStorage`]: one `storage.json` object in the data directory

use crate::error::{Result, SiftError};

pub mod fs;
pub mod memory;
pub mod prefs;

pub const FAVORITE_PROPERTIES: &str = "favorite_properties";
pub const WATCHED_VIDEOS: &str = "watched_videos";
pub const SAVED_JOBS: &str = "saved_jobs";

/// The keys holding saved-id lists.
pub const LIST_KEYS: [&str; 3] = [FAVORITE_PROPERTIES, WATCHED_VIDEOS, SAVED_JOBS];

/// Abstract string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Read the list stored under `key`. A missing key is an empty list.
pub fn load<S: KeyValueStore>(store: &S, key: &str) -> Result<Vec<String>> {
    match store.get(key)? {
        Some(raw) => serde_json::from_str(&raw).map_err(SiftError::Serialization),
        None => Ok(Vec::new()),
    }
}

pub fn save<S: KeyValueStore>(store: &mut S, key: &str, ids: &[String]) -> Result<()> {
    let raw = serde_json::to_string(ids)?;
    store.set(key, &raw)
}

pub fn contains<S: KeyValueStore>(store: &S, key: &str, id: &str) -> Result<bool> {
    Ok(load(store, key)?.iter().any(|saved| saved == id))
}

pub fn count<S: KeyValueStore>(store: &S, key: &str) -> Result<usize> {
    Ok(load(store, key)?.len())
}

/// Append `id` unless already present. Returns whether the list changed.
pub fn add<S: KeyValueStore>(store: &mut S, key: &str, id: &str) -> Result<bool> {
    let mut ids = load(store, key)?;
    if ids.iter().any(|saved| saved == id) {
        return Ok(false);
    }
    ids.push(id.to_string());
    save(store, key, &ids)?;
    Ok(true)
}

/// Remove every occurrence of `id`. Returns whether the list changed.
pub fn remove<S: KeyValueStore>(store: &mut S, key: &str, id: &str) -> Result<bool> {
    let mut ids = load(store, key)?;
    let before = ids.len();
    ids.retain(|saved| saved != id);
    if ids.len() == before {
        return Ok(false);
    }
    save(store, key, &ids)?;
    Ok(true)
}

/// Flip membership of `id`. Returns `true` if the id is saved afterwards.
pub fn toggle<S: KeyValueStore>(store: &mut S, key: &str, id: &str) -> Result<bool> {
    if remove(store, key, id)? {
        Ok(false)
    } else {
        add(store, key, id)
    }
}
