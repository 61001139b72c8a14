use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SiftError};
use crate::saved::{self, KeyValueStore, LIST_KEYS};

fn check_key(key: &str) -> Result<()> {
    if LIST_KEYS.contains(&key) {
        Ok(())
    } else {
        Err(SiftError::Api(format!(
            "Unknown saved list '{}' (expected one of: {})",
            key,
            LIST_KEYS.join(", ")
        )))
    }
}

pub fn list<S: KeyValueStore>(store: &S, key: &str) -> Result<CmdResult> {
    check_key(key)?;
    let ids = saved::load(store, key)?;
    let mut result = CmdResult::default();
    if ids.is_empty() {
        result.add_message(CmdMessage::info(format!("{} is empty", key)));
    }
    Ok(result.with_saved_ids(ids))
}

pub fn add<S: KeyValueStore>(store: &mut S, key: &str, id: &str) -> Result<CmdResult> {
    check_key(key)?;
    let mut result = CmdResult::default();
    if saved::add(store, key, id)? {
        result.add_message(CmdMessage::success(format!("Added {} to {}", id, key)));
    } else {
        result.add_message(CmdMessage::info(format!("{} is already in {}", id, key)));
    }
    Ok(result.with_saved_ids(saved::load(store, key)?))
}

pub fn remove<S: KeyValueStore>(store: &mut S, key: &str, id: &str) -> Result<CmdResult> {
    check_key(key)?;
    let mut result = CmdResult::default();
    if saved::remove(store, key, id)? {
        result.add_message(CmdMessage::success(format!("Removed {} from {}", id, key)));
    } else {
        result.add_message(CmdMessage::warning(format!("{} is not in {}", id, key)));
    }
    Ok(result.with_saved_ids(saved::load(store, key)?))
}

pub fn toggle<S: KeyValueStore>(store: &mut S, key: &str, id: &str) -> Result<CmdResult> {
    check_key(key)?;
    let mut result = CmdResult::default();
    let message = if saved::toggle(store, key, id)? {
        format!("Added {} to {}", id, key)
    } else {
        format!("Removed {} from {}", id, key)
    };
    result.add_message(CmdMessage::success(message));
    Ok(result.with_saved_ids(saved::load(store, key)?))
}
