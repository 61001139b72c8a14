use crate::config::SiftConfig;
use crate::model::{Item, ResultSummary};
use serde::Serialize;

pub mod config;
pub mod filter;
pub mod prefs;
pub mod presets;
pub mod replay;
pub mod saved;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// A recompute observed during a replay, stamped with its offset from the start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayFrame {
    pub at_ms: u64,
    pub trigger: String,
    pub summary: ResultSummary,
}

/// Listing entry for `sift presets`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresetInfo {
    pub name: String,
    pub description: String,
    pub collection: String,
    pub controls: Vec<String>,
    pub debounce_ms: u64,
    pub counter: Option<String>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub summary: Option<ResultSummary>,
    pub listed_items: Vec<Item>,
    pub frames: Vec<ReplayFrame>,
    pub saved_ids: Vec<String>,
    pub presets: Vec<PresetInfo>,
    pub config: Option<SiftConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_summary(mut self, summary: ResultSummary) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn with_listed_items(mut self, items: Vec<Item>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_frames(mut self, frames: Vec<ReplayFrame>) -> Self {
        self.frames = frames;
        self
    }

    pub fn with_saved_ids(mut self, ids: Vec<String>) -> Self {
        self.saved_ids = ids;
        self
    }

    pub fn with_presets(mut self, presets: Vec<PresetInfo>) -> Self {
        self.presets = presets;
        self
    }

    pub fn with_config(mut self, config: SiftConfig) -> Self {
        self.config = Some(config);
        self
    }
}
