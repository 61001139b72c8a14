//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as the single
//! entry point for all sift operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Resolves presets** (explicit name, else the configured default) and applies
//!   the configured debounce override
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs` and the filter core
//! - **I/O operations**: No stdout, stderr, or output formatting
//!
//! ## Generic Over Storage
//!
//! `SiftApi<S: KeyValueStore>` is generic over the storage backend:
//! - Production: `SiftApi<FileStorage>`
//! - Testing: `SiftApi<MemoryStorage>`
//!
//! Pages are passed per call, since each filter session is bound to one page.

use crate::commands;
use crate::component::FilterConfig;
use crate::config::SiftConfig;
use crate::error::Result;
use crate::page::{ItemProvider, ItemView};
use crate::presets;
use crate::saved::prefs::PortfolioView;
use crate::saved::KeyValueStore;
use chrono::NaiveDate;

pub struct SiftApi<S: KeyValueStore> {
    storage: S,
    config: SiftConfig,
    today: Option<NaiveDate>,
}

impl<S: KeyValueStore> SiftApi<S> {
    pub fn new(storage: S, config: SiftConfig) -> Self {
        Self {
            storage,
            config,
            today: None,
        }
    }

    /// Pin the reference date for date-window filters (defaults to the local date).
    pub fn with_reference_date(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn filter_config(&self, preset: Option<&str>) -> Result<FilterConfig> {
        let name = preset.unwrap_or(&self.config.default_preset);
        presets::config_for(name, self.config.debounce())
    }

    pub fn filter_page<P: ItemProvider + ItemView>(
        &self,
        page: P,
        preset: Option<&str>,
        query: Option<&str>,
        selections: &[(String, String)],
    ) -> Result<commands::CmdResult> {
        let config = self.filter_config(preset)?;
        commands::filter::run(page, config, query, selections, self.today)
    }

    pub fn replay<P: ItemProvider + ItemView>(
        &self,
        page: P,
        preset: Option<&str>,
        steps: Vec<commands::replay::ScriptStep>,
    ) -> Result<commands::CmdResult> {
        let config = self.filter_config(preset)?;
        commands::replay::run(page, config, steps, self.today)
    }

    pub fn presets(&self) -> Result<commands::CmdResult> {
        commands::presets::run()
    }

    pub fn saved_list(&self, key: &str) -> Result<commands::CmdResult> {
        commands::saved::list(&self.storage, key)
    }

    pub fn saved_add(&mut self, key: &str, id: &str) -> Result<commands::CmdResult> {
        commands::saved::add(&mut self.storage, key, id)
    }

    pub fn saved_remove(&mut self, key: &str, id: &str) -> Result<commands::CmdResult> {
        commands::saved::remove(&mut self.storage, key, id)
    }

    pub fn saved_toggle(&mut self, key: &str, id: &str) -> Result<commands::CmdResult> {
        commands::saved::toggle(&mut self.storage, key, id)
    }

    pub fn portfolio_view(&self) -> Result<commands::CmdResult> {
        commands::prefs::show_portfolio_view(&self.storage)
    }

    pub fn set_portfolio_view(&mut self, view: PortfolioView) -> Result<commands::CmdResult> {
        commands::prefs::set_portfolio_view(&mut self.storage, view)
    }

    pub fn config(&self) -> Result<commands::CmdResult> {
        commands::config::run(&self.config)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

pub use crate::commands::replay::{ScriptEvent, ScriptStep};
pub use commands::{CmdMessage, CmdResult, MessageLevel, PresetInfo, ReplayFrame};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SiftError;
    use crate::page::memory::fixtures::PageFixture;
    use crate::saved::memory::MemoryStorage;
    use crate::saved::{self, SAVED_JOBS};
    use std::time::Duration;

    fn api() -> SiftApi<MemoryStorage> {
        SiftApi::new(MemoryStorage::new(), SiftConfig::default())
    }

    #[test]
    fn default_preset_is_used_when_none_given() {
        let config = api().filter_config(None).unwrap();
        assert_eq!(config.item_selector, ".property-card");
    }

    #[test]
    fn configured_debounce_overrides_preset() {
        let api = SiftApi::new(
            MemoryStorage::new(),
            SiftConfig {
                debounce_ms: Some(40),
                ..Default::default()
            },
        );
        let config = api.filter_config(Some("contact-search")).unwrap();
        assert_eq!(config.options.debounce, Duration::from_millis(40));
    }

    #[test]
    fn unknown_preset_propagates() {
        assert!(matches!(
            api().filter_config(Some("nope")),
            Err(SiftError::UnknownPreset(_))
        ));
    }

    #[test]
    fn filter_page_dispatches() {
        let page = PageFixture::new()
            .property_listing()
            .with_doha_properties()
            .build();
        let result = api().filter_page(page, None, Some("west bay"), &[]).unwrap();
        assert_eq!(result.summary.unwrap().visible_ids, vec!["1"]);
    }

    #[test]
    fn saved_operations_hit_storage() {
        let mut api = api();
        api.saved_toggle(SAVED_JOBS, "j1").unwrap();
        api.saved_add(SAVED_JOBS, "j2").unwrap();
        api.saved_remove(SAVED_JOBS, "j1").unwrap();

        assert_eq!(saved::load(api.storage(), SAVED_JOBS).unwrap(), vec!["j2"]);
        assert_eq!(api.saved_list(SAVED_JOBS).unwrap().saved_ids, vec!["j2"]);
    }

    #[test]
    fn portfolio_view_roundtrip() {
        let mut api = api();
        api.set_portfolio_view(PortfolioView::List).unwrap();
        let result = api.portfolio_view().unwrap();
        assert!(result.messages[0].content.ends_with("list"));
    }
}
