//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs the log subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Load configuration, set up logging, open storage
//! 3. **Dispatch**: Route commands to the API facade
//! 4. **Output Formatting**: Hand results to `render`

use super::render;
use super::setup::{Cli, Commands, PrefCommands, SavedAction, ViewArg};
use anyhow::{Context, Result};
use clap::Parser;
use siftapp::api::SiftApi;
use siftapp::commands::replay;
use siftapp::config::{self, SiftConfig, PROJECT_DIRNAME};
use siftapp::page::memory::MemoryPage;
use siftapp::saved::fs::FileStorage;
use siftapp::saved::prefs::PortfolioView;
use tracing::debug;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config()?;
    init_logging(&cli, &config);

    let data_dir = cli.data.clone().unwrap_or_else(|| config.data_dir());
    debug!(data_dir = %data_dir.display(), "opening storage");
    let mut api = SiftApi::new(FileStorage::new(data_dir), config);

    let output = match cli.command {
        Commands::Presets => render::presets(&api.presets()?),
        Commands::Filter {
            page,
            preset,
            query,
            selections,
        } => {
            let page = MemoryPage::load(&page)
                .with_context(|| format!("reading page {}", page.display()))?;
            let result = api.filter_page(page, preset.as_deref(), query.as_deref(), &selections)?;
            render::filter(&result)
        }
        Commands::Replay {
            page,
            script,
            preset,
        } => {
            let page = MemoryPage::load(&page)
                .with_context(|| format!("reading page {}", page.display()))?;
            let steps = replay::load_script(&script)
                .with_context(|| format!("reading script {}", script.display()))?;
            render::replay(&api.replay(page, preset.as_deref(), steps)?)
        }
        Commands::Saved { key, action } => {
            let result = match action {
                SavedAction::List => api.saved_list(&key)?,
                SavedAction::Add { id } => api.saved_add(&key, &id)?,
                SavedAction::Remove { id } => api.saved_remove(&key, &id)?,
                SavedAction::Toggle { id } => api.saved_toggle(&key, &id)?,
            };
            render::saved(&result)
        }
        Commands::Pref {
            pref: PrefCommands::PortfolioView { value },
        } => {
            let result = match value {
                None => api.portfolio_view()?,
                Some(ViewArg::Grid) => api.set_portfolio_view(PortfolioView::Grid)?,
                Some(ViewArg::List) => api.set_portfolio_view(PortfolioView::List)?,
            };
            render::messages(&result.messages)
        }
        Commands::Config => render::config(&api.config()?)?,
    };

    print!("{}", output);
    Ok(())
}

/// Project config lives in `./.sift/`, global config in the OS config directory.
fn load_config() -> Result<SiftConfig> {
    let project_dir = std::env::current_dir()
        .ok()
        .map(|cwd| cwd.join(PROJECT_DIRNAME));
    let global_dir = config::default_config_dir();
    SiftConfig::load(project_dir.as_deref(), global_dir.as_deref()).context("loading configuration")
}

fn init_logging(cli: &Cli, config: &SiftConfig) {
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        config.log_level()
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
