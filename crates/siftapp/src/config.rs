//! # Configuration
//!
//! Sift configuration is managed by [`confique`], which handles layered loading
//! from TOML files and environment variables.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `SIFT_DEBOUNCE_MS`, `SIFT_DATA_DIR`, etc.
//! 2. **Project Config**: `.sift/sift.toml`, overrides the global file for this directory.
//! 3. **Global Config**: OS-appropriate config directory (via `directories` crate).
//! 4. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `debounce_ms` | unset | Overrides every preset's text debounce |
//! | `data_dir` | OS data dir | Where saved lists and preferences live |
//! | `default_preset` | `property-search` | Preset used when none is given |
//! | `log_level` | `warn` | Log level when `--verbose` is not passed |

use crate::error::Result;
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

pub const CONFIG_FILENAME: &str = "sift.toml";
pub const PROJECT_DIRNAME: &str = ".sift";

/// Configuration for sift, stored in `sift.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SiftConfig {
    /// Text search debounce in milliseconds, applied to every preset
    #[config(env = "SIFT_DEBOUNCE_MS")]
    pub debounce_ms: Option<u64>,

    /// Directory holding `storage.json`
    #[config(env = "SIFT_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Preset used by `sift filter` and `sift replay` when `--preset` is absent
    #[config(env = "SIFT_DEFAULT_PRESET", default = "property-search")]
    pub default_preset: String,

    /// One of trace, debug, info, warn, error
    #[config(env = "SIFT_LOG_LEVEL", default = "warn")]
    pub log_level: String,
}

impl Default for SiftConfig {
    fn default() -> Self {
        Self {
            debounce_ms: None,
            data_dir: None,
            default_preset: "property-search".to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl SiftConfig {
    /// Load from the environment, then `project_dir/sift.toml`, then
    /// `global_dir/sift.toml`. Missing files are skipped.
    pub fn load(project_dir: Option<&Path>, global_dir: Option<&Path>) -> Result<Self> {
        let mut builder = SiftConfig::builder().env();
        if let Some(dir) = project_dir {
            builder = builder.file(dir.join(CONFIG_FILENAME));
        }
        if let Some(dir) = global_dir {
            builder = builder.file(dir.join(CONFIG_FILENAME));
        }
        Ok(builder.load()?)
    }

    pub fn debounce(&self) -> Option<Duration> {
        self.debounce_ms.map(Duration::from_millis)
    }

    /// Configured data directory, or the OS default.
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .or_else(default_data_dir)
            .unwrap_or_else(|| PathBuf::from(PROJECT_DIRNAME))
    }

    /// Parsed log level; unrecognized values fall back to warn.
    pub fn log_level(&self) -> tracing::Level {
        tracing::Level::from_str(&self.log_level).unwrap_or(tracing::Level::WARN)
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "sift", "sift")
}

pub fn default_data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn default_config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_config(dir: &Path, config: &SiftConfig) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join(CONFIG_FILENAME), toml::to_string(config).unwrap()).unwrap();
    }

    #[test]
    fn test_default_config() {
        let config = SiftConfig::default();
        assert_eq!(config.default_preset, "property-search");
        assert_eq!(config.debounce(), None);
        assert_eq!(config.log_level(), tracing::Level::WARN);
    }

    #[test]
    fn test_missing_files_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiftConfig::load(Some(&dir.path().join("nope")), None).unwrap();
        assert_eq!(config.default_preset, "property-search");
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_project_file_overrides_global() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("project");
        let global = dir.path().join("global");

        write_config(
            &global,
            &SiftConfig {
                debounce_ms: Some(800),
                default_preset: "job-search".to_string(),
                ..Default::default()
            },
        );
        write_config(
            &project,
            &SiftConfig {
                debounce_ms: Some(120),
                ..Default::default()
            },
        );

        let config = SiftConfig::load(Some(&project), Some(&global)).unwrap();
        assert_eq!(config.debounce(), Some(Duration::from_millis(120)));
        // Written explicitly by the project file as well
        assert_eq!(config.default_preset, "property-search");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "log_level = \"debug\"\n").unwrap();

        let config = SiftConfig::load(Some(dir.path()), None).unwrap();
        assert_eq!(config.log_level(), tracing::Level::DEBUG);
        assert_eq!(config.default_preset, "property-search");
        assert_eq!(config.debounce_ms, None);
    }

    #[test]
    fn test_global_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            "default_preset = \"contact-search\"\n",
        )
        .unwrap();

        let config = SiftConfig::load(None, Some(dir.path())).unwrap();
        assert_eq!(config.default_preset, "contact-search");
    }

    #[test]
    fn test_explicit_data_dir() {
        let config = SiftConfig {
            data_dir: Some(PathBuf::from("/tmp/sift-data")),
            ..Default::default()
        };
        assert_eq!(config.data_dir(), PathBuf::from("/tmp/sift-data"));
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let config = SiftConfig {
            log_level: "chatty".to_string(),
            ..Default::default()
        };
        assert_eq!(config.log_level(), tracing::Level::WARN);
    }
}
