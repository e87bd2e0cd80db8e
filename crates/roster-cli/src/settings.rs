//! User settings, persisted as TOML in the platform config directory.
//!
//! Every section is `#[serde(default)]`, so a partial or empty file is
//! valid. Command-line flags take precedence over anything read here.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use roster_model::Locale;
use roster_store::{DEFAULT_RANDOM_COUNT, DEFAULT_STORAGE_KEY, Seed};
use roster_view::{DEFAULT_PER_PAGE, Layout};

const QUALIFIER: &str = "com";
const ORGANIZATION: &str = "Roster";
const APPLICATION: &str = "roster";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub storage: StorageSettings,
    pub display: DisplaySettings,
    pub seed: SeedSettings,
}

/// Where employee data lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Directory holding `<key>.json`. Defaults to the platform data directory.
    pub data_dir: Option<PathBuf>,
    pub key: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_dir: None,
            key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub per_page: usize,
    pub layout: Layout,
    /// Unset means: take it from `LANG`.
    pub locale: Option<Locale>,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            layout: Layout::Table,
            locale: None,
        }
    }
}

/// Data used when the store is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedSettings {
    /// Seed sample employees at all.
    pub demo: bool,
    /// Randomly generated employees added after the fixed samples.
    pub random_count: usize,
}

impl Default for SeedSettings {
    fn default() -> Self {
        Self {
            demo: true,
            random_count: DEFAULT_RANDOM_COUNT,
        }
    }
}

impl SeedSettings {
    pub fn to_seed(&self) -> Seed {
        if self.demo {
            Seed::Demo {
                random_count: self.random_count,
            }
        } else {
            Seed::Empty
        }
    }
}

impl Settings {
    /// Load settings from `path`.
    ///
    /// A missing file yields the defaults. A file that exists but cannot be
    /// parsed is an error rather than being silently replaced.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("read settings {}", path.display()));
            }
        };
        toml::from_str(&content).with_context(|| format!("parse settings {}", path.display()))
    }

    /// Save settings to `path`, creating the parent directory.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create config directory {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("serialize settings")?;
        std::fs::write(path, content).with_context(|| format!("write settings {}", path.display()))
    }

    /// Default settings file location.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("roster.toml"))
    }

    /// Directory employee data is stored in.
    pub fn data_dir(&self) -> PathBuf {
        self.storage.data_dir.clone().unwrap_or_else(|| {
            directories::ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
                .map(|dirs| dirs.data_dir().to_path_buf())
                .unwrap_or_else(|| PathBuf::from(".roster"))
        })
    }

    /// Configured locale, else the one implied by `lang` (usually `$LANG`).
    pub fn locale(&self, lang: Option<&str>) -> Locale {
        self.display
            .locale
            .unwrap_or_else(|| lang.map(Locale::from_tag).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_fills_in_defaults() {
        let settings: Settings = toml::from_str("[display]\nper_page = 10\n").unwrap();
        assert_eq!(settings.display.per_page, 10);
        assert_eq!(settings.display.layout, Layout::Table);
        assert_eq!(settings.storage.key, DEFAULT_STORAGE_KEY);
        assert!(settings.seed.demo);
    }

    #[test]
    fn locale_prefers_setting_over_environment() {
        let mut settings = Settings::default();
        assert_eq!(settings.locale(Some("tr_TR.UTF-8")), Locale::Tr);
        assert_eq!(settings.locale(None), Locale::En);

        settings.display.locale = Some(Locale::En);
        assert_eq!(settings.locale(Some("tr_TR.UTF-8")), Locale::En);
    }

    #[test]
    fn disabled_demo_seeds_nothing() {
        let seed = SeedSettings {
            demo: false,
            random_count: 5,
        };
        assert!(matches!(seed.to_seed(), Seed::Empty));
    }
}
