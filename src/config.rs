//! Persistent host configuration model and defaults.

use std::path::PathBuf;

/// Root configuration persisted to `vidconsole.toml`.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Config {
    #[serde(default)]
    /// Catalog source preferences.
    pub library: LibraryConfig,
    #[serde(default)]
    /// Console prompt preferences.
    pub ui: UiConfig,
}

/// Catalog source preferences.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct LibraryConfig {
    /// Path to a JSON catalog file. Unset selects the builtin demo catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
}

/// Console prompt preferences.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UiConfig {
    #[serde(default = "default_prompt")]
    pub prompt: String,
    #[serde(default = "default_true")]
    pub offer_play_after_search: bool,
}

impl Default for UiConfig {
    fn default() -> UiConfig {
        UiConfig {
            prompt: default_prompt(),
            offer_play_after_search: true,
        }
    }
}

fn default_prompt() -> String {
    "> ".to_string()
}

fn default_true() -> bool {
    true
}
