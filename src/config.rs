use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::pricing::Frequency;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

/// Optional defaults read from `config.toml`
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) input_tokens: Option<i64>,
    #[serde(default)]
    pub(crate) output_tokens: Option<i64>,
    #[serde(default)]
    pub(crate) frequency: Option<Frequency>,
    #[serde(default)]
    pub(crate) requests: Option<i64>,
    #[serde(default)]
    pub(crate) markup: Option<i64>,
    #[serde(default)]
    pub(crate) locale: Option<String>,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) json: bool,
}

impl Config {
    pub(crate) fn load() -> Self {
        Self::load_from(&Self::get_config_paths())
    }

    fn load_from(paths: &[PathBuf]) -> Self {
        // First readable, parseable file wins
        for path in paths {
            if !path.exists() {
                continue;
            }
            match Self::read(path) {
                Ok(config) => {
                    debug!(path = %path.display(), "loaded config");
                    return config;
                }
                Err(e) => warn!(path = %path.display(), "failed to read config: {e}"),
            }
        }

        Self::default()
    }

    fn read(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
        toml::from_str::<Config>(&content).map_err(|e| e.to_string())
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/llmcalc/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("llmcalc").join("config.toml"));
        }

        // 2. Platform config dir (Application Support on macOS)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("llmcalc").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.llmcalc.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".llmcalc.toml"));
        }

        paths
    }
}
