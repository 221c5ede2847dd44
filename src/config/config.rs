use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::constants::CONFIG_FILE;
use crate::error::{AutolinkResult, ErrorContext};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Repository path used when `--repo` is not given.
    pub default_repo: Option<String>,
    /// "auto" | "always" | "never"
    #[serde(default = "default_color")]
    pub color: String,
    /// When false, the terminal renderer treats every tooltip as untrusted
    /// and strips embedded HTML even from trusted markup.
    #[serde(default = "default_trust")]
    pub trust_tooltips: bool,
}

fn default_color() -> String {
    "auto".to_string()
}

fn default_trust() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_repo: None,
            color: default_color(),
            trust_tooltips: default_trust(),
        }
    }
}

pub fn load_config() -> Config {
    match dirs::home_dir() {
        Some(home) => load_config_from(&home.join(CONFIG_FILE)),
        None => Config::default(),
    }
}

pub fn load_config_from(path: &Path) -> Config {
    if path.exists() {
        match fs::read_to_string(path) {
            Ok(config_str) => serde_json::from_str(&config_str).unwrap_or_default(),
            Err(_) => Config::default(),
        }
    } else {
        Config::default()
    }
}

pub fn save_config(config: &Config) -> AutolinkResult<()> {
    let home = dirs::home_dir().context("Could not find home directory")?;
    save_config_to(config, &home.join(CONFIG_FILE))
}

pub fn save_config_to(config: &Config, path: &Path) -> AutolinkResult<()> {
    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(path, config_str)?;
    Ok(())
}
