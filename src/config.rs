use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::models::Ecosystem;

/// Root configuration structure, deserialized from `.deps-csv/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,
}

/// Traversal settings.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScanConfig {
    /// Directory names pruned in addition to the built-in set.
    #[serde(default)]
    pub prune: Vec<String>,
    /// Ecosystems whose manifests are never read.
    #[serde(default)]
    pub exclude: Vec<Ecosystem>,
    /// Descend into symlinked directories.
    #[serde(default)]
    pub follow_links: bool,
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<root>/.deps-csv/config.toml`
/// 3. `~/.config/deps-csv/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(root: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = root.join(".deps-csv").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home.join(".config").join("deps-csv").join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("invalid config {}", path.display()))
}
