use crate::constants::CONFIG_FILENAME;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Lower-case extensions before lookup, so `FILE.MD` is markdown.
    pub ignore_extension_case: Option<bool>,
    /// Extra `extension -> language` mappings, consulted before the built-in
    /// table. The leading dot is optional.
    pub extensions: Option<BTreeMap<String, String>>,
}

pub fn load_config(config_dir: &Path) -> Result<Option<Config>> {
    let config_path = config_dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!(path = %config_path.display(), "no config file");
        return Ok(None);
    }

    let config_content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

    let config: Config = serde_yaml::from_str(&config_content)
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

    Ok(Some(config))
}
