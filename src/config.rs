use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct QuoteboardConfig {
    pub database: Option<String>,
    pub port: Option<u16>,
    pub site: Option<String>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("quoteboard.toml")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<QuoteboardConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: QuoteboardConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn ensure_db_dir(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
