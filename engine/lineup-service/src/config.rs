//! Service configuration management

use anyhow::{Context, Result};
use lineup_core::PriorityList;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Main service configuration, read from a TOML file merged over defaults.
///
/// API credentials stay in the environment (`.env` in development); the file
/// only points at the operator-maintained data files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Path to the curated player priority list (JSON)
    pub priority_list: PathBuf,

    /// Path to the goalie table (TOML): per team, the rostered goalie pair
    pub goalie_table: PathBuf,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            priority_list: PathBuf::from("player_priority.json"),
            goalie_table: PathBuf::from("goalies.toml"),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a TOML file; an absent default file means
    /// defaults, an explicitly named file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from("lineup.toml"), false),
        };
        if !path.exists() {
            if required {
                anyhow::bail!("config file not found: {}", path.display());
            }
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: ServiceConfig = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}

/// Load the curated priority list from its JSON file.
pub async fn load_priority_list(path: &Path) -> Result<PriorityList> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read priority list {}", path.display()))?;
    let list: PriorityList = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse priority list {}", path.display()))?;
    info!(players = list.players.len(), "Loaded priority list");
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn priority_list_json_shape() {
        let raw = r#"{"players": [
            {"name": "Nathan MacKinnon", "team": "COL"},
            {"name": "Cale Makar", "team": "COL"}
        ]}"#;
        let list: PriorityList = serde_json::from_str(raw).expect("parse");
        assert_eq!(list.players.len(), 2);
        assert_eq!(list.players[0].name, "Nathan MacKinnon");
        assert_eq!(list.players[1].team, "COL");
    }

    #[test]
    fn config_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "priority_list = \"/data/priority.json\"").unwrap();
        let config = ServiceConfig::load(Some(file.path())).expect("load");
        assert_eq!(config.priority_list, PathBuf::from("/data/priority.json"));
        // Unset keys keep their defaults.
        assert_eq!(config.goalie_table, PathBuf::from("goalies.toml"));
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        assert!(ServiceConfig::load(Some(Path::new("/definitely/not/here.toml"))).is_err());
    }
}
