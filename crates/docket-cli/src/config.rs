use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const STORE_FILE_NAME: &str = "docket.db";

/// Resolve the workspace directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. DOCKET_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.docket (fallback for systems without XDG)
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("DOCKET_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("docket"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".docket"));
    }

    Err(anyhow!(
        "Could not determine workspace path: no HOME directory or XDG data directory found"
    ))
}

/// Expand a leading `~/` to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Where the config file lives and which workspace it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocation {
    pub workspace: PathBuf,
    pub config_path: PathBuf,
}

impl ConfigLocation {
    /// `--config` wins; its parent directory becomes the workspace
    pub fn resolve(explicit_config: Option<&str>) -> Result<Self> {
        match explicit_config {
            Some(path) => {
                let config_path = expand_tilde(path);
                let workspace = config_path
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_default();
                Ok(Self {
                    workspace,
                    config_path,
                })
            }
            None => {
                let workspace = resolve_workspace_path(None)?;
                Ok(Self {
                    config_path: workspace.join(CONFIG_FILE_NAME),
                    workspace,
                })
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// SQLite file; `<workspace>/docket.db` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    pub fn store_path(&self, workspace: &Path) -> PathBuf {
        match &self.store.path {
            Some(path) => expand_tilde(path),
            None => workspace.join(STORE_FILE_NAME),
        }
    }
}
