use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::paths;

/// Environment variable consulted for the API key by default.
pub const API_KEY_ENV: &str = "DEEPL_API_KEY";

/// Settings in the `[dlb]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DlbConfig {
    /// API key stored directly in config (not recommended).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    /// Defaults to `DEEPL_API_KEY`.
    #[serde(default)]
    pub api_key_env: Option<String>,
    /// API endpoint override (otherwise chosen from the key type).
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Default target language code.
    #[serde(default)]
    pub target_lang: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/dlb/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub dlb: DlbConfig,
}

/// Credentials resolved once at process start.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_key: String,
    /// Endpoint override from config, if any.
    pub endpoint: Option<String>,
}

/// Resolves the API credential, preferring the environment over the config
/// file.
///
/// # Errors
///
/// Returns an error when no key can be found anywhere.
pub fn resolve_credentials(config: &ConfigFile) -> Result<Credentials> {
    let env_var = config.dlb.api_key_env.as_deref().unwrap_or(API_KEY_ENV);

    let api_key = std::env::var(env_var)
        .ok()
        .filter(|key| !key.is_empty())
        .or_else(|| config.dlb.api_key.clone());

    let Some(api_key) = api_key else {
        bail!(
            "Missing DeepL API key\n\n\
             Set the {env_var} environment variable:\n  \
             export {env_var}=\"your-api-key\"\n\n\
             Or set api_key in ~/.config/dlb/config.toml"
        );
    };

    Ok(Credentials {
        api_key,
        endpoint: config.dlb.endpoint.clone(),
    })
}

/// Manages loading the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/dlb/config.toml`
    /// or `~/.config/dlb/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Self {
        Self {
            config_path: paths::config_dir().join("config.toml"),
        }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    /// Loads the config file, falling back to defaults when it is absent or
    /// unreadable. A missing config file is the common case.
    pub fn load_or_default(&self) -> ConfigFile {
        self.load().unwrap_or_default()
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
