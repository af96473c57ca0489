//! Settings loading from the config file and environment.

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

use crate::notion::{DEFAULT_API_URL, GatewayConfig};

const NOTION_TOKEN: &str = "notion_token";
const INBOX_DATABASE_ID: &str = "inbox_database_id";
const DAILY_ROLLUP_PAGE_ID: &str = "daily_rollup_page_id";
const NOTION_API_URL: &str = "notion_api_url";

/// Resolved settings for talking to Notion.
///
/// Built once at startup and handed to the gateway; nothing reads settings
/// from global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub notion_token: String,
    pub inbox_database_id: String,
    /// Empty disables the daily rollup append.
    pub daily_rollup_page_id: String,
    pub notion_api_url: String,
}

/// Settings as read from one source, before validation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct RawSettings {
    notion_token: Option<String>,
    inbox_database_id: Option<String>,
    daily_rollup_page_id: Option<String>,
    notion_api_url: Option<String>,
}

impl RawSettings {
    /// Records `value` if `key` names a setting, ignoring case.
    fn set(&mut self, key: &str, value: String) {
        let slot = match key.to_ascii_lowercase().as_str() {
            NOTION_TOKEN => &mut self.notion_token,
            INBOX_DATABASE_ID => &mut self.inbox_database_id,
            DAILY_ROLLUP_PAGE_ID => &mut self.daily_rollup_page_id,
            NOTION_API_URL => &mut self.notion_api_url,
            _ => return,
        };
        *slot = Some(value);
    }

    fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut raw = Self::default();
        for (key, value) in vars {
            raw.set(key.as_ref(), value.into());
        }
        raw
    }

    fn from_toml(contents: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(contents)?;
        let mut raw = Self::default();
        for (key, value) in table {
            match value {
                toml::Value::String(s) => raw.set(&key, s),
                other => bail!("config key '{}' must be a string, found {}", key, other.type_str()),
            }
        }
        Ok(raw)
    }

    /// Overlays `other` on top of `self`; values present in `other` win.
    fn merge(self, other: Self) -> Self {
        Self {
            notion_token: other.notion_token.or(self.notion_token),
            inbox_database_id: other.inbox_database_id.or(self.inbox_database_id),
            daily_rollup_page_id: other.daily_rollup_page_id.or(self.daily_rollup_page_id),
            notion_api_url: other.notion_api_url.or(self.notion_api_url),
        }
    }

    fn resolve(self) -> Result<Settings> {
        let notion_token = required(self.notion_token, NOTION_TOKEN)?;
        let inbox_database_id = required(self.inbox_database_id, INBOX_DATABASE_ID)?;

        Ok(Settings {
            notion_token,
            inbox_database_id,
            daily_rollup_page_id: self.daily_rollup_page_id.unwrap_or_default(),
            notion_api_url: self
                .notion_api_url
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        })
    }
}

fn required(value: Option<String>, key: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => bail!(
            "missing required setting '{}' (set {} or add it to the config file)",
            key,
            key.to_ascii_uppercase()
        ),
    }
}

impl Settings {
    /// Loads settings from the config file, then the environment.
    ///
    /// Precedence order (later wins):
    /// 1. Config file (`path`, or the default location if it exists)
    /// 2. Environment variables, matched case-insensitively
    ///
    /// An explicit `path` that does not exist is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => Self::read_file(path)?,
            None => {
                let default = Self::config_path();
                if default.exists() {
                    Self::read_file(&default)?
                } else {
                    RawSettings::default()
                }
            }
        };

        let env = std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)));
        file.merge(RawSettings::from_vars(env)).resolve()
    }

    fn read_file(path: &Path) -> Result<RawSettings> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        RawSettings::from_toml(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/notion-inbox/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("notion-inbox")
            .join("config.toml")
    }

    /// The gateway's view of these settings.
    pub fn gateway_config(&self) -> GatewayConfig {
        GatewayConfig {
            inbox_database_id: self.inbox_database_id.clone(),
            daily_rollup_page_id: Some(self.daily_rollup_page_id.clone())
                .filter(|id| !id.is_empty()),
        }
    }
}
