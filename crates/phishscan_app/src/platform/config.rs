use std::fs;
use std::path::Path;
use std::time::Duration;

use phishscan_engine::{ClientSettings, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};

use super::logging::LogSettings;

pub const CONFIG_FILENAME: &str = "phishscan.ron";

/// On-disk configuration; every field falls back to its default when omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub log: LogSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        let settings = ClientSettings::default();
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout_secs: settings.connect_timeout.as_secs(),
            request_timeout_secs: settings.request_timeout.as_secs(),
            log: LogSettings::default(),
        }
    }
}

impl AppConfig {
    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            base_url: self.base_url.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}

/// Reads the config file. A missing file means defaults; an unreadable or
/// malformed one is reported so the caller can log it once logging is up.
pub(crate) fn load_config(path: &Path) -> Result<AppConfig, String> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(err) => return Err(format!("failed to read {}: {err}", path.display())),
    };

    ron::from_str::<AppConfig>(&content)
        .map_err(|err| format!("failed to parse {}: {err}", path.display()))
}
