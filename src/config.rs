//! Configuration management
//!
//! Settings live in `config.toml` under the dockscan home directory (see
//! [`crate::paths`]). A missing or unreadable file means defaults.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::services::report::{REPORT_TYPE, SitePolicy};

/// dockscan configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Scan input settings
    #[serde(default)]
    pub scan: ScanConfig,
    /// Report submission settings
    #[serde(default)]
    pub report: ReportConfig,
    /// Named clients and their Google Sheets ids
    #[serde(default)]
    pub clients: BTreeMap<String, String>,
}

/// Scan input settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Quiet period before buffered scanner input is submitted
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

const fn default_debounce_ms() -> u64 {
    1000
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl ScanConfig {
    /// Debounce delay as a duration
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Report submission settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Endpoint receiving the report (HTTP POST)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Movement type sent in the report header
    #[serde(default = "default_kind")]
    pub tipo: String,
    /// Reports must name a checkpoint site
    #[serde(default)]
    pub require_site: bool,
    /// Allowed checkpoint sites (empty = any)
    #[serde(default)]
    pub sites: Vec<String>,
    /// Request timeout for downloads and submissions
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_kind() -> String {
    REPORT_TYPE.to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            tipo: default_kind(),
            require_site: false,
            sites: Vec::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ReportConfig {
    /// Site rules for report validation
    #[must_use]
    pub fn site_policy(&self) -> SitePolicy {
        SitePolicy {
            require_site: self.require_site,
            sites: self.sites.clone(),
        }
    }

    /// Network timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// Load config from `path`, or defaults if it is missing or invalid
    #[must_use]
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        let parsed: anyhow::Result<Self> = fs::read_to_string(path)
            .map_err(anyhow::Error::from)
            .and_then(|content| Ok(toml::from_str(&content)?));
        parsed.unwrap_or_else(|err| {
            log::warn!("ignoring invalid config {}: {err}", path.display());
            Self::default()
        })
    }

    /// Save config to `path`, creating its directory
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Google Sheets id of a named client
    #[must_use]
    pub fn client_sheet(&self, name: &str) -> Option<&str> {
        self.clients.get(name).map(String::as_str)
    }
}
