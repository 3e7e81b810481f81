//! Centralized path definitions for dockscan
//!
//! This module provides a single source of truth for all filesystem paths
//! used by dockscan.
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.config/dockscan/          # or $DOCKSCAN_HOME, or --home
//! ├── config.toml             # Endpoint, clients, scan settings
//! └── state/
//!     └── scanProgress        # Session snapshot (JSON)
//! ```

use std::path::{Path, PathBuf};

/// Environment variable overriding the home directory
pub const HOME_ENV: &str = "DOCKSCAN_HOME";

/// Application directory name under the user config dir
const APP_DIR: &str = "dockscan";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// State subdirectory
const STATE_DIR: &str = "state";

/// Resolve the home directory.
///
/// Priority: explicit override, then `$DOCKSCAN_HOME`, then the platform
/// config dir (`~/.config/dockscan` on Linux).
#[must_use]
pub fn home(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    if let Some(path) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Get path to `config.toml`.
#[must_use]
pub fn config_file(home: &Path) -> PathBuf {
    home.join(CONFIG_FILE)
}

/// Get path to the snapshot state directory.
#[must_use]
pub fn state_dir(home: &Path) -> PathBuf {
    home.join(STATE_DIR)
}
