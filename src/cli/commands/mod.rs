//! Command implementations

mod config;
mod finish;
mod listen;
mod load;
mod report;
mod scan;
mod status;

pub use config::config;
pub use finish::finish;
pub use listen::listen;
pub use load::load;
pub use report::report;
pub use scan::scan;
pub use status::status;

use std::path::{Path, PathBuf};

use dockscan::adapters::file::FileKeyValueStore;
use dockscan::adapters::terminal::{SilentFeedback, TerminalFeedback};
use dockscan::config::Config;
use dockscan::core::ports::Feedback;
use dockscan::core::services::{Session, SnapshotStore};
use dockscan::output::OutputMode;
use dockscan::paths;

/// Everything a command needs from the environment
#[derive(Debug)]
pub struct Context {
    /// Resolved home directory
    pub home: PathBuf,
    /// Effective configuration
    pub config: Config,
    /// Output mode
    pub mode: OutputMode,
}

impl Context {
    /// Resolve the home directory and load its config
    pub fn new(home: Option<&Path>, mode: OutputMode) -> Self {
        let home = paths::home(home);
        let config = Config::load(&paths::config_file(&home));
        log::debug!("home: {}", home.display());
        Self { home, config, mode }
    }

    /// Open the session persisted under this home
    ///
    /// Tones are only played in human mode, so JSON output stays clean.
    pub fn open_session(&self) -> Session {
        let store = FileKeyValueStore::new(paths::state_dir(&self.home));
        let feedback: Box<dyn Feedback> = match self.mode {
            OutputMode::Human => Box::new(TerminalFeedback),
            OutputMode::Json => Box::new(SilentFeedback),
        };
        Session::open(SnapshotStore::new(Box::new(store)), feedback)
    }

    /// HTTP client honoring the configured timeout
    pub fn http_client(&self) -> Result<reqwest::Client, reqwest::Error> {
        dockscan::adapters::http::client(self.config.report.timeout())
    }
}

/// Single-threaded runtime for the network and stdin commands
fn runtime() -> anyhow::Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread().enable_all().build()?)
}
