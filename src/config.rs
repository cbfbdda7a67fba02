//! Runtime configuration read from the environment.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use money_run_input::DEFAULT_KEY_RELEASE_TIMEOUT_MS;

/// Settings for one process; read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Fixed level seed; a fresh one is drawn per run when unset
    pub seed: Option<u64>,
    /// Directory holding `tiles.png` and `screens.png`
    pub assets_dir: Option<PathBuf>,
    /// File receiving log records; logging is off when unset
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
    /// JSON-lines frame trace
    pub trace_path: Option<PathBuf>,
    pub key_release_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            assets_dir: None,
            log_path: None,
            log_filter: "info".to_string(),
            trace_path: None,
            key_release_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }
}

impl GameConfig {
    /// Create from `MONEY_RUN_*` environment variables.
    ///
    /// Unparseable or empty values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };
        let defaults = Self::default();

        let seed = var("MONEY_RUN_SEED").and_then(|s| s.parse().ok());
        let assets_dir = var("MONEY_RUN_ASSETS").map(PathBuf::from);
        let log_path = var("MONEY_RUN_LOG_PATH").map(PathBuf::from);
        let log_filter = var("MONEY_RUN_LOG").unwrap_or(defaults.log_filter);
        let trace_path = var("MONEY_RUN_TRACE_PATH").map(PathBuf::from);
        let key_release_ms = var("MONEY_RUN_KEY_RELEASE_MS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.key_release_ms);

        Self {
            seed,
            assets_dir,
            log_path,
            log_filter,
            trace_path,
            key_release_ms,
        }
    }

    /// Seed for the next run.
    pub fn run_seed(&self) -> u64 {
        self.seed.unwrap_or_else(time_seed)
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos() as u64)
}
