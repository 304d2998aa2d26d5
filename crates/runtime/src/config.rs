//! Runtime configuration and environment loading.
use std::env;
use std::path::PathBuf;

/// Runtime configuration shared by the session builder and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// File the snapshot repository writes to.
    pub snapshot_path: PathBuf,
    /// Catalog RON file; the bundled catalog is used when unset.
    pub catalog_path: Option<PathBuf>,
    /// Starter layout RON file; the bundled layout is used when unset.
    pub starter_path: Option<PathBuf>,
    /// Broadcast capacity per event topic.
    pub event_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            snapshot_path: default_snapshot_path(),
            catalog_path: None,
            starter_path: None,
            event_buffer_size: 100,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `FRAGMENT_SNAPSHOT_PATH` - Snapshot file (default: platform data dir)
    /// - `FRAGMENT_CATALOG_PATH` - Catalog RON file (default: bundled)
    /// - `FRAGMENT_STARTER_PATH` - Starter layout RON file (default: bundled)
    /// - `FRAGMENT_EVENT_BUFFER` - Event capacity per topic (default: 100)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = env::var("FRAGMENT_SNAPSHOT_PATH") {
            config.snapshot_path = PathBuf::from(path);
        }

        config.catalog_path = env::var("FRAGMENT_CATALOG_PATH").ok().map(PathBuf::from);
        config.starter_path = env::var("FRAGMENT_STARTER_PATH").ok().map(PathBuf::from);

        if let Some(capacity) = read_env::<usize>("FRAGMENT_EVENT_BUFFER") {
            config.event_buffer_size = capacity.max(1);
        }

        config
    }
}

/// Platform data directory for slot snapshots.
///
/// - macOS: `~/Library/Application Support/fragment/slots.json`
/// - Linux: `~/.local/share/fragment/slots.json`
/// - Windows: `%APPDATA%\fragment\slots.json`
/// - Fallback: `./save_data/slots.json`
pub fn default_snapshot_path() -> PathBuf {
    directories::ProjectDirs::from("", "", "fragment")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
        .join("slots.json")
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
