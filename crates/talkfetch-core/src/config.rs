use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::pool::DEFAULT_WORKERS;

/// Global configuration loaded from `~/.config/talkfetch/config.toml`.
/// Command-line flags take precedence over these values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TalkfetchConfig {
    /// Number of concurrent downloads.
    pub workers: usize,
    /// Root directory for downloaded videos (`{output_dir}/{year}/{id}.mp4`).
    pub output_dir: PathBuf,
    /// TCP/TLS connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Abort a transfer slower than this many bytes/sec for `low_speed_time_secs`.
    pub low_speed_limit_bytes: u32,
    pub low_speed_time_secs: u64,
    /// Optional limit on a whole transfer in seconds (None = no limit).
    pub transfer_timeout_secs: Option<u64>,
    /// Optional User-Agent header for video requests.
    pub user_agent: Option<String>,
}

impl Default for TalkfetchConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            output_dir: PathBuf::from("fosdem_videos"),
            connect_timeout_secs: 30,
            low_speed_limit_bytes: 1024,
            low_speed_time_secs: 60,
            transfer_timeout_secs: None,
            user_agent: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("talkfetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<TalkfetchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = TalkfetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit file. Missing keys take defaults.
pub fn load_from(path: &Path) -> Result<TalkfetchConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: TalkfetchConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    if cfg.workers == 0 {
        anyhow::bail!("config {}: workers must be at least 1", path.display());
    }
    Ok(cfg)
}
