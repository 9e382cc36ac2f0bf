//! CLI for talkfetch: download conference talk videos listed in a calendar.

mod run;

use anyhow::Result;
use clap::builder::RangedU64ValueParser;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

use talkfetch_core::config::{self, TalkfetchConfig};

/// Download conference talk videos from an ICS schedule.
#[derive(Debug, Parser)]
#[command(name = "talkfetch")]
#[command(about = "Download FOSDEM videos from an ICS schedule", long_about = None)]
pub struct Cli {
    /// Path to the schedule ICS file.
    #[arg(value_parser = existing_file)]
    pub ics_file: PathBuf,

    /// Directory to save downloaded videos [default: fosdem_videos].
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Number of concurrent downloads [default: 3].
    #[arg(short, long, value_name = "N", value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub workers: Option<usize>,

    /// Print video URLs of talks not yet downloaded, without downloading.
    #[arg(long)]
    pub dry_run: bool,

    /// Logging output level.
    #[arg(long, value_enum, ignore_case = true, default_value = "info")]
    pub log_level: LogLevel,

    /// Read configuration from this file instead of ~/.config/talkfetch/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Critical,
    Error,
    Warning,
    Info,
    Debug,
}

impl LogLevel {
    pub fn filter(self) -> LevelFilter {
        match self {
            // tracing has no level above ERROR.
            LogLevel::Critical | LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warning => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
        }
    }
}

fn existing_file(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    if path.exists() {
        Ok(path)
    } else {
        Err(format!("ICS file not found: {}", s))
    }
}

/// Effective settings after applying command-line overrides to the config.
#[derive(Debug, Clone)]
pub struct Settings {
    pub output_dir: PathBuf,
    pub workers: usize,
    pub config: TalkfetchConfig,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Flags win over config values.
    pub fn settings(&self, config: TalkfetchConfig) -> Settings {
        Settings {
            output_dir: self
                .output_dir
                .clone()
                .unwrap_or_else(|| config.output_dir.clone()),
            workers: self.workers.unwrap_or(config.workers).max(1),
            config,
        }
    }

    pub fn run(&self) -> Result<()> {
        let cfg = match &self.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);
        let settings = self.settings(cfg);

        if self.dry_run {
            run::run_dry(&self.ics_file, &settings)
        } else {
            run::run_download(&self.ics_file, &settings)
        }
    }
}
