//! Download executor: one talk → one file on disk.
//!
//! The target file's existence is the only "already downloaded" marker, so a
//! failed transfer must never leave a partial file behind.

mod error;

pub use error::DownloadError;

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::fetch::Fetcher;
use crate::talk::Talk;

/// Response bodies reach the disk in chunks of this size.
pub const CHUNK_SIZE: usize = 1024 * 1024;

/// Outcome of one download attempt.
#[derive(Debug)]
pub enum DownloadStatus {
    /// Fetched in this run.
    Downloaded { bytes: u64 },
    /// Target file already existed; nothing was fetched.
    AlreadyPresent,
    Failed(DownloadError),
}

/// Result for one talk, as reported by the pool.
#[derive(Debug)]
pub struct DownloadResult {
    pub talk_id: String,
    pub url: String,
    pub status: DownloadStatus,
}

impl DownloadResult {
    pub fn new(talk: &Talk, status: DownloadStatus) -> Self {
        Self {
            talk_id: talk.id().to_string(),
            url: talk.url().to_string(),
            status,
        }
    }

    pub fn is_success(&self) -> bool {
        !matches!(self.status, DownloadStatus::Failed(_))
    }

    pub fn error(&self) -> Option<&DownloadError> {
        match &self.status {
            DownloadStatus::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// Downloads `talk` to `target` unless a file is already there.
///
/// Errors are caught here and returned inside the result; the partial file is
/// removed before returning a failure.
pub fn download_talk(fetcher: &dyn Fetcher, talk: &Talk, target: &Path) -> DownloadResult {
    if target.exists() {
        tracing::debug!("skipping {}, file already exists", talk.id());
        return DownloadResult::new(talk, DownloadStatus::AlreadyPresent);
    }

    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| talk.id().to_string());
    tracing::info!("starting download {}", name);

    let status = match fetch_to_file(fetcher, talk.url(), target) {
        Ok(bytes) => {
            tracing::info!("downloaded {} ({} MiB)", name, bytes / (1024 * 1024));
            DownloadStatus::Downloaded { bytes }
        }
        Err(e) => {
            tracing::error!(url = talk.url(), "failed to download: {}", e);
            remove_partial(target);
            DownloadStatus::Failed(e)
        }
    };
    DownloadResult::new(talk, status)
}

fn fetch_to_file(fetcher: &dyn Fetcher, url: &str, target: &Path) -> Result<u64, DownloadError> {
    let file = File::create(target)?;
    let mut writer = BufWriter::with_capacity(CHUNK_SIZE, file);
    let bytes = fetcher.fetch(url, &mut writer)?;
    writer.flush()?;
    Ok(bytes)
}

fn remove_partial(target: &Path) {
    match fs::remove_file(target) {
        Ok(()) => tracing::debug!("removed partial file {}", target.display()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!("could not remove partial file {}: {}", target.display(), e),
    }
}
