//! Worker pool: runs the download executor over all pending talks with a
//! fixed number of threads.
//!
//! Workers pop `(index, talk)` pairs from a shared queue and send results back
//! over a channel; results are slotted by index, so the returned list follows
//! input order no matter which transfer finishes first.

use anyhow::{Context, Result};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use crate::downloader::{download_talk, DownloadError, DownloadResult, DownloadStatus};
use crate::fetch::Fetcher;
use crate::storage::{ensure_output_dirs, target_path};
use crate::talk::Talk;

/// Default number of concurrent downloads.
pub const DEFAULT_WORKERS: usize = 3;

/// Downloads every talk in `talks` into `output_dir` using up to `workers`
/// threads (0 is treated as 1). Returns one result per talk, in input order.
///
/// Only directory setup can fail the whole call; per-talk failures are
/// reported in the results.
pub fn run_downloads(
    fetcher: Arc<dyn Fetcher>,
    talks: Vec<Talk>,
    output_dir: &Path,
    workers: usize,
) -> Result<Vec<DownloadResult>> {
    ensure_output_dirs(output_dir, &talks)
        .with_context(|| format!("create output directories under {}", output_dir.display()))?;

    let count = talks.len();
    if count == 0 {
        return Ok(Vec::new());
    }

    let work: Arc<Mutex<VecDeque<(usize, Talk)>>> =
        Arc::new(Mutex::new(talks.iter().cloned().enumerate().collect()));
    let (tx, rx) = mpsc::channel();
    let num_workers = workers.max(1).min(count);
    tracing::debug!("downloading {} talks with {} workers", count, num_workers);

    let mut handles = Vec::with_capacity(num_workers);
    for _ in 0..num_workers {
        let work = Arc::clone(&work);
        let tx = tx.clone();
        let fetcher = Arc::clone(&fetcher);
        let output_dir: PathBuf = output_dir.to_path_buf();
        handles.push(std::thread::spawn(move || loop {
            let next = match work.lock() {
                Ok(mut queue) => queue.pop_front(),
                Err(_) => None,
            };
            let Some((index, talk)) = next else {
                break;
            };
            let target = target_path(&output_dir, &talk);
            let res = download_talk(fetcher.as_ref(), &talk, &target);
            if tx.send((index, res)).is_err() {
                break;
            }
        }));
    }
    drop(tx);

    let mut slots: Vec<Option<DownloadResult>> = (0..count).map(|_| None).collect();
    for (index, res) in rx {
        slots[index] = Some(res);
    }
    for h in handles {
        if let Err(e) = h.join() {
            tracing::error!("download worker panicked: {:?}", e);
        }
    }

    let results = slots
        .into_iter()
        .zip(&talks)
        .map(|(slot, talk)| {
            slot.unwrap_or_else(|| {
                DownloadResult::new(talk, DownloadStatus::Failed(DownloadError::WorkerLost))
            })
        })
        .collect();
    Ok(results)
}
