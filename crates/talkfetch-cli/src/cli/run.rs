//! Schedule → pending talks → downloads → summary.

use anyhow::Result;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use talkfetch_core::downloader::DownloadResult;
use talkfetch_core::fetch::{CurlFetcher, CurlOptions};
use talkfetch_core::pool;
use talkfetch_core::schedule;
use talkfetch_core::storage;
use talkfetch_core::talk::Talk;

use super::Settings;

/// Lists video URLs of talks not yet downloaded.
pub fn run_dry(ics_file: &Path, settings: &Settings) -> Result<()> {
    let talks = schedule::load_schedule(ics_file)?;
    let pending = storage::pending_talks(talks, &settings.output_dir);
    let stdout = io::stdout();
    write_talk_list(&mut stdout.lock(), &pending)?;
    Ok(())
}

/// Downloads every pending talk and prints `Downloaded <ok> of <pending> talks`.
pub fn run_download(ics_file: &Path, settings: &Settings) -> Result<()> {
    let talks = schedule::load_schedule(ics_file)?;
    let total = talks.len();
    let pending = storage::pending_talks(talks, &settings.output_dir);
    tracing::info!(
        "{} of {} talks to download into {}",
        pending.len(),
        total,
        settings.output_dir.display()
    );

    let fetcher = Arc::new(CurlFetcher::new(CurlOptions::from(&settings.config)));
    let attempted = pending.len();
    let results = pool::run_downloads(fetcher, pending, &settings.output_dir, settings.workers)?;

    let successful = count_successful(&results);
    tracing::info!(
        failed = attempted - successful,
        "downloaded {} of {} talks",
        successful,
        attempted
    );
    println!("{}", summary_line(successful, attempted));
    Ok(())
}

/// Failures were already logged per talk by the executor.
pub(super) fn count_successful(results: &[DownloadResult]) -> usize {
    results.iter().filter(|r| r.is_success()).count()
}

pub(super) fn summary_line(successful: usize, attempted: usize) -> String {
    format!("Downloaded {} of {} talks", successful, attempted)
}

pub(super) fn write_talk_list(out: &mut dyn Write, talks: &[Talk]) -> io::Result<()> {
    writeln!(out, "List of talks videos:")?;
    for talk in talks {
        writeln!(out, "  - {}", talk.url())?;
    }
    Ok(())
}
