//! On-disk layout: `{output_dir}/{year}/{id}.mp4`.
//!
//! The presence of that file is the only persisted state; there is no manifest.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::talk::Talk;

/// Where `talk`'s video is stored under `output_dir`.
pub fn target_path(output_dir: &Path, talk: &Talk) -> PathBuf {
    output_dir
        .join(talk.year())
        .join(format!("{}.mp4", talk.id()))
}

/// Talks whose video file does not exist yet, in input order.
pub fn pending_talks(talks: Vec<Talk>, output_dir: &Path) -> Vec<Talk> {
    talks
        .into_iter()
        .filter(|talk| {
            let exists = target_path(output_dir, talk).exists();
            if exists {
                tracing::debug!("skipping {}, file already exists", talk.id());
            }
            !exists
        })
        .collect()
}

/// Creates `output_dir` and one subdirectory per distinct year. Existing
/// directories are fine.
pub fn ensure_output_dirs(output_dir: &Path, talks: &[Talk]) -> io::Result<()> {
    fs::create_dir_all(output_dir)?;
    let years: BTreeSet<&str> = talks.iter().map(Talk::year).collect();
    for year in years {
        fs::create_dir_all(output_dir.join(year))?;
    }
    Ok(())
}
