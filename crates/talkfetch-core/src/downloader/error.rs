//! Per-talk download failure reasons.

use thiserror::Error;

/// Why a single talk could not be downloaded. Carried inside
/// [`DownloadStatus::Failed`](super::DownloadStatus::Failed); never aborts the run.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// Final response status was not 2xx.
    #[error("HTTP {status}")]
    Http { status: u32 },
    /// libcurl reported an error (connect, timeout, connection closed early, ...).
    #[error("transfer failed: {0}")]
    Transfer(#[from] curl::Error),
    /// Creating, writing or flushing the target file failed.
    #[error("i/o: {0}")]
    Io(#[from] std::io::Error),
    /// The worker thread handling this talk died before reporting a result.
    #[error("worker exited before finishing this talk")]
    WorkerLost,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(DownloadError::Http { status: 404 }.to_string(), "HTTP 404");
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        assert_eq!(DownloadError::from(io).to_string(), "i/o: disk full");
    }
}
