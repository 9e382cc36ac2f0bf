//! Streamed HTTP GET.
//!
//! [`Fetcher`] is the seam between the download executor and the network;
//! [`CurlFetcher`] is the libcurl implementation used in production. Each call
//! uses its own easy handle, so one fetcher can be shared by every worker thread.

use std::io::{self, Write};
use std::time::Duration;

use crate::config::TalkfetchConfig;
use crate::downloader::DownloadError;

/// Streams the body of a GET response into a writer.
pub trait Fetcher: Send + Sync {
    /// Fetches `url`, writing the body to `sink` as it arrives. Returns the
    /// number of body bytes written.
    fn fetch(&self, url: &str, sink: &mut dyn Write) -> Result<u64, DownloadError>;
}

/// Transfer options applied to every curl handle.
#[derive(Debug, Clone)]
pub struct CurlOptions {
    pub connect_timeout: Duration,
    /// Abort if the rate stays below this many bytes/sec for `low_speed_time`.
    pub low_speed_limit: u32,
    pub low_speed_time: Duration,
    /// Whole-transfer limit; `None` lets large videos take as long as they need.
    pub transfer_timeout: Option<Duration>,
    pub user_agent: Option<String>,
}

impl Default for CurlOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(30),
            low_speed_limit: 1024,
            low_speed_time: Duration::from_secs(60),
            transfer_timeout: None,
            user_agent: None,
        }
    }
}

impl From<&TalkfetchConfig> for CurlOptions {
    fn from(cfg: &TalkfetchConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            low_speed_limit: cfg.low_speed_limit_bytes,
            low_speed_time: Duration::from_secs(cfg.low_speed_time_secs),
            transfer_timeout: cfg.transfer_timeout_secs.map(Duration::from_secs),
            user_agent: cfg.user_agent.clone(),
        }
    }
}

/// [`Fetcher`] backed by a blocking libcurl easy handle.
#[derive(Debug, Clone, Default)]
pub struct CurlFetcher {
    options: CurlOptions,
}

impl CurlFetcher {
    pub fn new(options: CurlOptions) -> Self {
        Self { options }
    }
}

impl Fetcher for CurlFetcher {
    fn fetch(&self, url: &str, sink: &mut dyn Write) -> Result<u64, DownloadError> {
        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        // Error bodies (404 pages) must never land in the video file.
        easy.fail_on_error(true)?;
        easy.connect_timeout(self.options.connect_timeout)?;
        easy.low_speed_limit(self.options.low_speed_limit)?;
        easy.low_speed_time(self.options.low_speed_time)?;
        if let Some(timeout) = self.options.transfer_timeout {
            easy.timeout(timeout)?;
        }
        if let Some(agent) = &self.options.user_agent {
            easy.useragent(agent)?;
        }

        let mut written = 0u64;
        let mut write_error: Option<io::Error> = None;
        let performed = {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| match sink.write_all(data) {
                Ok(()) => {
                    written += data.len() as u64;
                    Ok(data.len())
                }
                Err(e) => {
                    write_error = Some(e);
                    Ok(0) // abort transfer
                }
            })?;
            transfer.perform()
        };

        if let Some(e) = write_error {
            return Err(DownloadError::Io(e));
        }
        if let Err(e) = performed {
            if e.is_http_returned_error() {
                let status = easy.response_code().unwrap_or(0);
                return Err(DownloadError::Http { status });
            }
            return Err(DownloadError::Transfer(e));
        }

        let status = easy.response_code()?;
        if !(200..300).contains(&status) {
            return Err(DownloadError::Http { status });
        }
        tracing::debug!("{} is {} MiB", url, written / (1024 * 1024));
        Ok(written)
    }
}
