pub mod config;
pub mod logging;

pub mod downloader;
pub mod fetch;
pub mod pool;
pub mod schedule;
pub mod storage;
pub mod talk;
