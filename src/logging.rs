//! Console and file logging.
//!
//! Every event goes to the console and to three files in the log directory:
//!
//! - `info.log`: plain text, every level the filter lets through
//! - `errors.txt`: plain text, errors only
//! - `anonymization.jsonl`: one JSON object per event

use anyhow::Context;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

pub const INFO_LOG: &str = "info.log";
pub const ERROR_LOG: &str = "errors.txt";
pub const JSON_LOG: &str = "anonymization.jsonl";

/// Locations of the log files for one run.
#[derive(Debug, Clone)]
pub struct LogFiles {
    pub dir: PathBuf,
}

impl LogFiles {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn info_log(&self) -> PathBuf {
        self.dir.join(INFO_LOG)
    }

    pub fn error_log(&self) -> PathBuf {
        self.dir.join(ERROR_LOG)
    }

    pub fn json_log(&self) -> PathBuf {
        self.dir.join(JSON_LOG)
    }
}

fn open_append(path: &Path) -> anyhow::Result<Arc<File>> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    Ok(Arc::new(file))
}

/// Create the log directory and install the global subscriber.
///
/// `RUST_LOG` overrides the default `info` filter.
pub fn init(dir: &Path) -> anyhow::Result<LogFiles> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let files = LogFiles::new(dir);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(open_append(&files.info_log())?),
        )
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(open_append(&files.error_log())?)
                .with_filter(LevelFilter::ERROR),
        )
        .with(
            fmt::layer()
                .json()
                .with_writer(open_append(&files.json_log())?),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_log_file_paths() {
        let files = LogFiles::new("logs");
        assert_eq!(files.info_log(), PathBuf::from("logs/info.log"));
        assert_eq!(files.error_log(), PathBuf::from("logs/errors.txt"));
        assert_eq!(files.json_log(), PathBuf::from("logs/anonymization.jsonl"));
    }

    #[test]
    fn test_open_append_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(ERROR_LOG);
        open_append(&path).unwrap();
        assert!(path.exists());
    }
}
