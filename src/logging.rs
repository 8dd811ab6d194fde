//! Tracing output for the client: stdout plus one file per launch.
//!
//! `RUST_LOG` overrides the default `info` filter. Files are named by launch
//! time, so sorting names sorts launches.

use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::OnceLock,
};

use thiserror::Error;
use time::{
    OffsetDateTime, UtcOffset, format_description::BorrowedFormatItem, macros::format_description,
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, filter::LevelFilter, fmt, prelude::*};

use crate::app_dirs::{self, AppDirError};

/// Log files kept on disk, counting the current launch.
const KEEP_LOG_FILES: usize = 10;
const FILE_PREFIX: &str = "coteg_";
const FILE_STAMP: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]_[hour]-[minute]-[second]");
const LINE_STAMP: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Current log file and the guard that flushes it on exit.
static ACTIVE: OnceLock<(PathBuf, WorkerGuard)> = OnceLock::new();

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Log directory unavailable: {0}")]
    Dir(#[from] AppDirError),
    #[error("Failed to stamp log file name: {0}")]
    Stamp(#[from] time::error::Format),
    #[error("Failed to prune old logs in {path}: {source}")]
    Prune { path: PathBuf, source: io::Error },
    #[error("Another tracing subscriber is installed: {0}")]
    Install(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Install the global subscriber and return this launch's log file.
///
/// Later calls return the same path without reinstalling anything.
pub fn init() -> Result<PathBuf, LoggingError> {
    if let Some((path, _)) = ACTIVE.get() {
        return Ok(path.clone());
    }
    let dir = app_dirs::logs_dir()?;
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    let file_name = log_file_name(OffsetDateTime::now_utc().to_offset(offset))?;
    prune_logs(&dir, KEEP_LOG_FILES - 1)?;

    let appender = tracing_appender::rolling::never(&dir, &file_name);
    let (file_writer, guard) = tracing_appender::non_blocking(appender);
    let timer = fmt::time::OffsetTime::new(offset, LINE_STAMP);
    let subscriber = tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_timer(timer.clone()))
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_timer(timer)
                .with_writer(file_writer),
        );
    tracing::subscriber::set_global_default(subscriber)?;

    let path = dir.join(file_name);
    let _ = ACTIVE.set((path.clone(), guard));
    tracing::info!(path = %path.display(), "Logging started");
    Ok(path)
}

fn env_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy()
}

fn log_file_name(launched_at: OffsetDateTime) -> Result<String, time::error::Format> {
    Ok(format!("{FILE_PREFIX}{}.log", launched_at.format(FILE_STAMP)?))
}

fn is_log_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with(FILE_PREFIX) && name.ends_with(".log"))
}

/// Delete the oldest launch logs so at most `keep` remain.
fn prune_logs(dir: &Path, keep: usize) -> Result<(), LoggingError> {
    let prune_error = |source: io::Error| LoggingError::Prune {
        path: dir.to_path_buf(),
        source,
    };
    let mut logs: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(prune_error)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_log_file(path))
        .collect();
    if logs.len() <= keep {
        return Ok(());
    }
    logs.sort();
    let stale = logs.len() - keep;
    for path in &logs[..stale] {
        fs::remove_file(path).map_err(prune_error)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn file_name_carries_launch_time() {
        let launched = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
        assert_eq!(
            log_file_name(launched).unwrap(),
            "coteg_2023-11-14_22-13-20.log"
        );
    }

    #[test]
    fn prune_drops_earliest_launches_only() {
        let dir = tempdir().unwrap();
        let names = [
            "coteg_2024-01-03_09-00-00.log",
            "coteg_2024-01-01_09-00-00.log",
            "coteg_2024-01-05_09-00-00.log",
            "coteg_2024-01-02_09-00-00.log",
            "coteg_2024-01-04_09-00-00.log",
        ];
        for name in names {
            fs::write(dir.path().join(name), "").unwrap();
        }
        fs::write(dir.path().join("notes.log"), "").unwrap();
        fs::write(dir.path().join("coteg_readme.txt"), "").unwrap();

        prune_logs(dir.path(), 3).unwrap();

        let mut left: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        left.sort();
        assert_eq!(
            left,
            vec![
                "coteg_2024-01-03_09-00-00.log",
                "coteg_2024-01-04_09-00-00.log",
                "coteg_2024-01-05_09-00-00.log",
                "coteg_readme.txt",
                "notes.log",
            ]
        );
    }

    #[test]
    fn prune_under_limit_is_a_no_op() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("coteg_2024-01-01_09-00-00.log"), "").unwrap();
        prune_logs(dir.path(), 9).unwrap();
        assert!(dir.path().join("coteg_2024-01-01_09-00-00.log").exists());
    }
}
