//! Location of the `.coteg` directory that holds `config.toml` and `logs/`.

use std::{ffi::OsString, path::PathBuf};

use directories::BaseDirs;
use thiserror::Error;

/// Folder created under the base directory.
pub const APP_DIR_NAME: &str = ".coteg";
/// Replaces the OS config directory as the base when set and non-empty.
pub const CONFIG_HOME_ENV: &str = "COTEG_CONFIG_HOME";
const LOGS_DIR_NAME: &str = "logs";

#[derive(Debug, Error)]
pub enum AppDirError {
    #[error("Neither COTEG_CONFIG_HOME nor an OS config directory is available")]
    Unresolved,
    #[error("Failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// The `.coteg` root, created on first use.
pub fn app_root_dir() -> Result<PathBuf, AppDirError> {
    let base = resolve_base(std::env::var_os(CONFIG_HOME_ENV))?;
    created(base.join(APP_DIR_NAME))
}

/// `<root>/logs`, created on first use.
pub fn logs_dir() -> Result<PathBuf, AppDirError> {
    created(app_root_dir()?.join(LOGS_DIR_NAME))
}

fn resolve_base(config_home: Option<OsString>) -> Result<PathBuf, AppDirError> {
    match config_home.filter(|value| !value.is_empty()) {
        Some(value) => Ok(PathBuf::from(value)),
        None => BaseDirs::new()
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or(AppDirError::Unresolved),
    }
}

fn created(path: PathBuf) -> Result<PathBuf, AppDirError> {
    match std::fs::create_dir_all(&path) {
        Ok(()) => Ok(path),
        Err(source) => Err(AppDirError::Create { path, source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn config_home_value_becomes_base() {
        let base = resolve_base(Some(OsString::from("/tmp/coteg-home"))).unwrap();
        assert_eq!(base, PathBuf::from("/tmp/coteg-home"));
    }

    #[test]
    fn empty_config_home_is_ignored() {
        let base = resolve_base(Some(OsString::new()));
        assert_eq!(
            base.ok(),
            BaseDirs::new().map(|dirs| dirs.config_dir().to_path_buf())
        );
    }

    #[test]
    fn created_makes_nested_directories() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join(APP_DIR_NAME).join(LOGS_DIR_NAME);
        assert_eq!(created(nested.clone()).unwrap(), nested);
        assert!(nested.is_dir());
    }

    #[test]
    fn created_reports_blocked_path() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("occupied");
        std::fs::write(&file, "").unwrap();
        let err = created(file.join("child")).unwrap_err();
        assert!(matches!(err, AppDirError::Create { .. }));
    }
}
