//! Logging setup on top of `tracing-subscriber`.
//!
//! The TUI owns the terminal, so interactive sessions log to a file
//! (by default `paronyms.log` in the platform cache directory). One-shot
//! commands log to stderr. If the default log file cannot be opened the
//! session runs without logs; an explicit `--log-file` must open. `PARONYMS_LOG` takes an `EnvFilter` directive and
//! overrides the verbosity flags.

use crate::error::AppError;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "PARONYMS_LOG";
const LOG_FILE_NAME: &str = "paronyms.log";

/// Where and how much to log.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: Level,
    /// Log file path; stderr when `None`.
    pub log_file: Option<PathBuf>,
    /// Run without logs instead of failing when `log_file` cannot be opened.
    pub file_optional: bool,
}

/// What `init_logging` installed.
#[derive(Debug)]
pub enum LogOutput {
    File(PathBuf),
    Stderr,
    /// The optional log file could not be opened; no subscriber is installed.
    Disabled(AppError),
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            log_file: None,
            file_optional: false,
        }
    }
}

impl LogConfig {
    /// Map the `-v` count to a level.
    ///
    /// - 0: warn
    /// - 1: info
    /// - 2: debug
    /// - 3+: trace
    #[must_use]
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self {
            level,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    /// Log to `path` if it can be opened, otherwise not at all.
    #[must_use]
    pub fn with_optional_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self.file_optional = true;
        self
    }
}

/// Default log file location inside the platform cache directory.
pub fn default_log_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "paronyms", "paronym-explorer")
        .map(|dirs| dirs.cache_dir().join(LOG_FILE_NAME))
}

/// Open `path` for appending, creating parent directories as needed.
pub fn open_log_file(path: &Path) -> Result<File, AppError> {
    let with_path = |e: std::io::Error| AppError::Logging(format!("{}: {e}", path.display()));
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(with_path)?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(with_path)
}

/// Install the global subscriber. Call once at startup.
pub fn init_logging(config: &LogConfig) -> Result<LogOutput, AppError> {
    let filter = build_env_filter(config.level);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let (result, output) = match &config.log_file {
        Some(path) => {
            let file = match open_log_file(path) {
                Ok(file) => file,
                Err(e) if config.file_optional => return Ok(LogOutput::Disabled(e)),
                Err(e) => return Err(e),
            };
            let result = builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
            (result, LogOutput::File(path.clone()))
        }
        None => (
            builder.with_writer(std::io::stderr).try_init(),
            LogOutput::Stderr,
        ),
    };
    result
        .map(|()| output)
        .map_err(|e| AppError::Logging(e.to_string()))
}

/// Build the filter from `PARONYMS_LOG`, falling back to `level` for this crate.
fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        let level = level.as_str().to_lowercase();
        EnvFilter::new(format!("warn,paronyms={level}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_verbosity() {
        assert_eq!(LogConfig::from_verbosity(0).level, Level::WARN);
        assert_eq!(LogConfig::from_verbosity(1).level, Level::INFO);
        assert_eq!(LogConfig::from_verbosity(2).level, Level::DEBUG);
        assert_eq!(LogConfig::from_verbosity(7).level, Level::TRACE);
        assert!(LogConfig::from_verbosity(1).log_file.is_none());
        assert!(!LogConfig::from_verbosity(1).file_optional);
    }

    #[test]
    fn test_with_log_file() {
        let config = LogConfig::default().with_log_file(Some(PathBuf::from("/tmp/x.log")));
        assert_eq!(config.log_file.as_deref(), Some(Path::new("/tmp/x.log")));
    }

    #[test]
    fn test_open_log_file_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join(LOG_FILE_NAME);
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }

    /// A log path whose parent is a regular file, so it can never be created.
    fn blocked_log_path(dir: &tempfile::TempDir) -> PathBuf {
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, b"").unwrap();
        blocker.join(LOG_FILE_NAME)
    }

    #[test]
    fn test_open_log_file_error_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = blocked_log_path(&dir);
        let err = open_log_file(&path).unwrap_err();
        assert!(matches!(err, AppError::Logging(_)));
        assert!(err.to_string().contains(&path.display().to_string()), "{err}");
    }

    #[test]
    fn test_unopenable_optional_file_disables_logging() {
        let dir = tempfile::tempdir().unwrap();
        let path = blocked_log_path(&dir);
        let config = LogConfig::default().with_optional_log_file(Some(path.clone()));
        match init_logging(&config).unwrap() {
            LogOutput::Disabled(reason) => {
                assert!(reason.to_string().contains(&path.display().to_string()));
            }
            other => panic!("expected logging to be disabled, got {other:?}"),
        }
    }

    #[test]
    fn test_unopenable_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = blocked_log_path(&dir);
        let config = LogConfig::default().with_log_file(Some(path.clone()));
        let err = init_logging(&config).unwrap_err();
        assert!(err.to_string().contains(&path.display().to_string()), "{err}");
    }

    #[test]
    fn test_default_log_path_file_name() {
        if let Some(path) = default_log_path() {
            assert_eq!(path.file_name().unwrap(), LOG_FILE_NAME);
        }
    }
}
