//! Optional file logger with size-based rotation.
//!
//! Lines go to `~/.config/tessera/logs/tessera.log`. Once the file grows
//! past `max_file_mb` it is renamed to `tessera.log.1` (a single backup)
//! and a fresh file is started. Until [`init`] succeeds every log macro
//! is a no-op.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use serde::{Deserialize, Serialize};

static SINK: OnceLock<Mutex<LogFile>> = OnceLock::new();

const LOG_FILE_NAME: &str = "tessera.log";

/// Logging configuration (`[log]` in `config.toml`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Whether file logging is enabled. Defaults to `false`.
    pub enabled: bool,
    /// Minimum level: "debug", "info", "warn" or "error".
    pub level: String,
    /// Rotate once the file reaches this many megabytes. `0` disables rotation.
    pub max_file_mb: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".into(),
            max_file_mb: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    fn label(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    /// Parses a level name case-insensitively. Unknown names mean `Info`.
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Self::Debug,
            "warn" | "warning" => Self::Warn,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }
}

/// An open log file that filters by level and rotates by size.
struct LogFile {
    path: PathBuf,
    file: File,
    threshold: Level,
    /// Rotation size in bytes; `0` never rotates.
    limit: u64,
    size: u64,
}

impl LogFile {
    /// Opens (or creates) `tessera.log` inside `dir`, appending.
    fn open(dir: &Path, config: &LogConfig) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let path = dir.join(LOG_FILE_NAME);
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let size = file.metadata()?.len();
        Ok(Self {
            path,
            file,
            threshold: Level::parse(&config.level),
            limit: config.max_file_mb.saturating_mul(1024 * 1024),
            size,
        })
    }

    fn append(&mut self, level: Level, args: fmt::Arguments<'_>) {
        if level < self.threshold {
            return;
        }
        let line = format!("{} [{}] {args}\n", timestamp(), level.label());
        if self.file.write_all(line.as_bytes()).is_ok() {
            self.size += line.len() as u64;
        }
        if self.limit > 0 && self.size >= self.limit {
            self.rotate();
        }
    }

    /// Moves the current file to the `.1` backup and starts an empty one.
    fn rotate(&mut self) {
        let _ = fs::rename(&self.path, backup_path(&self.path));
        if let Ok(file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
        {
            self.file = file;
        }
        self.size = 0;
    }
}

/// Installs the global logger under `<config dir>/logs`.
///
/// Does nothing if logging is disabled or the file can't be opened.
/// Only the first successful call takes effect.
pub fn init(config: &LogConfig) {
    if !config.enabled {
        return;
    }
    let Some(dir) = crate::config::config_dir() else {
        return;
    };
    if let Ok(sink) = LogFile::open(&dir.join("logs"), config) {
        let _ = SINK.set(Mutex::new(sink));
    }
}

/// Writes one line if `level` is at or above the configured minimum.
pub fn write(level: Level, args: fmt::Arguments<'_>) {
    if let Some(Ok(mut sink)) = SINK.get().map(Mutex::lock) {
        sink.append(level, args);
    }
}

fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".1");
    PathBuf::from(name)
}

/// UTC wall-clock time as `HH:MM:SS`.
fn timestamp() -> String {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let (h, m, s) = (secs / 3600 % 24, secs / 60 % 60, secs % 60);
    format!("{h:02}:{m:02}:{s:02}")
}

/// Logs at DEBUG level.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Debug, format_args!($($arg)*)) };
}

/// Logs at INFO level.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Info, format_args!($($arg)*)) };
}

/// Logs at WARN level.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Warn, format_args!($($arg)*)) };
}

/// Logs at ERROR level.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Error, format_args!($($arg)*)) };
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Empty directory unique to one test.
    fn log_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("tessera-log-{}-{name}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn debug_config() -> LogConfig {
        LogConfig {
            enabled: true,
            level: "debug".into(),
            max_file_mb: 0,
        }
    }

    #[test]
    fn level_parse_is_case_insensitive() {
        assert_eq!(Level::parse("DEBUG"), Level::Debug);
        assert_eq!(Level::parse("Warn"), Level::Warn);
        assert_eq!(Level::parse("warning"), Level::Warn);
        assert_eq!(Level::parse("error"), Level::Error);
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        assert_eq!(Level::parse("verbose"), Level::Info);
        assert_eq!(Level::parse(""), Level::Info);
    }

    #[test]
    fn backup_appends_suffix() {
        let path = Path::new("/tmp/logs/tessera.log");
        assert_eq!(backup_path(path), PathBuf::from("/tmp/logs/tessera.log.1"));
    }

    #[test]
    fn lines_below_threshold_are_dropped() {
        // Arrange
        let dir = log_dir("threshold");
        let config = LogConfig {
            level: "warn".into(),
            ..debug_config()
        };
        let mut sink = LogFile::open(&dir, &config).unwrap();

        // Act
        sink.append(Level::Info, format_args!("quiet"));
        sink.append(Level::Error, format_args!("loud {}", 7));

        // Assert
        let content = fs::read_to_string(dir.join(LOG_FILE_NAME)).unwrap();
        assert!(!content.contains("quiet"));
        assert!(content.contains("[ERROR] loud 7"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn oversized_file_rotates_to_single_backup() {
        // Arrange
        let dir = log_dir("rotate");
        let mut sink = LogFile::open(&dir, &debug_config()).unwrap();
        sink.limit = 64;

        // Act: "HH:MM:SS [INFO] line N\n" is 23 bytes, so the file
        // rotates after every third line.
        for i in 0..10 {
            sink.append(Level::Info, format_args!("line {i}"));
        }

        // Assert
        let backup = fs::read_to_string(dir.join("tessera.log.1")).unwrap();
        let current = fs::read_to_string(dir.join(LOG_FILE_NAME)).unwrap();
        assert!(backup.contains("line 6"), "backup: {backup}");
        assert!(backup.contains("line 8"), "backup: {backup}");
        assert!(!backup.contains("line 0"), "backup: {backup}");
        assert!(current.contains("line 9"), "current: {current}");
        assert!(current.len() < 64);
        assert_eq!(sink.size, current.len() as u64);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn reopening_resumes_size_from_disk() {
        // Arrange
        let dir = log_dir("resume");
        let mut first = LogFile::open(&dir, &debug_config()).unwrap();
        first.append(Level::Debug, format_args!("hello"));
        let written = first.size;
        drop(first);

        // Act
        let second = LogFile::open(&dir, &debug_config()).unwrap();

        // Assert
        assert!(written > 0);
        assert_eq!(second.size, written);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn disabled_config_leaves_macros_inert() {
        // Arrange / Act
        init(&LogConfig::default());
        crate::log_info!("ignored {}", 1);

        // Assert
        assert!(SINK.get().is_none());
    }
}
