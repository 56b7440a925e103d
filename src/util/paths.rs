//! Path utilities for e-talk data directories

use std::path::PathBuf;

/// Get the base e-talk data directory (~/.etalk)
pub fn data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".etalk"))
        .unwrap_or_else(|| PathBuf::from(".etalk"))
}

/// Get the logs directory (~/.etalk/logs)
pub fn logs_dir() -> PathBuf {
    data_dir().join("logs")
}

/// Get the default log file path (~/.etalk/logs/etalk.log)
pub fn log_file_path() -> PathBuf {
    logs_dir().join("etalk.log")
}

/// Get the config file path (~/.etalk/config.toml)
pub fn config_path() -> PathBuf {
    data_dir().join("config.toml")
}
