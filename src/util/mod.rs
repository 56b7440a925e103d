//! Utility modules

pub mod format;
pub mod paths;

pub use format::{format_size, format_timestamp};
pub use paths::{config_path, data_dir, log_file_path, logs_dir};
