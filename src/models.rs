use std::path::PathBuf;

use image::imageops::FilterType;
use log::LevelFilter;

/// Settings read from `pwa_config.txt`.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub icon: Option<PathBuf>,
    pub launch: Option<PathBuf>,
    pub filter: FilterType,
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            icon: None,
            launch: None,
            filter: FilterType::Lanczos3,
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

/// Source images for one run. `None` picks the default file when present;
/// an empty path turns the generator off.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateOptions {
    pub icon: Option<PathBuf>,
    pub launch: Option<PathBuf>,
}

/// What a run produced, in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Created {
    pub app_name: String,
    pub files: Vec<PathBuf>,
}

/// Values given on the command line. Anything set here beats the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub icon: Option<PathBuf>,
    pub launch: Option<PathBuf>,
    pub filter: Option<String>,
    pub verbose: u8,
    pub log_file: Option<PathBuf>,
}

/// Everything a run needs once flags, config file and defaults are merged.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub options: CreateOptions,
    pub filter: FilterType,
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
    /// Problems found while merging, to be logged once the logger is up.
    pub warnings: Vec<String>,
}
