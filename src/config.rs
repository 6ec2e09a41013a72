use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::LevelFilter;

use crate::error::{CreateError, Result};
use crate::images::parse_filter;
use crate::logger::parse_level;
use crate::models::{Config, CreateOptions, Overrides, Settings};

pub const CONFIG_FILE: &str = "pwa_config.txt";

/// A parsed config file plus the lines that were ignored or fell back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedConfig {
    pub config: Config,
    pub warnings: Vec<String>,
}

pub fn config_file_path(working_dir: &Path) -> PathBuf {
    working_dir.join(CONFIG_FILE)
}

/// Read `pwa_config.txt` from the working directory. A missing file yields
/// the defaults.
pub fn read_config(working_dir: &Path) -> Result<ParsedConfig> {
    let path = config_file_path(working_dir);
    match fs::read_to_string(&path) {
        Ok(content) => Ok(parse_config(&content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(ParsedConfig::default()),
        Err(e) => Err(CreateError::io(path)(e)),
    }
}

pub fn parse_config(content: &str) -> ParsedConfig {
    let mut cfg = Config::default();
    let mut warnings = Vec::new();
    for (n, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((k, v)) = line.split_once('=') else {
            warnings.push(format!("{}:{}: ignoring line without '=': {}", CONFIG_FILE, n + 1, line));
            continue;
        };
        let v = v.trim();
        match k.trim() {
            "icon" => cfg.icon = Some(PathBuf::from(v)),
            "launch" => cfg.launch = Some(PathBuf::from(v)),
            "filter" => match parse_filter(v) {
                Some(f) => cfg.filter = f,
                None => warnings.push(format!("{}:{}: unknown filter '{}', keeping lanczos3", CONFIG_FILE, n + 1, v)),
            },
            "log_level" => match parse_level(v) {
                Some(l) => cfg.log_level = l,
                None => warnings.push(format!("{}:{}: unknown log_level '{}', keeping info", CONFIG_FILE, n + 1, v)),
            },
            "log_file" => cfg.log_file = (!v.is_empty()).then(|| PathBuf::from(v)),
            _ => {}
        }
    }
    ParsedConfig { config: cfg, warnings }
}

/// Merge command-line overrides over the config file. Flags win, then the
/// file, then the built-in defaults.
pub fn resolve_settings(parsed: ParsedConfig, overrides: Overrides) -> Settings {
    let ParsedConfig { config: cfg, mut warnings } = parsed;

    let filter = match overrides.filter.as_deref() {
        Some(name) => parse_filter(name).unwrap_or_else(|| {
            warnings.push(format!("unknown --filter '{}', using {:?}", name, cfg.filter));
            cfg.filter
        }),
        None => cfg.filter,
    };
    let log_level = match overrides.verbose {
        0 => cfg.log_level,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    Settings {
        options: CreateOptions {
            icon: overrides.icon.or(cfg.icon),
            launch: overrides.launch.or(cfg.launch),
        },
        filter,
        log_level,
        log_file: overrides.log_file.or(cfg.log_file),
        warnings,
    }
}
