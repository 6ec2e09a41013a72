use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

struct Logger {
    level: LevelFilter,
    file: Option<PathBuf>,
}

fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

fn file_line(record: &Record) -> String {
    format!("[{}] {} {}", timestamp(), record.level(), record.args())
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        eprintln!("{}: {}", record.level().as_str().to_lowercase(), record.args());
        if let Some(path) = &self.file {
            // Logging must never fail the run; a broken log file is ignored.
            if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(path) {
                let _ = writeln!(f, "{}", file_line(record));
            }
        }
    }

    fn flush(&self) {}
}

/// Install the process logger. Lines go to stderr and, if `file` is set, are
/// appended there with a timestamp.
pub fn init(level: LevelFilter, file: Option<PathBuf>) -> Result<(), SetLoggerError> {
    if let Some(parent) = file.as_ref().and_then(|p| p.parent()) {
        if !parent.as_os_str().is_empty() {
            let _ = fs::create_dir_all(parent);
        }
    }
    log::set_boxed_logger(Box::new(Logger { level, file }))?;
    log::set_max_level(level);
    Ok(())
}

pub fn parse_level(s: &str) -> Option<LevelFilter> {
    s.trim().parse::<LevelFilter>().ok()
}
