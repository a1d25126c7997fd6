//! File logger for the `log` facade.
//!
//! The terminal owns stdout/stderr while a front-end is running, so records
//! go to a file chosen on the command line. Without one, logging stays off.

use crate::error::Result;
use log::{LevelFilter, Log, Metadata, Record};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::Instant;

struct FileLogger {
    level: LevelFilter,
    started: Instant,
    file: Mutex<File>,
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let elapsed = self.started.elapsed().as_secs_f64();
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(
                file,
                "[{elapsed:>10.3}s {:<5} {}] {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Install the file logger if `path` is set. Appends to an existing file.
pub fn init(path: Option<&Path>, level: LevelFilter) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    log::set_boxed_logger(Box::new(FileLogger {
        level,
        started: Instant::now(),
        file: Mutex::new(file),
    }))?;
    log::set_max_level(level);
    log::info!("logging to {} at {}", path.display(), level);
    Ok(())
}
