//! Line-oriented logger behind the `log` facade.
//!
//! Every enabled record is formatted into a single line,
//! `"<secs>.<millis> [LEVEL]: <message>\n"`, and handed to a process-wide sink.
//! The sink defaults to stdout and can be swapped at any time, e.g. to capture
//! output in tests or forward it to another transport.

use lazy_static::lazy_static;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use parking_lot::RwLock;
use std::fmt;
use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

/// Longest entry handed to the sink, trailing newline included.
pub const MAX_ENTRY_LEN: usize = 4096;

/// Destination for formatted entries. Must be callable from any thread.
pub type LogFn = Box<dyn Fn(&str) + Send + Sync>;

lazy_static! {
    static ref SINK: RwLock<LogFn> = RwLock::new(Box::new(|entry: &str| print!("{entry}")) as LogFn);
}

struct SinkLogger;

static LOGGER: SinkLogger = SinkLogger;

impl Log for SinkLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let entry = format_entry(record.level(), *record.args());
        let sink = SINK.read();
        (*sink)(&entry);
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
    }
}

/// Install this logger as the `log` backend with the `Info` level.
///
/// Fails if another logger has already been installed.
pub fn init() -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(LevelFilter::Info);
    Ok(())
}

/// Like [`init`], but entries go to `sink` instead of stdout.
pub fn init_with_sink<F>(sink: F) -> Result<(), SetLoggerError>
where
    F: Fn(&str) + Send + Sync + 'static,
{
    init()?;
    set_sink(sink);
    Ok(())
}

/// Replace the sink. Entries being written concurrently finish on the old one.
pub fn set_sink<F>(sink: F)
where
    F: Fn(&str) + Send + Sync + 'static,
{
    // The old sink is dropped after the write lock is released.
    let old = std::mem::replace(&mut *SINK.write(), Box::new(sink) as LogFn);
    drop(old);
}

/// Records below `level` are discarded before they are formatted.
pub fn set_level(level: LevelFilter) {
    log::set_max_level(level);
}

/// Format one entry the way the logger hands it to the sink.
///
/// The result always ends in `'\n'` and is at most [`MAX_ENTRY_LEN`] bytes
/// long; longer messages are cut at a char boundary.
pub fn format_entry(level: Level, args: fmt::Arguments<'_>) -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();

    let mut entry = format!(
        "{}.{:03} [{}]: {}",
        now.as_secs(),
        now.subsec_millis(),
        level,
        args
    );

    let limit = MAX_ENTRY_LEN - 1;
    if entry.len() > limit {
        let mut end = limit;
        while !entry.is_char_boundary(end) {
            end -= 1;
        }
        entry.truncate(end);
    }

    entry.push('\n');
    entry
}
