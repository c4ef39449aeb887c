//! `json_field_logger` is a structured logger: every record is a severity
//! level plus an ordered list of typed [`Field`]s, rendered as one JSON
//! object per line.
//!
//! ```
//! use json_field_logger::{Field, Level};
//!
//! let logger = json_field_logger::builder().sink(Vec::<u8>::new()).build();
//! logger.log(
//!     Level::Info,
//!     vec![
//!         Field::str("msg", "records added successfully"),
//!         Field::i32("count", 2),
//!     ],
//! )?;
//! # Ok::<(), json_field_logger::Error>(())
//! ```
//!
//! Each line carries `level` and `timestamp` first, then the caller's
//! fields in call order. `debug` records additionally carry the caller's
//! `file` and `line`. A `fatal` record is written to the sink and then
//! terminates the process with status 1 (override with
//! [`Builder::terminate_with`]).
//!
//! No level is ever suppressed: there is no minimum-level filter, every
//! emission reaches the sink.
//!
//! ## features
//!
//! * `iso-timestamps`
//!
//! By default the `timestamp` field holds the current unix epoch time in
//! seconds. You can replace this with ISO-8601 timestamps by enabling the
//! `iso-timestamps` feature. Note, this will add the `chrono` crate to
//! your dependency tree.
//!
//! ```toml
//! [dependencies]
//! json_field_logger = { version = "0.1", features = ["iso-timestamps"] }
//! ```

mod error;
mod fields;
mod level;
mod logger;

pub use crate::error::Error;
pub use crate::fields::{Field, Value};
pub use crate::level::Level;
pub use crate::logger::{builder, Builder, Logger};

use std::io::Write;
use std::sync::OnceLock;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Installs a logger writing to `sink` as the process-wide logger.
///
/// Applications should ensure this fn gets called once and only once per
/// application lifetime.
///
/// # panics
///
/// Panics if a logger has already been configured
pub fn init(sink: impl Write + Send + 'static) {
    try_init(sink).unwrap()
}

/// Installs a logger writing to `sink` as the process-wide logger.
///
/// Will yield [`Error::AlreadyInitialized`] when a logger has already
/// been configured
pub fn try_init(sink: impl Write + Send + 'static) -> Result<(), Error> {
    builder().sink(sink).try_init()
}

pub(crate) fn install(logger: Logger) -> Result<(), Error> {
    LOGGER.set(logger).map_err(|_| Error::AlreadyInitialized)
}

fn global() -> Result<&'static Logger, Error> {
    LOGGER.get().ok_or(Error::SinkNotConfigured)
}

/// Emits one record through the process-wide logger.
///
/// Fails with [`Error::SinkNotConfigured`] until [`init`], [`try_init`],
/// or [`Builder::init`] has installed one.
#[track_caller]
pub fn log(level: Level, fields: Vec<Field>) -> Result<usize, Error> {
    global()?.log(level, fields)
}

/// Emits a `trace` record through the process-wide logger.
#[track_caller]
pub fn trace(fields: Vec<Field>) -> Result<usize, Error> {
    log(Level::Trace, fields)
}

/// Emits a `debug` record through the process-wide logger.
#[track_caller]
pub fn debug(fields: Vec<Field>) -> Result<usize, Error> {
    log(Level::Debug, fields)
}

/// Emits an `info` record through the process-wide logger.
#[track_caller]
pub fn info(fields: Vec<Field>) -> Result<usize, Error> {
    log(Level::Info, fields)
}

/// Emits a `warn` record through the process-wide logger.
#[track_caller]
pub fn warn(fields: Vec<Field>) -> Result<usize, Error> {
    log(Level::Warn, fields)
}

/// Emits an `error` record through the process-wide logger.
#[track_caller]
pub fn error(fields: Vec<Field>) -> Result<usize, Error> {
    log(Level::Error, fields)
}

/// Emits a `fatal` record through the process-wide logger, terminating
/// the process once the record has reached the sink.
#[track_caller]
pub fn fatal(fields: Vec<Field>) -> Result<usize, Error> {
    log(Level::Fatal, fields)
}
