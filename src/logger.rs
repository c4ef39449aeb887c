//! Record assembly and delivery.

use std::io::{self, Write};
use std::panic::Location;
use std::process;
use std::sync::Mutex;

use serde_json::{Map, Value as Json};

use crate::{Error, Field, Level};

type Sink = Box<dyn Write + Send>;
type TerminateHook = Box<dyn Fn(i32) + Send + Sync>;

/// A logger owning its sink.
///
/// Every emission serializes one record to a single JSON line and writes
/// it to the sink under an internal lock, so a `Logger` shared between
/// threads never interleaves records. See [`Builder`] for construction.
pub struct Logger {
    sink: Mutex<Sink>,
    terminate: TerminateHook,
}

impl Logger {
    /// Emits one record at `level` carrying `fields` in the given order.
    ///
    /// The rendered line always contains `level` and `timestamp` entries
    /// first, then `file` and `line` when the level is [`Level::Debug`],
    /// then the caller's fields in call order. Duplicate keys keep their
    /// first position and their last value. Returns the number of bytes
    /// written, including the trailing newline.
    ///
    /// A successfully written [`Level::Fatal`] record then invokes the
    /// terminate hook, which by default exits the process with status 1.
    #[track_caller]
    pub fn log(&self, level: Level, fields: Vec<Field>) -> Result<usize, Error> {
        let written = self.write_record(level, Location::caller(), fields)?;
        if level == Level::Fatal {
            (self.terminate)(1);
        }
        Ok(written)
    }

    /// Emits a `trace` record.
    #[track_caller]
    pub fn trace(&self, fields: Vec<Field>) -> Result<usize, Error> {
        self.log(Level::Trace, fields)
    }

    /// Emits a `debug` record, augmented with the caller's `file` and
    /// `line`.
    #[track_caller]
    pub fn debug(&self, fields: Vec<Field>) -> Result<usize, Error> {
        self.log(Level::Debug, fields)
    }

    /// Emits an `info` record.
    #[track_caller]
    pub fn info(&self, fields: Vec<Field>) -> Result<usize, Error> {
        self.log(Level::Info, fields)
    }

    /// Emits a `warn` record.
    #[track_caller]
    pub fn warn(&self, fields: Vec<Field>) -> Result<usize, Error> {
        self.log(Level::Warn, fields)
    }

    /// Emits an `error` record.
    #[track_caller]
    pub fn error(&self, fields: Vec<Field>) -> Result<usize, Error> {
        self.log(Level::Error, fields)
    }

    /// Emits a `fatal` record, then invokes the terminate hook once the
    /// record has reached the sink.
    #[track_caller]
    pub fn fatal(&self, fields: Vec<Field>) -> Result<usize, Error> {
        self.log(Level::Fatal, fields)
    }

    fn write_record(
        &self,
        level: Level,
        caller: &Location<'_>,
        fields: Vec<Field>,
    ) -> Result<usize, Error> {
        if fields.iter().any(|f| f.key().is_empty()) {
            return Err(Error::EmptyKey);
        }

        let mut doc = Map::with_capacity(fields.len() + 4);
        doc.insert("level".into(), Json::String(level.as_str().to_owned()));
        doc.insert("timestamp".into(), timestamp());
        if level == Level::Debug {
            doc.insert("file".into(), Json::String(caller.file().to_owned()));
            doc.insert("line".into(), Json::from(caller.line()));
        }
        for field in fields {
            let (key, value) = field.into_parts();
            doc.insert(key, value.into_json());
        }

        let mut line = serde_json::to_vec(&Json::Object(doc))?;
        line.push(b'\n');

        let mut sink = match self.sink.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        sink.write_all(&line)?;
        sink.flush()?;
        Ok(line.len())
    }
}

/// Yields a builder for a [`Logger`].
///
/// The sink defaults to stderr until one of [`Builder::sink`],
/// [`Builder::stdout`], or [`Builder::stderr`] is called.
pub fn builder() -> Builder {
    Builder::new()
}

/// Configures and constructs a [`Logger`], or installs it globally.
pub struct Builder {
    sink: Option<Sink>,
    terminate: Option<TerminateHook>,
}

impl Builder {
    pub fn new() -> Builder {
        Builder {
            sink: None,
            terminate: None,
        }
    }

    /// Sets the destination records are written to.
    pub fn sink(mut self, sink: impl Write + Send + 'static) -> Builder {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Writes records to stdout.
    pub fn stdout(self) -> Builder {
        self.sink(io::stdout())
    }

    /// Writes records to stderr.
    pub fn stderr(self) -> Builder {
        self.sink(io::stderr())
    }

    /// Replaces the effect run after a `fatal` record is written.
    ///
    /// Defaults to `std::process::exit` with the given status. Overriding
    /// it lets tests observe fatal records without subprocess isolation.
    pub fn terminate_with(mut self, hook: impl Fn(i32) + Send + Sync + 'static) -> Builder {
        self.terminate = Some(Box::new(hook));
        self
    }

    /// Constructs the logger.
    pub fn build(self) -> Logger {
        Logger {
            sink: Mutex::new(self.sink.unwrap_or_else(|| Box::new(io::stderr()))),
            terminate: self
                .terminate
                .unwrap_or_else(|| Box::new(|status| process::exit(status))),
        }
    }

    /// Installs the logger as the process-wide logger used by the
    /// module-level emission functions.
    ///
    /// # panics
    ///
    /// Panics if a global logger has already been installed.
    pub fn init(self) {
        self.try_init().unwrap()
    }

    /// Installs the logger globally, failing with
    /// [`Error::AlreadyInitialized`] if one is already installed.
    pub fn try_init(self) -> Result<(), Error> {
        crate::install(self.build())
    }
}

impl Default for Builder {
    fn default() -> Builder {
        Builder::new()
    }
}

#[cfg(not(feature = "iso-timestamps"))]
fn timestamp() -> Json {
    let secs = std::time::UNIX_EPOCH
        .elapsed()
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    Json::from(secs)
}

#[cfg(feature = "iso-timestamps")]
fn timestamp() -> Json {
    Json::String(chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true))
}
