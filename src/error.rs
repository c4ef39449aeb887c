use std::io;

use thiserror::Error as ThisError;

/// Everything that can go wrong while configuring the logger or emitting a
/// record.
#[derive(Debug, ThisError)]
pub enum Error {
    /// The global logger was already installed by an earlier `init` call.
    #[error("logger already initialized")]
    AlreadyInitialized,
    /// A record was emitted through the global entry points before any
    /// logger was installed.
    #[error("no sink configured; call init before logging")]
    SinkNotConfigured,
    /// A supplied field had an empty key. The whole record is rejected and
    /// nothing is written.
    #[error("field keys must not be empty")]
    EmptyKey,
    /// An unrecognized level token was parsed.
    #[error("unknown level token `{0}`")]
    UnknownLevel(String),
    /// The assembled record could not be serialized.
    #[error("failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),
    /// The sink refused the rendered line.
    #[error("failed to write record to sink: {0}")]
    Write(#[from] io::Error),
}
