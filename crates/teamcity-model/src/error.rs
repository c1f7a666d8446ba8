//! Errors surfaced by the record layer.

/// Errors that can occur while decoding or interpreting server records.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The response body did not match the expected record shape.
    #[error("failed to decode {target}: {source}")]
    Decode {
        /// Name of the record type that was being decoded.
        target: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A present timestamp was not in the server's compact ISO-8601 format.
    #[error("invalid timestamp {value:?}: {source}")]
    InvalidTimestamp {
        /// The token as received.
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
