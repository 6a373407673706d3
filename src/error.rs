//! Error types for MQ coding.

use thiserror::Error;

/// Error variants for MQ coding operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Decoding found a 0xFF byte followed by a marker-range byte before
    /// the end of the coded segment.
    #[error("invalid marker 0xFF{0:02X} in the stream")]
    InvalidMarker(u8),

    /// The byte stream rejected a read or truncation.
    #[error("stream access out of range: offset {offset}, length {len}")]
    StreamIo {
        /// Offset (or truncation count) that was requested.
        offset: usize,
        /// Stream length at the time of the access.
        len: usize,
    },
}

/// A specialized Result type for MQ coding operations.
pub type Result<T> = std::result::Result<T, Error>;
