//! Error types for cellid

use thiserror::Error;

/// Error types for the cellid library.
#[derive(Debug, Error)]
pub enum Error {
    /// The input could not be decoded as hexadecimal.
    #[error("{0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// The decoded input holds fewer octets than a Cell Global Identity needs.
    #[error(
        "Hexadecimal value must contain {expected} bytes! Got only {actual} from value: {value}"
    )]
    TooShort {
        /// Number of octets required
        expected: usize,
        /// Number of octets received
        actual: usize,
        /// The received octets, hex-encoded
        value: String,
    },

    /// File I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing or rendering errors.
    #[error("YAML error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// JSON rendering errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns true if the error was caused by the caller's input rather than
    /// by configuration or I/O.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Error::InvalidHex(_) | Error::TooShort { .. })
    }
}
