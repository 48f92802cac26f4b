use thiserror::Error;

/// Errors that can occur when mapping JSON back onto bencode values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// A `@hex` field does not hold a string of hex digit pairs.
    #[error("invalid hex in field {key:?}: {reason}")]
    InvalidHex { key: String, reason: String },

    /// A `@bigint` field does not hold decimal integer text.
    #[error("invalid big integer in field {key:?}: {text}")]
    InvalidBigIntText { key: String, text: String },

    /// The JSON value has no bencode counterpart.
    #[error("unsupported type: {0}")]
    UnsupportedType(&'static str),
}
