use thiserror::Error;

/// Errors that can occur while decoding bencode.
///
/// Every variant carries the byte offset at which the problem was detected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input ended where a value was expected.
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEof { offset: usize },

    /// An integer has no terminating `e`.
    #[error("invalid integer at offset {offset}: missing ending e")]
    UnterminatedInteger { offset: usize },

    /// The text between `i` and `e` is not a decimal number.
    #[error("invalid integer at offset {offset}: not a number ({text:?})")]
    NotANumber { offset: usize, text: String },

    /// A list has no terminating `e`.
    #[error("invalid list at offset {offset}: missing ending e")]
    UnterminatedList { offset: usize },

    /// A dictionary has no terminating `e`.
    #[error("invalid dictionary at offset {offset}: missing ending e")]
    UnterminatedDictionary { offset: usize },

    /// A dictionary key decoded to something other than a string.
    #[error("dictionary key at offset {offset} must be a string")]
    NonStringKey { offset: usize },

    /// A string length prefix is not followed by `:`.
    #[error("invalid string at offset {offset}: missing colon")]
    MissingColon { offset: usize },

    /// A string length prefix is not a non-negative decimal number.
    #[error("invalid string length at offset {offset}")]
    InvalidLength { offset: usize },

    /// A string declares more bytes than remain in the input.
    #[error("invalid string at offset {offset}: length {declared} exceeds {available} remaining bytes")]
    TruncatedString {
        offset: usize,
        declared: usize,
        available: usize,
    },

    /// A value starts with a byte that is not `i`, `l`, `d` or a digit.
    #[error("invalid character {byte:?} at offset {offset}")]
    UnknownTag { offset: usize, byte: char },

    /// Lists and dictionaries are nested deeper than the configured limit.
    #[error("nesting deeper than {max_depth} levels at offset {offset}")]
    NestingTooDeep { offset: usize, max_depth: usize },
}

/// Errors that can occur while encoding bencode.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The destination writer failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
