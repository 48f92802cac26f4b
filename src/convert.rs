//! Whole-document conversion between bencode and JSON.
//!
//! [`convert`] runs one direction of the pipeline over an in-memory buffer:
//!
//! - [`Mode::ToJson`]: bencode bytes → [`decode`] → [`to_json_safe`] → JSON text
//! - [`Mode::ToBencode`]: JSON text → [`from_json_safe`] → [`encode`] → bencode bytes
//!
//! # Examples
//!
//! ```
//! use torrentjson::convert::{convert, ConvertOptions, Mode};
//!
//! let json = convert(b"d3:fooi1ee", &ConvertOptions::new(Mode::ToJson).compact(true)).unwrap();
//! assert_eq!(json, br#"{"foo":1}"#);
//!
//! let bencode = convert(&json, &ConvertOptions::new(Mode::ToBencode)).unwrap();
//! assert_eq!(bencode, b"d3:fooi1ee");
//! ```

use thiserror::Error;

use crate::bencode::{decode_with, encode, DecodeOptions, EncodeError, ParseError};
use crate::bridge::{from_json_safe, to_json_safe, BridgeError};
use crate::constants::DEFAULT_MAX_DEPTH;

/// Conversion direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Bencode in, JSON out.
    ToJson,
    /// JSON in, bencode out.
    ToBencode,
}

/// Settings for a single conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    pub mode: Mode,
    /// Nesting limit applied when decoding bencode.
    pub max_depth: usize,
    /// Emit JSON on a single line instead of indented.
    pub compact: bool,
}

impl ConvertOptions {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            max_depth: DEFAULT_MAX_DEPTH,
            compact: false,
        }
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }
}

/// Errors that abort a conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input is not valid bencode.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The bencode output could not be produced.
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// The JSON uses the reserved suffixes incorrectly or holds an
    /// unsupported type.
    #[error(transparent)]
    Bridge(#[from] BridgeError),

    /// The input is not valid JSON, or the output could not be serialized.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Converts `input` in the direction given by `options.mode`.
pub fn convert(input: &[u8], options: &ConvertOptions) -> Result<Vec<u8>, ConvertError> {
    match options.mode {
        Mode::ToJson => bencode_to_json(input, options),
        Mode::ToBencode => json_to_bencode(input),
    }
}

fn bencode_to_json(input: &[u8], options: &ConvertOptions) -> Result<Vec<u8>, ConvertError> {
    let decode_options = DecodeOptions {
        max_depth: options.max_depth,
    };
    let value = decode_with(input, &decode_options)?;
    let json = to_json_safe(&value);

    let output = if options.compact {
        serde_json::to_vec(&json)?
    } else {
        serde_json::to_vec_pretty(&json)?
    };

    tracing::debug!(
        "converted {} bytes of bencode ({}) to {} bytes of JSON",
        input.len(),
        value.kind(),
        output.len()
    );
    Ok(output)
}

fn json_to_bencode(input: &[u8]) -> Result<Vec<u8>, ConvertError> {
    let json: serde_json::Value = serde_json::from_slice(input)?;
    let value = from_json_safe(&json)?;
    let output = encode(&value)?;

    tracing::debug!(
        "converted {} bytes of JSON ({}) to {} bytes of bencode",
        input.len(),
        value.kind(),
        output.len()
    );
    Ok(output)
}
