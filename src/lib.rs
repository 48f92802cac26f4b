//! torrentjson - lossless conversion between bencode and JSON
//!
//! Torrent metainfo files are bencoded and mix readable fields with raw
//! binary ones such as piece hashes. This library decodes them into a
//! structured [`Value`], maps that value onto JSON without losing binary data
//! or oversized integers, and maps it back again.
//!
//! # Modules
//!
//! - [`bencode`] - BEP-3 bencode decoding and canonical encoding
//! - [`bridge`] - `@hex` / `@bigint` tagged mapping between values and JSON
//! - [`convert`] - whole-document conversion in either direction
//! - [`constants`] - thresholds and reserved key suffixes

pub mod bencode;
pub mod bridge;
pub mod constants;
pub mod convert;

pub use bencode::{decode, encode, Dictionary, EncodeError, ParseError, Value};
pub use bridge::{from_json_safe, to_json_safe, BridgeError};
pub use convert::{convert, ConvertError, ConvertOptions, Mode};
