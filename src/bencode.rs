//! Bencode encoding and decoding ([BEP-3]).
//!
//! Bencode is the serialization format of `.torrent` files. It has four data
//! types:
//!
//! | Type | Format | Example |
//! |------|--------|---------|
//! | Integer | `i<number>e` | `i42e` → 42 |
//! | Byte String | `<length>:<data>` | `4:spam` → "spam" |
//! | List | `l<items>e` | `l4:spami42ee` → ["spam", 42] |
//! | Dictionary | `d<key><value>...e` | `d3:foo3:bare` → {"foo": "bar"} |
//!
//! Decoding splits these into the six variants of [`Value`] so that the JSON
//! bridge can keep binary data and oversized integers intact:
//!
//! - Integer text longer than
//!   [`FAST_INTEGER_MAX_DIGITS`](crate::constants::FAST_INTEGER_MAX_DIGITS)
//!   characters becomes [`Value::BigInteger`], shorter text [`Value::Integer`].
//! - A byte string made only of printable ASCII, tab, CR and LF becomes
//!   [`Value::Text`]; anything else becomes [`Value::Binary`].
//!
//! Decoding is lenient about integer spelling: leading zeros and `-0` are
//! accepted and normalized. Encoding is canonical: dictionary keys are always
//! written sorted by their bytes, whatever order they were decoded in.
//!
//! # Examples
//!
//! ```
//! use torrentjson::bencode::{decode, encode, Value};
//!
//! let value = decode(b"d4:spaml1:a1:bee").unwrap();
//! let list = value.get("spam").and_then(|v| v.as_list()).unwrap();
//! assert_eq!(list, &vec![Value::text("a"), Value::text("b")]);
//!
//! // Keys come back sorted.
//! let value = decode(b"d1:bi1e1:ai2ee").unwrap();
//! assert_eq!(encode(&value).unwrap(), b"d1:ai2e1:bi1ee");
//! ```
//!
//! # Error Handling
//!
//! Decoding fails with a [`ParseError`] that records the byte offset of the
//! problem:
//!
//! - [`ParseError::UnterminatedInteger`], [`ParseError::UnterminatedList`],
//!   [`ParseError::UnterminatedDictionary`] - missing closing `e`
//! - [`ParseError::TruncatedString`] - declared length runs past the input
//! - [`ParseError::NestingTooDeep`] - recursion limit exceeded
//!
//! Trailing bytes after the top-level value are not an error; [`decode`] logs
//! a warning and returns the value.
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod decode;
mod encode;
mod error;
mod value;

pub use decode::{
    classify, decode, decode_prefix, decode_prefix_with, decode_with, DecodeOptions,
};
pub use encode::{encode, encode_to};
pub use error::{EncodeError, ParseError};
pub use value::{Dictionary, Value};
pub(crate) use value::parse_big_integer;
