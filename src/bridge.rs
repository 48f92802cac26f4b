//! Lossless mapping between bencode values and JSON.
//!
//! JSON has no byte strings and its numbers cannot carry arbitrarily large
//! integers. The bridge represents both as strings and marks them with a
//! reserved suffix on the containing object key:
//!
//! | Value | JSON field |
//! |-------|------------|
//! | [`Value::Binary`] under `pieces` | `"pieces@hex": "aabbccdd"` |
//! | [`Value::BigInteger`] under `size` | `"size@bigint": "12345678901234567890"` |
//!
//! Everything else maps directly: text to JSON strings, fast-path integers to
//! JSON numbers, lists to arrays and dictionaries to objects.
//!
//! Suffixes only exist on object keys. A binary string or big integer at the
//! top level or inside a list cannot be tagged, so it does not survive a
//! round trip; see [`to_json_safe`].
//!
//! # Examples
//!
//! ```
//! use torrentjson::bencode::{decode, encode};
//! use torrentjson::bridge::{from_json_safe, to_json_safe};
//!
//! let original = b"d4:infod6:lengthi1024e6:pieces4:\xaa\xbb\xcc\xddee";
//! let value = decode(original).unwrap();
//!
//! let json = to_json_safe(&value);
//! assert_eq!(json["info"]["pieces@hex"], "aabbccdd");
//! assert_eq!(json["info"]["length"], 1024);
//!
//! let back = from_json_safe(&json).unwrap();
//! assert_eq!(encode(&back).unwrap(), original);
//! ```
//!
//! [`Value::Binary`]: crate::bencode::Value::Binary
//! [`Value::BigInteger`]: crate::bencode::Value::BigInteger

mod error;
mod from_json;
mod to_json;

pub use error::BridgeError;
pub use from_json::from_json_safe;
pub use to_json::to_json_safe;

#[cfg(test)]
mod tests;
