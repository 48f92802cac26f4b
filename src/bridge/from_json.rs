use super::error::BridgeError;
use crate::bencode::{parse_big_integer, Dictionary, Value};
use crate::constants::{BIGINT_SUFFIX, HEX_SUFFIX};
use bytes::Bytes;
use num_bigint::BigInt;
use serde_json::{Map, Number, Value as Json};

/// Maps JSON produced by [`to_json_safe`](super::to_json_safe) back onto
/// bencode values.
///
/// Object keys ending in `@bigint` or `@hex` lose the suffix and their values
/// are decoded into [`Value::BigInteger`] and [`Value::Binary`]. When two keys
/// collapse to the same name, the later one wins.
///
/// # Errors
///
/// - [`BridgeError::InvalidHex`] / [`BridgeError::InvalidBigIntText`] when a
///   suffixed value cannot be decoded.
/// - [`BridgeError::UnsupportedType`] for `null`, booleans and non-integral
///   numbers, which bencode cannot represent.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use torrentjson::bridge::from_json_safe;
///
/// let value = from_json_safe(&json!({"pieces@hex": "aabb", "length": 3})).unwrap();
/// assert_eq!(value.get("pieces").and_then(|v| v.as_bytes()).map(|b| b.len()), Some(2));
/// assert_eq!(value.get("length").and_then(|v| v.as_integer()), Some(3));
/// ```
pub fn from_json_safe(json: &Json) -> Result<Value, BridgeError> {
    match json {
        Json::Array(items) => items
            .iter()
            .map(from_json_safe)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::List),
        Json::Object(map) => object_from_json(map).map(Value::Dict),
        Json::String(s) => Ok(Value::Text(s.clone())),
        Json::Number(n) => number_from_json(n),
        Json::Bool(_) => Err(BridgeError::UnsupportedType("boolean")),
        Json::Null => Err(BridgeError::UnsupportedType("null")),
    }
}

fn object_from_json(map: &Map<String, Json>) -> Result<Dictionary, BridgeError> {
    let mut dict = Dictionary::with_capacity(map.len());

    for (key, value) in map {
        let (name, value) = if let Some(name) = key.strip_suffix(BIGINT_SUFFIX) {
            (name, Value::BigInteger(parse_bigint(key, value)?))
        } else if let Some(name) = key.strip_suffix(HEX_SUFFIX) {
            (name, Value::Binary(parse_hex(key, value)?))
        } else {
            (key.as_str(), from_json_safe(value)?)
        };
        dict.insert(name.to_owned(), value);
    }

    Ok(dict)
}

fn number_from_json(n: &Number) -> Result<Value, BridgeError> {
    if let Some(i) = n.as_i64() {
        Ok(Value::Integer(i))
    } else if let Some(u) = n.as_u64() {
        Ok(Value::BigInteger(BigInt::from(u)))
    } else {
        Err(BridgeError::UnsupportedType("non-integral number"))
    }
}

fn parse_bigint(key: &str, value: &Json) -> Result<BigInt, BridgeError> {
    let invalid = || BridgeError::InvalidBigIntText {
        key: key.to_owned(),
        text: value.to_string(),
    };

    match value {
        Json::String(s) => parse_big_integer(s).ok_or_else(invalid),
        Json::Number(n) if n.is_i64() || n.is_u64() => {
            parse_big_integer(&n.to_string()).ok_or_else(invalid)
        }
        _ => Err(invalid()),
    }
}

fn parse_hex(key: &str, value: &Json) -> Result<Bytes, BridgeError> {
    let invalid = |reason: String| BridgeError::InvalidHex {
        key: key.to_owned(),
        reason,
    };

    let Json::String(s) = value else {
        return Err(invalid(format!("expected a string, got {value}")));
    };

    hex::decode(s)
        .map(Bytes::from)
        .map_err(|e| invalid(e.to_string()))
}
