use crate::bencode::{Dictionary, Value};
use crate::constants::{BIGINT_SUFFIX, HEX_SUFFIX};
use serde_json::{Map, Value as Json};

/// Maps a decoded value onto JSON.
///
/// Inside dictionaries, binary strings become `<key>@hex` fields holding
/// lowercase hex, and big integers become `<key>@bigint` fields holding their
/// decimal text. Lists are mapped element by element.
///
/// Binary strings and big integers that are not dictionary values have no key
/// to carry a suffix. They are written as plain hex or decimal strings and a
/// warning is logged, since they will read back as text.
///
/// # Examples
///
/// ```
/// use torrentjson::bencode::decode;
/// use torrentjson::bridge::to_json_safe;
///
/// let value = decode(b"d6:pieces3:\xff\x00\x01e").unwrap();
/// let json = to_json_safe(&value);
/// assert_eq!(json["pieces@hex"], "ff0001");
/// ```
pub fn to_json_safe(value: &Value) -> Json {
    match value {
        Value::List(items) => Json::Array(items.iter().map(to_json_safe).collect()),
        Value::Dict(dict) => Json::Object(dict_to_json(dict)),
        Value::Integer(i) => Json::from(*i),
        Value::Text(s) => Json::String(s.clone()),
        Value::Binary(b) => {
            tracing::warn!(
                "binary string of {} bytes outside a dictionary written as untagged hex",
                b.len()
            );
            Json::String(hex::encode(b))
        }
        Value::BigInteger(i) => {
            tracing::warn!("big integer {} outside a dictionary written as untagged text", i);
            Json::String(i.to_string())
        }
    }
}

fn dict_to_json(dict: &Dictionary) -> Map<String, Json> {
    let mut map = Map::with_capacity(dict.len());

    for (key, value) in dict {
        let (key, value) = match value {
            Value::Binary(b) => (format!("{key}{HEX_SUFFIX}"), Json::String(hex::encode(b))),
            Value::BigInteger(i) => (format!("{key}{BIGINT_SUFFIX}"), Json::String(i.to_string())),
            other => (key.clone(), to_json_safe(other)),
        };
        map.insert(key, value);
    }

    map
}
