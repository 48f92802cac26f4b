use bytes::Bytes;
use num_bigint::BigInt;
use serde_json::json;

use super::*;
use crate::bencode::{decode, encode, Dictionary, Value};

fn big(text: &str) -> Value {
    Value::BigInteger(text.parse::<BigInt>().unwrap())
}

fn dict(entries: Vec<(&str, Value)>) -> Value {
    Value::Dict(
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect::<Dictionary>(),
    )
}

#[test]
fn test_binary_field_is_hex_tagged() {
    let value = dict(vec![("pieces", Value::binary(&[0xff, 0x00, 0x01]))]);
    assert_eq!(to_json_safe(&value), json!({"pieces@hex": "ff0001"}));
}

#[test]
fn test_big_integer_field_is_tagged() {
    let value = dict(vec![("size", big("1234567890123456789012"))]);
    assert_eq!(
        to_json_safe(&value),
        json!({"size@bigint": "1234567890123456789012"})
    );
}

#[test]
fn test_plain_fields_pass_through() {
    let value = dict(vec![
        ("announce", Value::text("http://example.com/a")),
        ("length", Value::Integer(1024)),
        ("tiers", Value::List(vec![Value::text("a"), Value::Integer(1)])),
    ]);
    assert_eq!(
        to_json_safe(&value),
        json!({
            "announce": "http://example.com/a",
            "length": 1024,
            "tiers": ["a", 1]
        })
    );
}

#[test]
fn test_nested_dicts_are_tagged() {
    let value = dict(vec![(
        "files",
        Value::List(vec![dict(vec![("md5sum", Value::binary(b"\x01\x02"))])]),
    )]);
    assert_eq!(
        to_json_safe(&value),
        json!({"files": [{"md5sum@hex": "0102"}]})
    );
}

#[test]
fn test_key_order_is_preserved() {
    let value = dict(vec![("b", Value::Integer(1)), ("a", Value::Integer(2))]);
    let json = to_json_safe(&value);
    let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, ["b", "a"]);
}

#[test]
fn test_untagged_scalars_outside_dicts() {
    assert_eq!(to_json_safe(&Value::binary(b"\xaa")), json!("aa"));
    assert_eq!(to_json_safe(&big("12345678901234567")), json!("12345678901234567"));
    assert_eq!(
        to_json_safe(&Value::List(vec![Value::binary(b"\x00")])),
        json!(["00"])
    );

    // They come back as text, not as the original variants.
    assert_eq!(from_json_safe(&json!("aa")).unwrap(), Value::text("aa"));
}

#[test]
fn test_from_json_strips_suffixes() {
    let value = from_json_safe(&json!({
        "pieces@hex": "AABB",
        "size@bigint": "-99999999999999999999",
        "name": "x"
    }))
    .unwrap();

    assert_eq!(
        value,
        dict(vec![
            ("pieces", Value::Binary(Bytes::from_static(b"\xaa\xbb"))),
            ("size", big("-99999999999999999999")),
            ("name", Value::text("x")),
        ])
    );
}

#[test]
fn test_bigint_accepts_json_integer() {
    let value = from_json_safe(&json!({"n@bigint": 5})).unwrap();
    assert_eq!(value.get("n"), Some(&big("5")));
}

#[test]
fn test_from_json_numbers() {
    assert_eq!(from_json_safe(&json!(-7)).unwrap(), Value::Integer(-7));
    assert_eq!(
        from_json_safe(&json!(u64::MAX)).unwrap(),
        big("18446744073709551615")
    );
}

#[test]
fn test_from_json_invalid_hex() {
    let err = from_json_safe(&json!({"pieces@hex": "abc"})).unwrap_err();
    assert!(matches!(err, BridgeError::InvalidHex { ref key, .. } if key == "pieces@hex"));

    let err = from_json_safe(&json!({"pieces@hex": "zz"})).unwrap_err();
    assert!(matches!(err, BridgeError::InvalidHex { .. }));

    let err = from_json_safe(&json!({"pieces@hex": 12})).unwrap_err();
    assert!(matches!(err, BridgeError::InvalidHex { .. }));
}

#[test]
fn test_from_json_invalid_bigint() {
    let err = from_json_safe(&json!({"size@bigint": "12a"})).unwrap_err();
    assert_eq!(
        err,
        BridgeError::InvalidBigIntText {
            key: "size@bigint".to_string(),
            text: "\"12a\"".to_string()
        }
    );

    let err = from_json_safe(&json!({"size@bigint": 1.5})).unwrap_err();
    assert!(matches!(err, BridgeError::InvalidBigIntText { .. }));
}

#[test]
fn test_bigint_rejects_separators_and_padding() {
    for text in [" 1_2 ", "1_000", " 12", "12 ", "", "-", "0x10"] {
        let err = from_json_safe(&json!({"n@bigint": text})).unwrap_err();
        assert!(
            matches!(err, BridgeError::InvalidBigIntText { ref key, .. } if key == "n@bigint"),
            "accepted {:?}",
            text
        );
    }
    assert_eq!(
        from_json_safe(&json!({"n@bigint": "-00123"})).unwrap().get("n"),
        Some(&big("-123"))
    );
}

#[test]
fn test_from_json_unsupported_types() {
    assert_eq!(
        from_json_safe(&json!({"private": true})),
        Err(BridgeError::UnsupportedType("boolean"))
    );
    assert_eq!(
        from_json_safe(&json!([null])),
        Err(BridgeError::UnsupportedType("null"))
    );
    assert_eq!(
        from_json_safe(&json!(1.5)),
        Err(BridgeError::UnsupportedType("non-integral number"))
    );
}

#[test]
fn test_suffix_collision_last_wins() {
    let value = from_json_safe(&json!({"a": "text", "a@hex": "00"})).unwrap();
    let d = value.as_dict().unwrap();
    assert_eq!(d.len(), 1);
    assert_eq!(d.get("a"), Some(&Value::binary(b"\x00")));
}

#[test]
fn test_json_roundtrip() {
    let value = dict(vec![
        ("announce", Value::text("udp://tracker:80")),
        ("creation date", Value::Integer(1_700_000_000)),
        ("huge", big("123456789012345678901234567890")),
        (
            "info",
            dict(vec![
                ("pieces", Value::binary(&[0u8, 1, 2, 250, 251, 252])),
                ("name", Value::text("file.iso")),
                (
                    "files",
                    Value::List(vec![dict(vec![
                        ("length", Value::Integer(1)),
                        ("path", Value::List(vec![Value::text("a"), Value::text("b")])),
                        ("sha1", Value::binary(&[0x99; 20])),
                    ])]),
                ),
            ]),
        ),
    ]);

    assert_eq!(from_json_safe(&to_json_safe(&value)).unwrap(), value);
}

#[test]
fn test_torrent_end_to_end() {
    let original = b"d8:announce20:http://example.com/a4:infod6:lengthi1024e6:pieces4:\xaa\xbb\xcc\xddee";
    let decoded = decode(original).unwrap();
    let json = to_json_safe(&decoded);

    assert_eq!(json["announce"], "http://example.com/a");
    assert_eq!(json["info"]["length"], 1024);
    assert_eq!(json["info"]["pieces@hex"], "aabbccdd");

    let text = serde_json::to_string_pretty(&json).unwrap();
    let reparsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    let back = from_json_safe(&reparsed).unwrap();
    let encoded = encode(&back).unwrap();

    assert_eq!(decode(&encoded).unwrap(), decoded);
    assert_eq!(encoded, original);
}

#[test]
fn test_binary_pieces_roundtrip_to_bencode() {
    let decoded = decode(b"d6:pieces3:\xff\x00\x01e").unwrap();
    let json = to_json_safe(&decoded);
    assert_eq!(json, json!({"pieces@hex": "ff0001"}));

    let encoded = encode(&from_json_safe(&json).unwrap()).unwrap();
    assert_eq!(encoded, b"d6:pieces3:\xff\x00\x01e");
}
