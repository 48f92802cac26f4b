use super::error::EncodeError;
use super::value::Value;
use std::io::Write;

/// Encodes a value to a byte vector in canonical form.
///
/// - Integers: `i<number>e`
/// - Text and binary strings: `<length>:<data>`
/// - Lists: `l<items>e`, in order
/// - Dictionaries: `d<key><value>...e`, keys sorted by their bytes
///
/// # Errors
///
/// Returns an error if writing to the internal buffer fails.
///
/// # Examples
///
/// ```
/// use torrentjson::bencode::{encode, Dictionary, Value};
///
/// let mut dict = Dictionary::new();
/// dict.insert("b".to_string(), Value::Integer(1));
/// dict.insert("a".to_string(), Value::Integer(2));
///
/// let encoded = encode(&Value::Dict(dict)).unwrap();
/// assert_eq!(encoded, b"d1:ai2e1:bi1ee");
/// ```
pub fn encode(value: &Value) -> Result<Vec<u8>, EncodeError> {
    let mut buf = Vec::new();
    encode_to(value, &mut buf)?;
    Ok(buf)
}

/// Encodes a value into `writer`.
pub fn encode_to<W: Write>(value: &Value, writer: &mut W) -> Result<(), EncodeError> {
    match value {
        Value::Integer(i) => {
            write!(writer, "i{}e", i)?;
        }
        Value::BigInteger(i) => {
            write!(writer, "i{}e", i)?;
        }
        Value::Text(s) => {
            write_bytes(s.as_bytes(), writer)?;
        }
        Value::Binary(b) => {
            write_bytes(b, writer)?;
        }
        Value::List(l) => {
            writer.write_all(b"l")?;
            for item in l {
                encode_to(item, writer)?;
            }
            writer.write_all(b"e")?;
        }
        Value::Dict(d) => {
            let mut entries: Vec<_> = d.iter().collect();
            entries.sort_unstable_by(|(a, _), (b, _)| a.as_bytes().cmp(b.as_bytes()));

            writer.write_all(b"d")?;
            for (key, val) in entries {
                write_bytes(key.as_bytes(), writer)?;
                encode_to(val, writer)?;
            }
            writer.write_all(b"e")?;
        }
    }
    Ok(())
}

fn write_bytes<W: Write>(data: &[u8], writer: &mut W) -> Result<(), EncodeError> {
    write!(writer, "{}:", data.len())?;
    writer.write_all(data)?;
    Ok(())
}
