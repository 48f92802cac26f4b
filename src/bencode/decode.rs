use super::error::ParseError;
use super::value::{parse_big_integer, Dictionary, Value};
use crate::constants::{DEFAULT_MAX_DEPTH, FAST_INTEGER_MAX_DIGITS};
use bytes::Bytes;

/// Decoder settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Maximum nesting of lists and dictionaries.
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Decodes a complete bencode document with the default options.
///
/// Bytes left over after the top-level value are logged as a warning and
/// otherwise ignored.
///
/// # Examples
///
/// ```
/// use torrentjson::bencode::{decode, Value};
///
/// assert_eq!(decode(b"i42e").unwrap(), Value::Integer(42));
/// assert_eq!(decode(b"4:spam").unwrap(), Value::text("spam"));
/// assert!(decode(b"i42").is_err());
/// ```
pub fn decode(data: &[u8]) -> Result<Value, ParseError> {
    decode_with(data, &DecodeOptions::default())
}

/// Decodes a complete bencode document.
pub fn decode_with(data: &[u8], options: &DecodeOptions) -> Result<Value, ParseError> {
    let (value, end) = decode_prefix_with(data, 0, options)?;

    if end != data.len() {
        tracing::warn!(
            "extra data after bencode object: {} trailing bytes at offset {}",
            data.len() - end,
            end
        );
    }

    Ok(value)
}

/// Decodes one value starting at `start`, returning it with the offset just
/// past its last byte.
pub fn decode_prefix(data: &[u8], start: usize) -> Result<(Value, usize), ParseError> {
    decode_prefix_with(data, start, &DecodeOptions::default())
}

/// Like [`decode_prefix`], with explicit options.
pub fn decode_prefix_with(
    data: &[u8],
    start: usize,
    options: &DecodeOptions,
) -> Result<(Value, usize), ParseError> {
    let mut decoder = Decoder {
        data,
        pos: start,
        max_depth: options.max_depth,
    };
    let value = decoder.value(0)?;
    Ok((value, decoder.pos))
}

struct Decoder<'a> {
    data: &'a [u8],
    pos: usize,
    max_depth: usize,
}

impl Decoder<'_> {
    fn value(&mut self, depth: usize) -> Result<Value, ParseError> {
        let Some(&tag) = self.data.get(self.pos) else {
            return Err(ParseError::UnexpectedEof { offset: self.pos });
        };

        match tag {
            b'i' => self.integer(),
            b'l' => self.list(depth),
            b'd' => self.dict(depth),
            b'0'..=b'9' => self.string(),
            c => Err(ParseError::UnknownTag {
                offset: self.pos,
                byte: c as char,
            }),
        }
    }

    fn enter(&self, depth: usize) -> Result<(), ParseError> {
        if depth >= self.max_depth {
            return Err(ParseError::NestingTooDeep {
                offset: self.pos,
                max_depth: self.max_depth,
            });
        }
        Ok(())
    }

    fn integer(&mut self) -> Result<Value, ParseError> {
        let offset = self.pos;
        let start = offset + 1;
        let end = self
            .find(b'e', start)
            .ok_or(ParseError::UnterminatedInteger { offset })?;

        let raw = &self.data[start..end];
        let not_a_number = || ParseError::NotANumber {
            offset,
            text: String::from_utf8_lossy(raw).into_owned(),
        };
        let text = std::str::from_utf8(raw).map_err(|_| not_a_number())?;

        let value = if text.len() > FAST_INTEGER_MAX_DIGITS {
            Value::BigInteger(parse_big_integer(text).ok_or_else(not_a_number)?)
        } else {
            Value::Integer(text.parse::<i64>().map_err(|_| not_a_number())?)
        };

        self.pos = end + 1;
        Ok(value)
    }

    fn string(&mut self) -> Result<Value, ParseError> {
        let raw = self.raw_string()?;
        Ok(classify(raw))
    }

    fn raw_string(&mut self) -> Result<&[u8], ParseError> {
        let offset = self.pos;
        let colon = self
            .find(b':', offset)
            .ok_or(ParseError::MissingColon { offset })?;

        let len: usize = std::str::from_utf8(&self.data[offset..colon])
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or(ParseError::InvalidLength { offset })?;

        let start = colon + 1;
        let available = self.data.len() - start;
        if len > available {
            return Err(ParseError::TruncatedString {
                offset,
                declared: len,
                available,
            });
        }

        self.pos = start + len;
        Ok(&self.data[start..start + len])
    }

    fn list(&mut self, depth: usize) -> Result<Value, ParseError> {
        self.enter(depth)?;
        let offset = self.pos;
        self.pos += 1;
        let mut list = Vec::new();

        while self.pos < self.data.len() && self.data[self.pos] != b'e' {
            list.push(self.value(depth + 1)?);
        }

        if self.pos >= self.data.len() {
            return Err(ParseError::UnterminatedList { offset });
        }

        self.pos += 1;
        Ok(Value::List(list))
    }

    fn dict(&mut self, depth: usize) -> Result<Value, ParseError> {
        self.enter(depth)?;
        let offset = self.pos;
        self.pos += 1;
        let mut dict = Dictionary::new();

        while self.pos < self.data.len() && self.data[self.pos] != b'e' {
            let key_offset = self.pos;
            let key = match self.value(depth + 1)? {
                Value::Text(s) => s,
                Value::Binary(b) => String::from_utf8_lossy(&b).into_owned(),
                _ => return Err(ParseError::NonStringKey { offset: key_offset }),
            };

            let value = self.value(depth + 1)?;
            // A repeated key replaces the earlier value in its original slot.
            dict.insert(key, value);
        }

        if self.pos >= self.data.len() {
            return Err(ParseError::UnterminatedDictionary { offset });
        }

        self.pos += 1;
        Ok(Value::Dict(dict))
    }

    fn find(&self, needle: u8, from: usize) -> Option<usize> {
        self.data
            .get(from..)?
            .iter()
            .position(|&b| b == needle)
            .map(|i| from + i)
    }
}

/// Classifies a raw byte string as text or binary.
///
/// Bytes are text only when they are valid UTF-8 and every character is
/// printable ASCII (`0x20..=0x7E`), tab, LF or CR. Everything else, including
/// non-ASCII UTF-8, is binary.
pub fn classify(raw: &[u8]) -> Value {
    match std::str::from_utf8(raw) {
        Ok(s) if s.chars().all(is_text_char) => Value::Text(s.to_owned()),
        _ => Value::Binary(Bytes::copy_from_slice(raw)),
    }
}

fn is_text_char(c: char) -> bool {
    matches!(c, '\x20'..='\x7e' | '\t' | '\n' | '\r')
}
