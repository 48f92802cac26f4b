use bytes::Bytes;
use indexmap::IndexMap;
use num_bigint::BigInt;

/// A bencode dictionary.
///
/// Keys keep the order in which they were decoded or inserted. The encoder
/// ignores that order and always emits keys sorted by their bytes.
pub type Dictionary = IndexMap<String, Value>;

/// A decoded bencode value.
///
/// Bencode has a single integer type and a single byte string type. This enum
/// splits both so the JSON bridge can represent them faithfully:
/// integers whose text is too long for the fast path become
/// [`Value::BigInteger`], and byte strings that are not plain printable text
/// become [`Value::Binary`].
///
/// # Examples
///
/// ```
/// use torrentjson::bencode::Value;
///
/// let int: Value = 42i64.into();
/// let text: Value = "hello".into();
///
/// assert_eq!(int.as_integer(), Some(42));
/// assert_eq!(text.as_str(), Some("hello"));
/// assert!(text.as_bytes().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// An integer whose decimal text fits the fast path.
    Integer(i64),
    /// An arbitrary-precision integer.
    BigInteger(BigInt),
    /// A byte string made only of printable ASCII, tab, CR and LF.
    Text(String),
    /// Any other byte string, kept verbatim.
    Binary(Bytes),
    /// An ordered list of values.
    List(Vec<Value>),
    /// A dictionary with string keys.
    Dict(Dictionary),
}

impl Value {
    /// Creates a text value.
    pub fn text(s: &str) -> Self {
        Value::Text(s.to_owned())
    }

    /// Creates a binary value by copying `data`.
    pub fn binary(data: &[u8]) -> Self {
        Value::Binary(Bytes::copy_from_slice(data))
    }

    /// Returns the value as an `i64`, if it is a fast-path integer.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the value as a big integer, if it is one.
    pub fn as_big_integer(&self) -> Option<&BigInt> {
        match self {
            Value::BigInteger(i) => Some(i),
            _ => None,
        }
    }

    /// Returns the text, if the value was classified as text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the raw bytes, if the value was classified as binary.
    ///
    /// # Examples
    ///
    /// ```
    /// use torrentjson::bencode::decode;
    ///
    /// let value = decode(b"3:\xff\x00\x01").unwrap();
    /// assert_eq!(value.as_bytes().map(|b| b.as_ref()), Some(&[0xff, 0x00, 0x01][..]));
    /// ```
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Value::Binary(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the value as a list, if it is one.
    pub fn as_list(&self) -> Option<&Vec<Value>> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    /// Returns the value as a dictionary reference, if it is one.
    pub fn as_dict(&self) -> Option<&Dictionary> {
        match self {
            Value::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Consumes the value and returns the dictionary, if it is one.
    pub fn into_dict(self) -> Option<Dictionary> {
        match self {
            Value::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Looks up a key in this value if it is a dictionary.
    ///
    /// # Examples
    ///
    /// ```
    /// use torrentjson::bencode::decode;
    ///
    /// let value = decode(b"d3:foo3:bare").unwrap();
    /// assert_eq!(value.get("foo").and_then(|v| v.as_str()), Some("bar"));
    /// assert_eq!(value.get("missing"), None);
    /// ```
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_dict()?.get(key)
    }

    /// Short name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::BigInteger(_) => "big integer",
            Value::Text(_) => "text",
            Value::Binary(_) => "binary",
            Value::List(_) => "list",
            Value::Dict(_) => "dictionary",
        }
    }
}

/// Parses decimal integer text into a [`BigInt`].
///
/// Accepts an optional `+` or `-` followed by one or more ASCII digits and
/// nothing else. `BigInt`'s own parser also skips `_` separators, which are
/// not part of either grammar.
pub(crate) fn parse_big_integer(text: &str) -> Option<BigInt> {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<BigInt> for Value {
    fn from(i: BigInt) -> Self {
        Value::BigInteger(i)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::text(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Bytes> for Value {
    fn from(b: Bytes) -> Self {
        Value::Binary(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(l: Vec<Value>) -> Self {
        Value::List(l)
    }
}

impl From<Dictionary> for Value {
    fn from(d: Dictionary) -> Self {
        Value::Dict(d)
    }
}
