use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;

use crate::error::{FetchError, FetchResult};

/// The shape a response body is expected to have.  The tag alone decides how
/// the body is decoded; only `Json` carries a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseType {
    Image,
    Text,
    Integer,
    /// Parse the body as JSON and, when a key-path is given, return only the
    /// value it points at.
    Json(Option<KeyPath>),
}

impl ResponseType {
    /// JSON without narrowing: the whole document is returned.
    pub fn json() -> Self {
        ResponseType::Json(None)
    }

    /// JSON narrowed by a slash-delimited key-path such as `"data/user/name"`.
    pub fn json_at(raw: &str) -> Self {
        ResponseType::Json(Some(KeyPath::parse(raw)))
    }

    /// Short lowercase name used in log fields.
    pub fn name(&self) -> &'static str {
        match self {
            ResponseType::Image => "image",
            ResponseType::Text => "text",
            ResponseType::Integer => "integer",
            ResponseType::Json(_) => "json",
        }
    }
}

/// Ordered sequence of JSON object keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { segments: segments.into_iter().map(Into::into).collect() }
    }

    /// Split a raw key string on `/`.  Empty segments are kept as literal
    /// empty keys (`"a//b"` has three segments), except that the empty string
    /// itself is the empty path.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::default();
        }
        Self::new(raw.split('/'))
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}

impl From<&str> for KeyPath {
    fn from(raw: &str) -> Self {
        KeyPath::parse(raw)
    }
}

/// A successfully decoded image body.  The bytes are the untouched response
/// body; dimensions and format come from the image capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub format: Option<String>,
}

/// A decoded response body, one variant per `ResponseType` tag.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedValue {
    Image(ImageData),
    Text(String),
    Integer(i64),
    Json(Value),
}

impl DecodedValue {
    pub fn as_image(&self) -> Option<&ImageData> {
        match self {
            DecodedValue::Image(image) => Some(image),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            DecodedValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            DecodedValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            DecodedValue::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Convert a JSON payload into a typed structure.  Any other variant is a
    /// decode error because there is no JSON to read from.
    pub fn deserialize<T: DeserializeOwned>(&self) -> FetchResult<T> {
        match self {
            DecodedValue::Json(value) => {
                serde_json::from_value(value.clone()).map_err(|err| FetchError::Json(err.to_string()))
            }
            _ => Err(FetchError::Json("decoded value is not JSON".to_string())),
        }
    }
}
