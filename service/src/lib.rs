//! Core decode logic for request_easy.  This crate contains pure functions
//! that turn a raw response body into a typed value; it never touches the
//! network.  The runtime crate performs the GET through a `NetworkAdapter`
//! and hands the body to [`decode`].

pub mod api;
pub mod error;
pub mod model;

use api::ImageDecoder;
use error::{FetchError, FetchResult};
use model::{DecodedValue, KeyPath, ResponseType};
use serde_json::Value;

/// Decode a response body according to the requested response type.
///
/// * `Image` delegates to the image capability and keeps the original bytes.
/// * `Text` requires valid UTF-8.
/// * `Integer` requires UTF-8 whose trimmed content is a base-10 `i64`.
/// * `Json` parses the body and, with a key-path, narrows it to the value the
///   path resolves to.  A path that does not resolve is a decode error.
///
/// The function is pure: identical inputs give identical results.
pub fn decode(
    body: &[u8],
    response_type: &ResponseType,
    images: &dyn ImageDecoder,
) -> FetchResult<DecodedValue> {
    match response_type {
        ResponseType::Image => images
            .decode_image(body)
            .map(DecodedValue::Image)
            .map_err(|_| FetchError::Image),
        ResponseType::Text => std::str::from_utf8(body)
            .map(|text| DecodedValue::Text(text.to_string()))
            .map_err(|_| FetchError::Text),
        ResponseType::Integer => {
            let text = std::str::from_utf8(body).map_err(|_| FetchError::Integer)?;
            parse_integer(text).map(DecodedValue::Integer).ok_or(FetchError::Integer)
        }
        ResponseType::Json(key_path) => {
            let value: Value =
                serde_json::from_slice(body).map_err(|err| FetchError::Json(err.to_string()))?;
            match key_path {
                None => Ok(DecodedValue::Json(value)),
                Some(path) => resolve_key_path(&value, path)
                    .cloned()
                    .map(DecodedValue::Json)
                    .ok_or_else(|| FetchError::KeyPathNotFound { path: path.to_string() }),
            }
        }
    }
}

/// Walk nested objects one segment at a time.  Stops at the first segment
/// that is missing or that meets a non-object value (arrays are not indexed).
/// The empty path resolves to `root`.
pub fn resolve_key_path<'a>(root: &'a Value, path: &KeyPath) -> Option<&'a Value> {
    path.segments()
        .iter()
        .try_fold(root, |current, segment| current.as_object()?.get(segment))
}

/// Parse the whole trimmed string as a signed base-10 integer.  Only an
/// optional leading `-` followed by ASCII digits is accepted; `i64::from_str`
/// alone would also let a leading `+` through.
pub fn parse_integer(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    let digits = trimmed.strip_prefix('-').unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

/// Message used when a response status is rejected.
pub fn status_message(status: u16) -> String {
    format!("status {}", status)
}
