// menuboard/src/image.rs

//! Turns whatever the menu API sends in an image column into an optional
//! inline image reference (a `data:image/...` URL).
//!
//! The upstream serializes binary images inconsistently: sometimes already
//! as a data URL, sometimes as bare base64 text, sometimes as a raw byte
//! array, sometimes as a `{"type": "Buffer", "data": [...]}` wrapper. Every
//! consumer goes through [`normalize`] so that downstream code only ever
//! sees `Option<InlineImage>`.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Prefix shared by every displayable inline image reference.
pub const INLINE_IMAGE_PREFIX: &str = "data:image";

/// Images without a declared format are tagged as JPEG.
const JPEG_DATA_URL_PREFIX: &str = "data:image/jpeg;base64,";

/// Marker carried in the `type` field of a serialized byte buffer.
const BUFFER_MARKER: &str = "Buffer";

/// A self-contained, displayable image reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InlineImage(String);

impl InlineImage {
  fn jpeg_from_base64(encoded: &str) -> Self {
    InlineImage(format!("{JPEG_DATA_URL_PREFIX}{encoded}"))
  }

  fn jpeg_from_bytes(bytes: &[u8]) -> Self {
    Self::jpeg_from_base64(&STANDARD.encode(bytes))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn into_string(self) -> String {
    self.0
  }
}

impl AsRef<str> for InlineImage {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for InlineImage {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// The shapes an image payload can take on the wire.
///
/// [`ImagePayload::classify`] is the only place that inspects raw JSON; the
/// precedence between shapes is the arm order there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImagePayload {
  /// `null`, `false`, `0`, `""`, or an empty byte sequence.
  Absent,
  /// Already a `data:image...` reference.
  InlineReference(String),
  /// `{"type": "Buffer", "data": [..bytes..]}`
  WrappedBytes(Vec<u8>),
  /// A bare JSON array of byte values.
  Bytes(Vec<u8>),
  /// Text made only of base64 alphabet characters.
  Base64Text(String),
  /// Anything else. Treated as "no image", never as an error.
  Unrecognized,
}

impl ImagePayload {
  pub fn classify(value: &Value) -> Self {
    match value {
      Value::Null | Value::Bool(false) => ImagePayload::Absent,
      Value::Number(n) if n.as_f64() == Some(0.0) => ImagePayload::Absent,
      Value::String(s) if s.is_empty() => ImagePayload::Absent,
      Value::String(s) if s.starts_with(INLINE_IMAGE_PREFIX) => ImagePayload::InlineReference(s.clone()),
      Value::Object(fields) => classify_wrapped(fields),
      Value::Array(items) => match byte_values(items) {
        Some(bytes) if bytes.is_empty() => ImagePayload::Absent,
        Some(bytes) => ImagePayload::Bytes(bytes),
        None => ImagePayload::Unrecognized,
      },
      Value::String(s) if is_base64_text(s) => ImagePayload::Base64Text(s.clone()),
      _ => ImagePayload::Unrecognized,
    }
  }

  pub fn into_inline_image(self) -> Option<InlineImage> {
    match self {
      ImagePayload::Absent | ImagePayload::Unrecognized => None,
      ImagePayload::InlineReference(reference) => Some(InlineImage(reference)),
      ImagePayload::Base64Text(encoded) => Some(InlineImage::jpeg_from_base64(&encoded)),
      ImagePayload::WrappedBytes(bytes) | ImagePayload::Bytes(bytes) => Some(InlineImage::jpeg_from_bytes(&bytes)),
    }
  }
}

fn classify_wrapped(fields: &Map<String, Value>) -> ImagePayload {
  let is_buffer = matches!(fields.get("type"), Some(Value::String(marker)) if marker == BUFFER_MARKER);
  match (is_buffer, fields.get("data")) {
    (true, Some(Value::Array(items))) => match byte_values(items) {
      Some(bytes) if bytes.is_empty() => ImagePayload::Absent,
      Some(bytes) => ImagePayload::WrappedBytes(bytes),
      None => ImagePayload::Unrecognized,
    },
    _ => ImagePayload::Unrecognized,
  }
}

/// Every element must be an integer in `0..=255`.
fn byte_values(items: &[Value]) -> Option<Vec<u8>> {
  items
    .iter()
    .map(|item| item.as_u64().and_then(|n| u8::try_from(n).ok()))
    .collect()
}

fn is_base64_text(text: &str) -> bool {
  !text.is_empty()
    && text
      .bytes()
      .all(|b| b.is_ascii_alphanumeric() || b == b'+' || b == b'/' || b == b'=')
}

/// Converts a raw image payload into a displayable reference, or `None`.
///
/// Never fails: unrecognized shapes degrade to `None`, which callers render
/// as a placeholder. No attempt is made to check that the bytes are a real
/// image.
pub fn normalize(payload: &Value) -> Option<InlineImage> {
  ImagePayload::classify(payload).into_inline_image()
}

/// Encodes bytes the caller already holds. Empty input yields `None`.
pub fn normalize_bytes(bytes: &[u8]) -> Option<InlineImage> {
  if bytes.is_empty() {
    return None;
  }
  Some(InlineImage::jpeg_from_bytes(bytes))
}

pub fn is_valid_image(reference: Option<&str>) -> bool {
  reference.is_some_and(|r| r.starts_with(INLINE_IMAGE_PREFIX))
}
