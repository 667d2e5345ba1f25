//! Common part model used in both requests and responses.

use std::path::Path;

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};

use super::{json_type_name, ContentBlob};
use crate::error::ContentError;

/// Wire key of the text payload.
pub(crate) const TEXT_KEY: &str = "text";
/// Wire key of the inline data payload.
pub(crate) const INLINE_DATA_KEY: &str = "inlineData";

/// A single piece of a turn, carrying exactly one payload.
///
/// On the wire the variant is selected by which key is present: `{"text": ...}` or
/// `{"inlineData": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Part {
    /// A text part containing a string value
    Text {
        /// The text content of the part
        text: String,
    },
    /// A part containing inline data
    InlineData {
        /// The inline data content of the part
        #[serde(rename = "inlineData")]
        inline_data: ContentBlob,
    },
}

impl Part {
    /// Creates a new text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Creates a new inline data part.
    pub fn inline_data(inline_data: ContentBlob) -> Self {
        Self::InlineData { inline_data }
    }

    /// Creates an inline data part by base64 encoding raw bytes.
    ///
    /// # Arguments
    ///
    /// * `mime_type` - The MIME type of the bytes
    /// * `bytes` - The raw payload
    pub fn inline_bytes(mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self::inline_data(ContentBlob::from_bytes(mime_type, bytes))
    }

    /// Creates an inline data part from a file on disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        ContentBlob::from_path(path).map(Self::inline_data)
    }

    /// Returns the text of a text part.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Part::Text { text } => Some(text),
            Part::InlineData { .. } => None,
        }
    }

    /// Returns the blob of an inline data part.
    pub fn as_inline_data(&self) -> Option<&ContentBlob> {
        match self {
            Part::InlineData { inline_data } => Some(inline_data),
            Part::Text { .. } => None,
        }
    }

    /// Whether this is a text part.
    pub fn is_text(&self) -> bool {
        matches!(self, Part::Text { .. })
    }

    /// Whether this is an inline data part.
    pub fn is_inline_data(&self) -> bool {
        matches!(self, Part::InlineData { .. })
    }

    /// Decodes a part from its JSON object form.
    ///
    /// A non-null `text` wins over `inlineData` when both are present; the inline
    /// data is then ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::InvalidPart`] when the value is not an object, when
    /// `text` is not a string, or when neither payload is present. Errors from the
    /// embedded blob are propagated as [`ContentError::InvalidBlob`].
    pub fn from_json(value: &Value) -> Result<Self, ContentError> {
        let object = value
            .as_object()
            .ok_or_else(|| {
                ContentError::invalid_part(format!(
                    "expected an object, got {}",
                    json_type_name(value)
                ))
            })?;

        match object.get(TEXT_KEY) {
            Some(Value::String(text)) => {
                if object.get(INLINE_DATA_KEY).is_some_and(|v| !v.is_null()) {
                    tracing::debug!("part carries both text and inlineData, keeping text");
                }
                return Ok(Self::text(text.as_str()));
            }
            Some(Value::Null) | None => {}
            Some(other) => {
                return Err(ContentError::invalid_part(format!(
                    "`text` must be a string, got {}",
                    json_type_name(other)
                )))
            }
        }

        match object.get(INLINE_DATA_KEY) {
            Some(Value::Null) | None => Err(ContentError::invalid_part(
                "neither `text` nor `inlineData` is present",
            )),
            Some(blob) => ContentBlob::from_json(blob).map(Self::inline_data),
        }
    }

    /// Encodes the part, emitting exactly one payload key.
    pub fn to_json(&self) -> Value {
        match self {
            Part::Text { text } => json!({ TEXT_KEY: text }),
            Part::InlineData { inline_data } => json!({ INLINE_DATA_KEY: inline_data.to_json() }),
        }
    }
}

impl<'de> Deserialize<'de> for Part {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_json(&value).map_err(de::Error::custom)
    }
}

impl From<&str> for Part {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for Part {
    fn from(text: String) -> Self {
        Self::Text { text }
    }
}

impl From<ContentBlob> for Part {
    fn from(inline_data: ContentBlob) -> Self {
        Self::inline_data(inline_data)
    }
}
