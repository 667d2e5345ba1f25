//! MIME-typed inline payloads.

use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};

use crate::error::ContentError;

/// Wire key for the MIME type of a blob.
pub(crate) const MIME_TYPE_KEY: &str = "mimeType";
/// Wire key for the encoded payload of a blob.
pub(crate) const DATA_KEY: &str = "data";
/// MIME type used when a file extension gives no hint.
const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Raw media bytes sent inline with a request, tagged with their MIME type.
///
/// The payload is kept in its encoded form (base64 text on the wire) and is never
/// decoded or validated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBlob {
    /// The MIME type of the inline data
    pub mime_type: String,
    /// The encoded inline data content
    pub data: String,
}

impl ContentBlob {
    /// Creates a new blob from a MIME type and an already encoded payload.
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// Creates a blob by base64 encoding raw bytes.
    ///
    /// # Arguments
    ///
    /// * `mime_type` - The MIME type of the bytes
    /// * `bytes` - The raw payload
    pub fn from_bytes(mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self::new(mime_type, STANDARD.encode(bytes))
    }

    /// Reads a file and wraps its contents as a blob.
    ///
    /// The MIME type is guessed from the file extension, falling back to
    /// `application/octet-stream`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let mime_type = mime_guess::from_path(path)
            .first_raw()
            .unwrap_or(DEFAULT_MIME_TYPE);
        tracing::debug!(path = %path.display(), mime_type, len = bytes.len(), "loaded inline data");
        Ok(Self::from_bytes(mime_type, &bytes))
    }

    /// Decodes a blob from its JSON object form.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::InvalidBlob`] if `mimeType` or `data` is missing,
    /// null, or not a string.
    pub fn from_json(value: &Value) -> Result<Self, ContentError> {
        Ok(Self {
            mime_type: required_str(value, MIME_TYPE_KEY)?,
            data: required_str(value, DATA_KEY)?,
        })
    }

    /// Encodes the blob as `{"mimeType": ..., "data": ...}`.
    pub fn to_json(&self) -> Value {
        json!({
            MIME_TYPE_KEY: self.mime_type,
            DATA_KEY: self.data,
        })
    }
}

fn required_str(value: &Value, field: &'static str) -> Result<String, ContentError> {
    value
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or(ContentError::InvalidBlob { field })
}

impl<'de> Deserialize<'de> for ContentBlob {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_json(&value).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_round_trip_preserves_json() {
        let value = json!({ "mimeType": "image/png", "data": "iVBORw0KGgo=" });
        let blob = ContentBlob::from_json(&value).unwrap();
        assert_eq!(blob.mime_type, "image/png");
        assert_eq!(blob.data, "iVBORw0KGgo=");
        assert_eq!(blob.to_json(), value);
        assert_eq!(serde_json::to_value(&blob).unwrap(), value);
    }

    #[test]
    fn test_missing_fields_are_rejected() {
        let err = ContentBlob::from_json(&json!({ "data": "abc" })).unwrap_err();
        assert!(matches!(err, ContentError::InvalidBlob { field: "mimeType" }));

        let err = ContentBlob::from_json(&json!({ "mimeType": "text/plain", "data": null }))
            .unwrap_err();
        assert!(matches!(err, ContentError::InvalidBlob { field: "data" }));

        let err = ContentBlob::from_json(&json!({ "mimeType": 7, "data": "abc" })).unwrap_err();
        assert!(matches!(err, ContentError::InvalidBlob { field: "mimeType" }));
    }

    #[test]
    fn test_serde_deserialize_uses_same_rules() {
        let err = serde_json::from_value::<ContentBlob>(json!({ "mimeType": "a/b" })).unwrap_err();
        assert!(err.to_string().contains("`data` must be a string"));
    }

    #[test]
    fn test_from_bytes_encodes_base64() {
        let blob = ContentBlob::from_bytes("text/plain", b"hello");
        assert_eq!(blob.data, "aGVsbG8=");
    }

    #[test]
    fn test_from_path_guesses_mime_type() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(b"hello").unwrap();

        let blob = ContentBlob::from_path(file.path()).unwrap();
        assert_eq!(blob.mime_type, "image/png");
        assert_eq!(blob.data, "aGVsbG8=");
    }

    #[test]
    fn test_from_path_unknown_extension_falls_back() {
        let mut file = tempfile::Builder::new().suffix(".zzqx").tempfile().unwrap();
        file.write_all(&[0, 1, 2]).unwrap();

        let blob = ContentBlob::from_path(file.path()).unwrap();
        assert_eq!(blob.mime_type, DEFAULT_MIME_TYPE);
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = ContentBlob::from_path("/definitely/not/here.png").unwrap_err();
        assert!(matches!(err, ContentError::IoError(_)));
    }
}
