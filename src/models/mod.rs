//! Data structures for the content exchanged with the Gemini AI API.

mod blob;
mod content;
mod part;
mod role;

pub use blob::ContentBlob;
pub use content::Content;
pub use part::Part;
pub use role::Role;

use serde_json::Value;

/// Name of a JSON value's type, for error messages that must not echo payloads.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
