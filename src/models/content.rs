//! Conversation turns.

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use typed_builder::TypedBuilder;

use super::{json_type_name, ContentBlob, Part, Role};
use crate::error::ContentError;

/// Wire key of the ordered parts of a turn.
const PARTS_KEY: &str = "parts";
/// Wire key of the speaker of a turn.
const ROLE_KEY: &str = "role";

/// One turn of a conversation: ordered parts plus an optional speaker.
///
/// A turn without a role is used for system-style content. An empty `parts` list
/// is accepted but carries nothing for the model to read.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, TypedBuilder)]
#[builder(doc)]
pub struct Content {
    /// The parts that make up the content, in reading order.
    #[builder(default, setter(into))]
    pub parts: Vec<Part>,
    /// The speaker of this turn.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option, into))]
    pub role: Option<Role>,
}

impl Content {
    /// Creates a turn with no role.
    pub fn new<P: Into<Part>>(parts: impl IntoIterator<Item = P>) -> Self {
        Self {
            parts: parts.into_iter().map(Into::into).collect(),
            role: None,
        }
    }

    /// Creates a turn spoken by the user.
    ///
    /// # Arguments
    ///
    /// * `parts` - The parts of the turn, in reading order
    pub fn for_user<P: Into<Part>>(parts: impl IntoIterator<Item = P>) -> Self {
        Self {
            role: Some(Role::User),
            ..Self::new(parts)
        }
    }

    /// Creates a turn spoken by the model.
    ///
    /// # Arguments
    ///
    /// * `parts` - The parts of the turn, in reading order
    pub fn for_model<P: Into<Part>>(parts: impl IntoIterator<Item = P>) -> Self {
        Self {
            role: Some(Role::Model),
            ..Self::new(parts)
        }
    }

    /// Whether the turn has no parts.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Concatenates the text of all text parts, in order.
    pub fn text(&self) -> String {
        self.parts.iter().filter_map(Part::as_text).collect()
    }

    /// Iterates over the inline blobs of the turn, in order.
    pub fn inline_data(&self) -> impl Iterator<Item = &ContentBlob> {
        self.parts.iter().filter_map(Part::as_inline_data)
    }

    /// Decodes a turn from its JSON object form.
    ///
    /// `parts` may be an array of part objects or a bare string, which becomes a
    /// single text part. A missing or null `parts` yields an empty turn, and a
    /// missing or null `role` yields no role.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::InvalidContent`] when the value is not an object or a
    /// field has the wrong type, and propagates the first error from any part.
    pub fn from_json(value: &Value) -> Result<Self, ContentError> {
        let object = value.as_object().ok_or_else(|| {
            ContentError::invalid_content(format!(
                "expected an object, got {}",
                json_type_name(value)
            ))
        })?;

        let parts = match object.get(PARTS_KEY) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::String(text)) => {
                tracing::debug!("expanding string shorthand into a single text part");
                vec![Part::text(text.as_str())]
            }
            Some(Value::Array(items)) => items
                .iter()
                .map(Part::from_json)
                .collect::<Result<_, _>>()?,
            Some(other) => {
                return Err(ContentError::invalid_content(format!(
                    "`parts` must be a string or an array, got {}",
                    json_type_name(other)
                )))
            }
        };

        let role = match object.get(ROLE_KEY) {
            None | Some(Value::Null) => None,
            Some(Value::String(role)) => Some(Role::from(role.as_str())),
            Some(other) => {
                return Err(ContentError::invalid_content(format!(
                    "`role` must be a string, got {}",
                    json_type_name(other)
                )))
            }
        };

        Ok(Self { parts, role })
    }

    /// Decodes a turn from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid JSON or does not decode as a turn.
    pub fn from_json_str(json: &str) -> Result<Self, ContentError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json(&value)
    }

    /// Encodes the turn. `parts` is always an array and `role` is omitted when absent.
    pub fn to_json(&self) -> Value {
        let mut object = Map::new();
        object.insert(
            PARTS_KEY.to_owned(),
            Value::Array(self.parts.iter().map(Part::to_json).collect()),
        );
        if let Some(role) = &self.role {
            object.insert(ROLE_KEY.to_owned(), Value::String(role.as_str().to_owned()));
        }
        Value::Object(object)
    }

    /// Encodes the turn as a compact JSON string.
    pub fn to_json_string(&self) -> String {
        self.to_json().to_string()
    }
}

impl<'de> Deserialize<'de> for Content {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_json(&value).map_err(de::Error::custom)
    }
}
