//! Speaker tags for conversation turns.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// The speaker of a conversation turn.
///
/// Roles are free-form on the wire. The two speakers the API knows about get their
/// own variants; anything else is kept verbatim in [`Role::Other`]. Roles compare by
/// their wire value, so `Role::Other("user".into())` equals [`Role::User`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    /// The user sending prompts
    User,
    /// The model generating responses
    Model,
    /// Any other role tag, preserved as received
    Other(String),
}

impl Role {
    /// Wire value of the user speaker.
    pub const USER: &'static str = "user";
    /// Wire value of the model speaker.
    pub const MODEL: &'static str = "model";

    /// Returns the wire value of this role.
    pub fn as_str(&self) -> &str {
        match self {
            Role::User => Self::USER,
            Role::Model => Self::MODEL,
            Role::Other(role) => role,
        }
    }
}

impl PartialEq for Role {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Role {}

impl Hash for Role {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Role {
    fn from(role: &str) -> Self {
        match role {
            Self::USER => Role::User,
            Self::MODEL => Role::Model,
            other => Role::Other(other.to_owned()),
        }
    }
}

impl From<String> for Role {
    fn from(role: String) -> Self {
        match role.as_str() {
            Self::USER => Role::User,
            Self::MODEL => Role::Model,
            _ => Role::Other(role),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(role) => role,
            known => known.as_str().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_known_roles_map_to_variants() {
        assert_eq!(Role::from("user"), Role::User);
        assert_eq!(Role::from("model".to_string()), Role::Model);
        assert_eq!(Role::from("function"), Role::Other("function".into()));
    }

    #[test]
    fn test_serializes_as_bare_string() {
        assert_eq!(serde_json::to_value(Role::Model).unwrap(), json!("model"));
        assert_eq!(
            serde_json::to_value(Role::Other("tool".into())).unwrap(),
            json!("tool")
        );
        let role: Role = serde_json::from_value(json!("user")).unwrap();
        assert_eq!(role, Role::User);
        assert_eq!(role.to_string(), "user");
    }

    #[test]
    fn test_other_with_known_value_equals_named_variant() {
        use std::collections::HashSet;

        assert_eq!(Role::Other("user".into()), Role::User);
        assert_eq!(Role::Model, Role::Other("model".into()));
        assert_ne!(Role::Other("tool".into()), Role::User);

        let roles: HashSet<Role> = [Role::User, Role::Other("user".into())].into_iter().collect();
        assert_eq!(roles.len(), 1);
    }
}
