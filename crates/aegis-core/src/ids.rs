use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Stable identifier of an Aegis account.
///
/// Older API deployments emit the id as a JSON number while newer ones emit a
/// string, so deserialization accepts both. The identifier is opaque text
/// everywhere else in the SDK.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct UserId(String);

impl UserId {
    /// The identifier as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the id, returning the owned text form.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Number(i64),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Text(id) => UserId(id),
            Repr::Number(id) => UserId(id.to_string()),
        })
    }
}
