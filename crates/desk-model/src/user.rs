use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Opaque user identifier.
///
/// The component that displays a user never interprets the identifier; it is
/// carried as a string token. The portal serializes database integers, so
/// deserialization accepts either a JSON string or a JSON number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct UserId(String);

impl UserId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdVisitor;

        impl Visitor<'_> for IdVisitor {
            type Value = UserId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a user identifier as string or integer")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<UserId, E> {
                Ok(UserId(value.to_string()))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<UserId, E> {
                Ok(UserId(value.to_string()))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<UserId, E> {
                Ok(UserId(value.to_string()))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

/// One row of the user directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserSummary {
    pub id: UserId,
    pub username: String,
    #[serde(default, deserialize_with = "bool_lenient")]
    pub is_active: bool,
}

/// A single user's detail record as returned by the lookup endpoint.
///
/// Every display field is optional: the backend omits what it does not know,
/// and an unavailable user arrives as a body containing nothing but
/// `"inactive": true`. Absent fields display as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub id: Option<UserId>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub fullname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address_line1: Option<String>,
    #[serde(default)]
    pub address_line2: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub profession: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    /// Status label source. Display only; availability is decided by `inactive`.
    #[serde(default, deserialize_with = "bool_lenient")]
    pub is_active: bool,
    /// Explicit unavailability signal. Takes precedence over `is_active`.
    #[serde(default, deserialize_with = "bool_lenient")]
    pub inactive: bool,
}

impl UserRecord {
    /// Single-line postal address, matching the portal's display format:
    /// line 2 is appended only when present, the remaining parts always join.
    pub fn address_display(&self) -> String {
        let part = |field: &Option<String>| field.as_deref().unwrap_or_default().to_string();
        let line2 = match self.address_line2.as_deref() {
            Some(l2) if !l2.is_empty() => format!(", {l2}"),
            _ => String::new(),
        };
        format!(
            "{}{}, {}, {} {}",
            part(&self.address_line1),
            line2,
            part(&self.city),
            part(&self.state),
            part(&self.zip_code),
        )
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_active { "Active" } else { "Inactive" }
    }
}

/// Outgoing message payload for the portal's send endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct MessageDraft {
    pub receiver_id: UserId,
    pub subject: String,
    pub body: String,
}

fn bool_lenient<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    struct BoolVisitor;

    impl Visitor<'_> for BoolVisitor {
        type Value = bool;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a boolean or 0/1 integer")
        }

        fn visit_bool<E: de::Error>(self, value: bool) -> Result<bool, E> {
            Ok(value)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<bool, E> {
            Ok(value != 0)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<bool, E> {
            Ok(value != 0)
        }
    }

    deserializer.deserialize_any(BoolVisitor)
}
