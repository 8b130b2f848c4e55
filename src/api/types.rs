//! Request and response bodies of the Yoga Studio REST API.
//!
//! DESIGN
//! ======
//! Field names follow the server's JSON exactly. Most keys are camel case, but
//! yoga sessions carry `teacher_id` in snake case, so that one is renamed
//! explicitly.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

/// `POST auth/login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST auth/register` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

/// Identity payload returned by a successful login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInformation {
    #[serde(default)]
    pub token: String,
    #[serde(default, rename = "type")]
    pub token_type: String,
    pub id: u64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub admin: bool,
}

/// Error body some endpoints attach to non-2xx responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// User profile from `GET user/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub admin: bool,
    #[serde(default, with = "wire_datetime::option")]
    pub created_at: Option<PrimitiveDateTime>,
    #[serde(default, with = "wire_datetime::option")]
    pub updated_at: Option<PrimitiveDateTime>,
}

/// A bookable yoga session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YogaSession {
    pub id: u64,
    pub name: String,
    #[serde(with = "wire_datetime")]
    pub date: PrimitiveDateTime,
    #[serde(rename = "teacher_id")]
    pub teacher_id: u64,
    pub description: String,
    /// Ids of participating users.
    #[serde(default)]
    pub users: Vec<u64>,
    #[serde(default, with = "wire_datetime::option")]
    pub created_at: Option<PrimitiveDateTime>,
    #[serde(default, with = "wire_datetime::option")]
    pub updated_at: Option<PrimitiveDateTime>,
}

impl YogaSession {
    #[must_use]
    pub fn has_participant(&self, user_id: u64) -> bool {
        self.users.contains(&user_id)
    }
}

/// `POST session` / `PUT session/{id}` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SessionPayload {
    pub name: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    pub teacher_id: u64,
    pub description: String,
    pub users: Vec<u64>,
}

/// A yoga teacher.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, with = "wire_datetime::option")]
    pub created_at: Option<PrimitiveDateTime>,
    #[serde(default, with = "wire_datetime::option")]
    pub updated_at: Option<PrimitiveDateTime>,
}

impl Teacher {
    /// `Bob Marley`, as listed in the teacher select.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Serde adapter for offset-less wire timestamps.
pub(crate) mod wire_datetime {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};
    use time::PrimitiveDateTime;

    use crate::format;

    pub fn serialize<S: Serializer>(dt: &PrimitiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format::wire_datetime(*dt))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<PrimitiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        format::parse_datetime(&raw).map_err(|e| D::Error::custom(format!("invalid timestamp {raw:?}: {e}")))
    }

    pub mod option {
        use serde::de::Error as _;
        use serde::{Deserialize, Deserializer, Serializer};
        use time::PrimitiveDateTime;

        use crate::format;

        #[allow(clippy::ref_option)]
        pub fn serialize<S: Serializer>(dt: &Option<PrimitiveDateTime>, serializer: S) -> Result<S::Ok, S::Error> {
            match dt {
                Some(dt) => super::serialize(dt, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<PrimitiveDateTime>, D::Error> {
            let raw: Option<String> = Option::deserialize(deserializer)?;
            raw.map(|raw| {
                format::parse_datetime(&raw).map_err(|e| D::Error::custom(format!("invalid timestamp {raw:?}: {e}")))
            })
            .transpose()
        }
    }
}
