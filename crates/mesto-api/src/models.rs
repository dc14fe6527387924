// Wire types for the gallery REST API.
//
// Field names follow the JSON the server emits (`_id`, `link`,
// `createdAt`); `mesto-core` converts these into its domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user record as returned by `GET users/me` and the profile PATCH calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cohort: Option<String>,
}

/// A reference to a user inside a card.
///
/// Depending on the endpoint the server embeds either the full user
/// object or only its id string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserRef {
    Id(String),
    User(UserResponse),
}

impl UserRef {
    pub fn id(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::User(user) => &user.id,
        }
    }
}

/// A photo card as returned by `GET cards`, `POST cards` and the like endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub link: String,
    pub owner: UserRef,
    #[serde(default)]
    pub likes: Vec<UserRef>,
    #[serde(
        rename = "createdAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body of `PATCH users/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileBody {
    pub name: String,
    pub about: String,
}

/// Body of `PATCH users/me/avatar`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvatarBody {
    pub avatar: String,
}

/// Body of `POST cards`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCardBody {
    pub name: String,
    pub link: String,
}

/// Error body shape: `{"message": "..."}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
}
