// User profile endpoints
//
// All three calls operate on the token owner (`users/me`).

use tracing::debug;

use crate::client::MestoClient;
use crate::error::Error;
use crate::models::{AvatarBody, ProfileBody, UserResponse};

impl MestoClient {
    /// Fetch the profile of the authenticated user.
    ///
    /// `GET users/me`
    pub async fn get_user_info(&self) -> Result<UserResponse, Error> {
        debug!("fetching user profile");
        self.get("users/me").await
    }

    /// Change the name and description of the authenticated user.
    ///
    /// `PATCH users/me` with `{"name": "...", "about": "..."}`
    pub async fn update_user_info(&self, name: &str, about: &str) -> Result<UserResponse, Error> {
        debug!(name, "updating user profile");
        let body = ProfileBody {
            name: name.to_owned(),
            about: about.to_owned(),
        };
        self.patch("users/me", &body).await
    }

    /// Replace the avatar of the authenticated user.
    ///
    /// `PATCH users/me/avatar` with `{"avatar": "<url>"}`
    pub async fn update_avatar(&self, avatar: &str) -> Result<UserResponse, Error> {
        debug!(avatar, "updating avatar");
        let body = AvatarBody {
            avatar: avatar.to_owned(),
        };
        self.patch("users/me/avatar", &body).await
    }
}
