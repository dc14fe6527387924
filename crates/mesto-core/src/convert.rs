// ── Wire → domain conversions ──

use mesto_api::{CardResponse, UserRef, UserResponse};

use crate::model::{Card, CardId, CurrentUser, Like, UserId};

impl From<UserResponse> for CurrentUser {
    fn from(raw: UserResponse) -> Self {
        Self {
            id: UserId::from(raw.id),
            name: raw.name,
            about: raw.about,
            avatar_url: raw.avatar,
            cohort: raw.cohort,
        }
    }
}

impl From<&UserRef> for Like {
    fn from(raw: &UserRef) -> Self {
        Self {
            user_id: UserId::from(raw.id()),
        }
    }
}

impl From<CardResponse> for Card {
    fn from(raw: CardResponse) -> Self {
        Self {
            id: CardId::from(raw.id),
            name: raw.name,
            image_url: raw.link,
            owner_id: UserId::from(raw.owner.id()),
            likes: raw.likes.iter().map(Like::from).collect(),
            created_at: raw.created_at,
        }
    }
}
