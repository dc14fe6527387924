// ── Card domain types ──
//
// `Card` mirrors one server card. `SelectedCard` is the slice of it the
// full-image popup needs, and `CardView` is the per-viewer projection the
// gallery renders (counter, heart state, delete button).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use super::entity_id::{CardId, UserId};
use crate::error::CoreError;

const NAME_MIN_CHARS: usize = 2;
const NAME_MAX_CHARS: usize = 30;

/// A single like on a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    pub user_id: UserId,
}

/// A photo card.
///
/// Identity is `id`. The controller replaces whole cards when the server
/// answers a like/unlike; it never edits `likes` locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub image_url: String,
    pub owner_id: UserId,
    pub likes: Vec<Like>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Card {
    /// Whether `user` is among the card's likes.
    pub fn is_liked_by(&self, user: &UserId) -> bool {
        self.likes.iter().any(|like| &like.user_id == user)
    }

    pub fn is_owned_by(&self, user: &UserId) -> bool {
        &self.owner_id == user
    }

    pub fn like_count(&self) -> usize {
        self.likes.len()
    }

    /// The image/name pair shown by the full-image popup.
    pub fn selection(&self) -> SelectedCard {
        SelectedCard {
            name: self.name.clone(),
            image_url: self.image_url.clone(),
        }
    }
}

/// The card shown in the full-image popup, or empty when none is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedCard {
    pub name: String,
    pub image_url: String,
}

impl SelectedCard {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.image_url.is_empty()
    }
}

/// Payload of the add-place form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCard {
    pub name: String,
    pub link: String,
}

impl NewCard {
    /// Build the payload from raw form input, trimming both fields.
    pub fn new(name: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_owned(),
            link: link.into().trim().to_owned(),
        }
    }

    /// Apply the form's constraints: a 2–30 character name and an
    /// absolute http(s) image link.
    pub fn validate(&self) -> Result<(), CoreError> {
        let chars = self.name.chars().count();
        if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&chars) {
            return Err(CoreError::ValidationFailed {
                message: format!(
                    "place name must be {NAME_MIN_CHARS}-{NAME_MAX_CHARS} characters, got {chars}"
                ),
            });
        }

        let url = Url::parse(&self.link).map_err(|e| CoreError::ValidationFailed {
            message: format!("invalid image link '{}': {e}", self.link),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(CoreError::ValidationFailed {
                message: format!("image link must be http(s), got '{}'", url.scheme()),
            });
        }
        Ok(())
    }
}

/// What the gallery renders for one card, from the viewer's perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub id: CardId,
    pub name: String,
    pub image_url: String,
    pub like_count: usize,
    pub liked_by_me: bool,
    pub owned_by_me: bool,
}

impl CardView {
    /// Project `card` for `viewer`; with no viewer nothing is liked or owned.
    pub fn project(card: &Card, viewer: Option<&UserId>) -> Self {
        Self {
            id: card.id.clone(),
            name: card.name.clone(),
            image_url: card.image_url.clone(),
            like_count: card.like_count(),
            liked_by_me: viewer.is_some_and(|u| card.is_liked_by(u)),
            owned_by_me: viewer.is_some_and(|u| card.is_owned_by(u)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn card(likes: &[&str]) -> Card {
        Card {
            id: CardId::from("c1"),
            name: "Kamchatka".into(),
            image_url: "https://example.com/k.jpg".into(),
            owner_id: UserId::from("owner"),
            likes: likes
                .iter()
                .map(|u| Like {
                    user_id: UserId::from(*u),
                })
                .collect(),
            created_at: None,
        }
    }

    #[test]
    fn liked_by_checks_membership() {
        let c = card(&["u1", "u2"]);
        assert!(c.is_liked_by(&UserId::from("u2")));
        assert!(!c.is_liked_by(&UserId::from("u3")));
        assert_eq!(c.like_count(), 2);
    }

    #[test]
    fn selection_uses_canonical_fields() {
        let sel = card(&[]).selection();
        assert_eq!(sel.name, "Kamchatka");
        assert_eq!(sel.image_url, "https://example.com/k.jpg");
        assert!(!sel.is_empty());
        assert!(SelectedCard::default().is_empty());
    }

    #[test]
    fn view_without_viewer_is_neutral() {
        let view = CardView::project(&card(&["owner"]), None);
        assert_eq!(view.like_count, 1);
        assert!(!view.liked_by_me);
        assert!(!view.owned_by_me);
    }

    #[test]
    fn view_for_owner() {
        let owner = UserId::from("owner");
        let view = CardView::project(&card(&["owner"]), Some(&owner));
        assert!(view.liked_by_me);
        assert!(view.owned_by_me);
    }

    #[test]
    fn new_card_accepts_valid_form() {
        assert!(
            NewCard::new("Altai", "https://example.com/altai.jpg")
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn new_card_rejects_short_name() {
        let err = NewCard::new("A", "https://example.com/a.jpg")
            .validate()
            .unwrap_err();
        assert!(matches!(err, CoreError::ValidationFailed { .. }));
    }

    #[test]
    fn new_card_rejects_long_name() {
        let name = "x".repeat(31);
        assert!(NewCard::new(name, "https://example.com/a.jpg").validate().is_err());
    }

    #[test]
    fn new_card_trims_what_it_sends() {
        let padded = NewCard::new(format!("  {}  ", "x".repeat(30)), " https://example.com/a.jpg ");
        assert_eq!(padded.name.chars().count(), 30);
        assert_eq!(padded.link, "https://example.com/a.jpg");
        assert!(padded.validate().is_ok());

        let literal = NewCard {
            name: format!(" {} ", "x".repeat(30)),
            link: "https://example.com/a.jpg".into(),
        };
        assert!(literal.validate().is_err());
    }

    #[test]
    fn new_card_rejects_non_http_link() {
        assert!(NewCard::new("Altai", "ftp://example.com/a.jpg").validate().is_err());
        assert!(NewCard::new("Altai", "not a link").validate().is_err());
    }
}
