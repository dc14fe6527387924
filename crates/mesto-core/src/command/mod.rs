// ── Command API ──
//
// Every user intent the gallery view can emit, as one enum. The
// controller routes each variant to its typed handler in `execute()`.

use std::sync::Arc;

use crate::model::{Card, CardId, CurrentUser, NewCard, PopupKind, ProfileUpdate};

/// A user intent against the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // ── Card operations ──────────────────────────────────────────────
    ToggleLike { id: CardId },
    DeleteCard { id: CardId },
    RequestDelete { id: CardId },
    ConfirmDelete,
    AddCard(NewCard),

    // ── Profile operations ───────────────────────────────────────────
    UpdateProfile(ProfileUpdate),
    UpdateAvatar { avatar_url: String },

    // ── Popups ───────────────────────────────────────────────────────
    OpenPopup(PopupKind),
    ViewImage { id: CardId },
    CloseAll,
}

impl Command {
    /// Whether running this command issues a network request.
    pub fn is_remote(&self) -> bool {
        !matches!(
            self,
            Self::RequestDelete { .. } | Self::OpenPopup(_) | Self::ViewImage { .. } | Self::CloseAll
        )
    }
}

/// What a command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// State changed locally; nothing to report.
    Ok,
    /// The server's version of a card after like/unlike/add.
    Card(Arc<Card>),
    /// The card that was deleted.
    Deleted(CardId),
    /// The user as confirmed by the server after a profile change.
    User(Arc<CurrentUser>),
}
