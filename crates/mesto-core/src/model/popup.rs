// ── Popup state machine ──
//
// Exactly one popup can be open at a time: the state is a single enum,
// so "two popups open" is not representable.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::card::{Card, SelectedCard};

/// The form popups a user can open from the profile section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum PopupKind {
    EditProfile,
    AddPlace,
    EditAvatar,
}

/// Which modal dialog, if any, is currently shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "card", rename_all = "kebab-case")]
pub enum Popup {
    #[default]
    Closed,
    EditingProfile,
    AddingPlace,
    EditingAvatar,
    /// Full-size image view of a card.
    ViewingImage(SelectedCard),
    /// "Are you sure?" dialog guarding a card deletion.
    ConfirmingDelete(Arc<Card>),
}

impl Popup {
    /// The popup state that `kind` opens.
    pub fn opened(kind: PopupKind) -> Self {
        match kind {
            PopupKind::EditProfile => Self::EditingProfile,
            PopupKind::AddPlace => Self::AddingPlace,
            PopupKind::EditAvatar => Self::EditingAvatar,
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// The form kind this popup shows, if it is one of the form popups.
    pub fn kind(&self) -> Option<PopupKind> {
        match self {
            Self::EditingProfile => Some(PopupKind::EditProfile),
            Self::AddingPlace => Some(PopupKind::AddPlace),
            Self::EditingAvatar => Some(PopupKind::EditAvatar),
            Self::Closed | Self::ViewingImage(_) | Self::ConfirmingDelete(_) => None,
        }
    }

    /// The card shown in the image viewer; empty unless viewing an image.
    pub fn selected_card(&self) -> SelectedCard {
        match self {
            Self::ViewingImage(sel) => sel.clone(),
            _ => SelectedCard::default(),
        }
    }

    /// The card awaiting delete confirmation.
    pub fn pending_delete(&self) -> Option<&Arc<Card>> {
        match self {
            Self::ConfirmingDelete(card) => Some(card),
            _ => None,
        }
    }
}
