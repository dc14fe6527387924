// ── Failure notices ──
//
// Every failed handler publishes one `Notice` on the controller's
// broadcast channel so a host can surface it without awaiting the call.

use serde::Serialize;
use strum::Display;

use crate::model::CardId;

/// The user action a request belonged to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    LoadProfile,
    LoadCards,
    Like,
    Unlike,
    DeleteCard,
    UpdateProfile,
    UpdateAvatar,
    AddCard,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Notice {
    RequestFailed {
        action: Action,
        #[serde(skip_serializing_if = "Option::is_none")]
        card_id: Option<CardId>,
        message: String,
    },
}

impl Notice {
    pub fn action(&self) -> Action {
        match self {
            Self::RequestFailed { action, .. } => *action,
        }
    }
}
