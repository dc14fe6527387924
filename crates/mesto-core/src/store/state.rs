// ── Session state snapshot ──

use std::sync::Arc;

use serde::Serialize;

use crate::model::{Card, CardId, CardView, CurrentUser, Popup, SelectedCard};

/// Everything the gallery view renders, as one immutable value.
///
/// Published by [`SessionStore`](super::SessionStore) as `Arc<AppState>`;
/// a new snapshot is built for every mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AppState {
    /// `None` until the profile fetch succeeds.
    pub current_user: Option<Arc<CurrentUser>>,
    /// Cards in server order.
    pub cards: Vec<Arc<Card>>,
    pub popup: Popup,
}

impl AppState {
    /// The card shown in the image popup (empty unless one is open).
    pub fn selected_card(&self) -> SelectedCard {
        self.popup.selected_card()
    }

    pub fn card(&self, id: &CardId) -> Option<&Arc<Card>> {
        self.cards.iter().find(|c| &c.id == id)
    }

    /// Project every card for the current user, preserving order.
    pub fn card_views(&self) -> Vec<CardView> {
        let viewer = self.current_user.as_deref().map(|u| &u.id);
        self.cards
            .iter()
            .map(|card| CardView::project(card, viewer))
            .collect()
    }

    /// Whether the current user has liked `card`. False before the
    /// profile has loaded.
    pub fn is_liked(&self, card: &Card) -> bool {
        self.current_user
            .as_deref()
            .is_some_and(|u| card.is_liked_by(&u.id))
    }
}
