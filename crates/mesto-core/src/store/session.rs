// ── Reactive session store ──
//
// Single owner of `AppState`. Every mutation goes through `send_modify`
// on one watch channel, so subscribers always see a complete snapshot
// and never a half-applied change.

use std::sync::Arc;

use tokio::sync::watch;

use super::state::AppState;
use crate::model::{Card, CardId, CurrentUser, Popup};

pub(crate) struct SessionStore {
    state: watch::Sender<Arc<AppState>>,
}

impl SessionStore {
    pub(crate) fn new() -> Self {
        let (state, _) = watch::channel(Arc::new(AppState::default()));
        Self { state }
    }

    pub(crate) fn snapshot(&self) -> Arc<AppState> {
        self.state.borrow().clone()
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<Arc<AppState>> {
        self.state.subscribe()
    }

    fn update(&self, f: impl FnOnce(&mut AppState)) {
        self.state.send_modify(|snap| {
            let mut next = AppState::clone(snap);
            f(&mut next);
            *snap = Arc::new(next);
        });
    }

    // ── Mutations ────────────────────────────────────────────────────

    pub(crate) fn replace_user(&self, user: Arc<CurrentUser>) {
        self.update(|s| s.current_user = Some(user));
    }

    pub(crate) fn replace_cards(&self, cards: Vec<Card>) {
        let cards: Vec<Arc<Card>> = cards.into_iter().map(Arc::new).collect();
        self.update(|s| s.cards = cards);
    }

    /// Swap in the server's version of a card. Returns `false` (and
    /// leaves the state untouched) when no card has that id.
    pub(crate) fn replace_card(&self, card: Arc<Card>) -> bool {
        let mut replaced = false;
        self.state.send_if_modified(|snap| {
            let Some(idx) = snap.cards.iter().position(|c| c.id == card.id) else {
                return false;
            };
            let mut next = AppState::clone(snap);
            next.cards[idx] = card;
            *snap = Arc::new(next);
            replaced = true;
            true
        });
        replaced
    }

    /// Drop the card with `id`, keeping the order of the rest. A delete
    /// confirmation for that card is closed with it.
    pub(crate) fn remove_card(&self, id: &CardId) -> Option<Arc<Card>> {
        let mut removed = None;
        self.state.send_if_modified(|snap| {
            let Some(idx) = snap.cards.iter().position(|c| &c.id == id) else {
                return false;
            };
            let mut next = AppState::clone(snap);
            removed = Some(next.cards.remove(idx));
            if next.popup.pending_delete().is_some_and(|c| &c.id == id) {
                next.popup = Popup::Closed;
            }
            *snap = Arc::new(next);
            true
        });
        removed
    }

    pub(crate) fn prepend_card(&self, card: Arc<Card>) {
        self.update(|s| s.cards.insert(0, card));
    }

    pub(crate) fn set_popup(&self, popup: Popup) {
        self.update(|s| s.popup = popup);
    }

    /// Close whichever popup is open. The image selection lives inside
    /// `Popup::ViewingImage`, so it is cleared along with it.
    pub(crate) fn close_all(&self) {
        self.set_popup(Popup::Closed);
    }
}
