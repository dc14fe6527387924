// ── Domain model ──
//
// Canonical types the controller and its consumers share. Wire types from
// `mesto-api` are converted into these in `convert.rs`.

pub mod card;
pub mod entity_id;
pub mod popup;
pub mod user;

pub use card::{Card, CardView, Like, NewCard, SelectedCard};
pub use entity_id::{CardId, UserId};
pub use popup::{Popup, PopupKind};
pub use user::{CurrentUser, ProfileUpdate};
