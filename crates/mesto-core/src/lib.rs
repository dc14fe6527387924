// mesto-core: Session state and user-intent handling between mesto-api and hosts (CLI).

pub mod api;
pub mod command;
pub mod config;
pub mod controller;
pub mod convert;
pub mod error;
pub mod model;
pub mod notice;
pub mod store;
pub mod stream;

// ── Primary re-exports ──────────────────────────────────────────────
pub use api::GalleryApi;
pub use command::{Command, CommandResult};
pub use config::{DEFAULT_SERVER, SessionConfig, TlsVerification};
pub use controller::{BootstrapReport, Controller};
pub use error::CoreError;
pub use notice::{Action, Notice};
pub use store::AppState;
pub use stream::{StateStream, StateWatchStream};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    Card, CardId, CardView, CurrentUser, Like, NewCard, Popup, PopupKind, ProfileUpdate,
    SelectedCard, UserId,
};
