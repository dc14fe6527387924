// ── State store ──
//
// `SessionStore` owns the one mutable `AppState`; readers only ever get
// `Arc<AppState>` snapshots.

mod session;
mod state;

pub(crate) use session::SessionStore;
pub use state::AppState;
