// mesto-api: Async Rust client for the Mesto photo-card gallery API

pub mod cards;
pub mod client;
pub mod error;
pub mod models;
pub mod transport;
pub mod users;

pub use client::MestoClient;
pub use error::Error;
pub use models::{CardResponse, UserRef, UserResponse};
pub use transport::{TlsMode, TransportConfig};
