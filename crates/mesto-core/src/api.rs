// ── Gallery API seam ──
//
// The controller talks to the server through `GalleryApi` so that any
// transport (the reqwest-backed `MestoClient`, or an in-memory fake in
// tests) can drive it. Implementations return domain types and
// `CoreError`; wire types never leak past this module.

use std::future::Future;

use mesto_api::MestoClient;
use tracing::debug;

use crate::error::CoreError;
use crate::model::{Card, CardId, CurrentUser, NewCard, ProfileUpdate};

/// Asynchronous operations the gallery server offers.
pub trait GalleryApi: Send + Sync + 'static {
    fn get_user_information(&self) -> impl Future<Output = Result<CurrentUser, CoreError>> + Send;

    /// Cards in server order (newest first).
    fn get_initial_cards(&self) -> impl Future<Output = Result<Vec<Card>, CoreError>> + Send;

    fn change_user_information(
        &self,
        update: &ProfileUpdate,
    ) -> impl Future<Output = Result<CurrentUser, CoreError>> + Send;

    fn change_profile_avatar(
        &self,
        avatar_url: &str,
    ) -> impl Future<Output = Result<CurrentUser, CoreError>> + Send;

    fn add_like(&self, id: &CardId) -> impl Future<Output = Result<Card, CoreError>> + Send;

    fn delete_like(&self, id: &CardId) -> impl Future<Output = Result<Card, CoreError>> + Send;

    fn delete_card(&self, id: &CardId) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn add_card(&self, card: &NewCard) -> impl Future<Output = Result<Card, CoreError>> + Send;
}

impl GalleryApi for MestoClient {
    async fn get_user_information(&self) -> Result<CurrentUser, CoreError> {
        let raw = self.get_user_info().await?;
        Ok(raw.into())
    }

    async fn get_initial_cards(&self) -> Result<Vec<Card>, CoreError> {
        let raw = self.list_cards().await?;
        debug!(count = raw.len(), "cards fetched");
        Ok(raw.into_iter().map(Card::from).collect())
    }

    async fn change_user_information(&self, update: &ProfileUpdate) -> Result<CurrentUser, CoreError> {
        let raw = self.update_user_info(&update.name, &update.about).await?;
        Ok(raw.into())
    }

    async fn change_profile_avatar(&self, avatar_url: &str) -> Result<CurrentUser, CoreError> {
        let raw = self.update_avatar(avatar_url).await?;
        Ok(raw.into())
    }

    async fn add_like(&self, id: &CardId) -> Result<Card, CoreError> {
        let raw = self.like_card(id.as_str()).await?;
        Ok(raw.into())
    }

    async fn delete_like(&self, id: &CardId) -> Result<Card, CoreError> {
        let raw = self.unlike_card(id.as_str()).await?;
        Ok(raw.into())
    }

    async fn delete_card(&self, id: &CardId) -> Result<(), CoreError> {
        MestoClient::delete_card(self, id.as_str()).await?;
        Ok(())
    }

    async fn add_card(&self, card: &NewCard) -> Result<Card, CoreError> {
        let raw = self.create_card(&card.name, &card.link).await?;
        Ok(raw.into())
    }
}
