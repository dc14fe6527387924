// Card endpoints
//
// Likes are a sub-resource of a card: PUT adds the caller's like,
// DELETE removes it, and both answer with the updated card.

use tracing::debug;

use crate::client::MestoClient;
use crate::error::Error;
use crate::models::{CardResponse, NewCardBody};

impl MestoClient {
    /// List all cards, in server order.
    ///
    /// `GET cards`
    pub async fn list_cards(&self) -> Result<Vec<CardResponse>, Error> {
        debug!("listing cards");
        self.get("cards").await
    }

    /// Publish a new card.
    ///
    /// `POST cards` with `{"name": "...", "link": "..."}`
    pub async fn create_card(&self, name: &str, link: &str) -> Result<CardResponse, Error> {
        debug!(name, link, "creating card");
        let body = NewCardBody {
            name: name.to_owned(),
            link: link.to_owned(),
        };
        self.post("cards", &body).await
    }

    /// Delete a card owned by the caller.
    ///
    /// `DELETE cards/{id}`
    pub async fn delete_card(&self, card_id: &str) -> Result<(), Error> {
        debug!(card_id, "deleting card");
        self.delete(&format!("cards/{card_id}")).await
    }

    /// Like a card.
    ///
    /// `PUT cards/{id}/likes`
    pub async fn like_card(&self, card_id: &str) -> Result<CardResponse, Error> {
        debug!(card_id, "liking card");
        self.put(&format!("cards/{card_id}/likes")).await
    }

    /// Remove the caller's like from a card.
    ///
    /// `DELETE cards/{id}/likes`
    pub async fn unlike_card(&self, card_id: &str) -> Result<CardResponse, Error> {
        debug!(card_id, "unliking card");
        self.delete_with_response(&format!("cards/{card_id}/likes"))
            .await
    }
}
