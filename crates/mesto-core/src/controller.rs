// ── Controller ──
//
// Root of a gallery session. Owns the `AppState` store, fetches the
// profile and cards on start, and turns user intents into API calls
// whose results replace state wholesale. Failures never touch state:
// they are logged, broadcast as a `Notice`, and returned to the caller.

use std::sync::Arc;

use mesto_api::MestoClient;
use mesto_api::transport::{TlsMode, TransportConfig};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::api::GalleryApi;
use crate::command::{Command, CommandResult};
use crate::config::{SessionConfig, TlsVerification};
use crate::error::CoreError;
use crate::model::{Card, CardId, CurrentUser, NewCard, Popup, PopupKind, ProfileUpdate};
use crate::notice::{Action, Notice};
use crate::store::{AppState, SessionStore};
use crate::stream::StateStream;

const NOTICE_CHANNEL_SIZE: usize = 64;

// ── BootstrapReport ──────────────────────────────────────────────

/// Outcome of the two start-up fetches. Each side succeeded or failed
/// on its own; a failure left that part of the state untouched.
#[derive(Debug)]
pub struct BootstrapReport {
    pub user: Result<(), CoreError>,
    /// Number of cards loaded.
    pub cards: Result<usize, CoreError>,
}

impl BootstrapReport {
    pub fn is_complete(&self) -> bool {
        self.user.is_ok() && self.cards.is_ok()
    }

    /// Collapse into the first failure, profile first.
    pub fn into_result(self) -> Result<(), CoreError> {
        self.user?;
        self.cards?;
        Ok(())
    }
}

// ── Controller ───────────────────────────────────────────────────

/// The main entry point for consumers.
///
/// Cheaply cloneable via `Arc<ControllerInner>`. Generic over the API
/// seam so tests can drive it with an in-memory server.
pub struct Controller<A: GalleryApi = MestoClient> {
    inner: Arc<ControllerInner<A>>,
}

struct ControllerInner<A> {
    api: A,
    store: SessionStore,
    notice_tx: broadcast::Sender<Arc<Notice>>,
}

impl<A: GalleryApi> Clone for Controller<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Controller<MestoClient> {
    /// Build a controller over the HTTP client. Does NOT fetch anything;
    /// call [`bootstrap()`](Self::bootstrap) to load the session.
    pub fn from_config(config: &SessionConfig) -> Result<Self, CoreError> {
        let transport = build_transport(config);
        let client = MestoClient::from_token(
            config.server.as_str(),
            &config.cohort,
            &config.token,
            &transport,
        )?;
        debug!(base_url = %client.base_url(), "gallery client ready");
        Ok(Self::new(client))
    }
}

impl<A: GalleryApi> Controller<A> {
    pub fn new(api: A) -> Self {
        let (notice_tx, _) = broadcast::channel(NOTICE_CHANNEL_SIZE);
        Self {
            inner: Arc::new(ControllerInner {
                api,
                store: SessionStore::new(),
                notice_tx,
            }),
        }
    }

    /// Access the underlying API client.
    pub fn api(&self) -> &A {
        &self.inner.api
    }

    // ── State observation ────────────────────────────────────────

    pub fn snapshot(&self) -> Arc<AppState> {
        self.inner.store.snapshot()
    }

    pub fn subscribe(&self) -> StateStream {
        StateStream::new(self.inner.store.subscribe())
    }

    /// Subscribe to failure notices.
    pub fn notices(&self) -> broadcast::Receiver<Arc<Notice>> {
        self.inner.notice_tx.subscribe()
    }

    // ── Session bootstrap ────────────────────────────────────────

    /// Fetch the profile and the card list concurrently. Each result is
    /// applied as soon as its own request completes.
    pub async fn bootstrap(&self) -> BootstrapReport {
        let user = async {
            let user = self
                .inner
                .api
                .get_user_information()
                .await
                .map_err(|e| self.fail(Action::LoadProfile, None, e))?;
            debug!(user = %user.id, "profile loaded");
            self.inner.store.replace_user(Arc::new(user));
            Ok::<_, CoreError>(())
        };

        let cards = async {
            let cards = self
                .inner
                .api
                .get_initial_cards()
                .await
                .map_err(|e| self.fail(Action::LoadCards, None, e))?;
            let count = cards.len();
            self.inner.store.replace_cards(cards);
            Ok::<_, CoreError>(count)
        };

        let (user, cards) = tokio::join!(user, cards);
        let report = BootstrapReport { user, cards };
        info!(
            profile = report.user.is_ok(),
            cards = report.cards.as_ref().ok().copied(),
            "session bootstrap finished"
        );
        report
    }

    /// Start [`bootstrap()`](Self::bootstrap) in the background.
    pub fn spawn_bootstrap(&self) -> JoinHandle<BootstrapReport> {
        let this = self.clone();
        tokio::spawn(async move { this.bootstrap().await })
    }

    // ── Popups ───────────────────────────────────────────────────

    /// Open one of the form popups, replacing whatever was open.
    pub fn open(&self, kind: PopupKind) {
        self.inner.store.set_popup(Popup::opened(kind));
    }

    /// Show `card` in the full-size image popup.
    pub fn view_image(&self, card: &Card) {
        self.inner.store.set_popup(Popup::ViewingImage(card.selection()));
    }

    pub fn close_all(&self) {
        self.inner.store.close_all();
    }

    // ── Cards ────────────────────────────────────────────────────

    /// Like `card` if the current user hasn't, unlike it otherwise.
    ///
    /// The server's reply replaces the card with the same id; if that
    /// card has since been removed the reply is dropped.
    pub async fn toggle_like(&self, card: &Card) -> Result<Arc<Card>, CoreError> {
        let liked = self.snapshot().is_liked(card);
        let (action, result) = if liked {
            (Action::Unlike, self.inner.api.delete_like(&card.id).await)
        } else {
            (Action::Like, self.inner.api.add_like(&card.id).await)
        };

        let updated = Arc::new(result.map_err(|e| self.fail(action, Some(&card.id), e))?);
        if !self.inner.store.replace_card(Arc::clone(&updated)) {
            debug!(card = %card.id, "card no longer listed; like reply dropped");
        }
        Ok(updated)
    }

    /// Delete a card immediately, without confirmation.
    pub async fn delete_card(&self, id: &CardId) -> Result<(), CoreError> {
        self.inner
            .api
            .delete_card(id)
            .await
            .map_err(|e| self.fail(Action::DeleteCard, Some(id), e))?;
        self.inner.store.remove_card(id);
        Ok(())
    }

    /// Ask for confirmation before deleting `card`.
    pub fn request_delete(&self, card: Arc<Card>) {
        self.inner.store.set_popup(Popup::ConfirmingDelete(card));
    }

    /// Delete the card awaiting confirmation and close the dialog. On
    /// failure the dialog stays open.
    pub async fn confirm_delete(&self) -> Result<CardId, CoreError> {
        let pending = self
            .snapshot()
            .popup
            .pending_delete()
            .map(|card| card.id.clone())
            .ok_or(CoreError::NothingToConfirm)?;

        self.delete_card(&pending).await?;
        self.close_all();
        Ok(pending)
    }

    /// Validate and publish a new card. It goes to the front of the list.
    pub async fn add_card(&self, card: NewCard) -> Result<Arc<Card>, CoreError> {
        card.validate()?;
        let created = self
            .inner
            .api
            .add_card(&card)
            .await
            .map_err(|e| self.fail(Action::AddCard, None, e))?;

        let created = Arc::new(created);
        self.inner.store.prepend_card(Arc::clone(&created));
        self.close_all();
        Ok(created)
    }

    // ── Profile ──────────────────────────────────────────────────

    pub async fn update_user(&self, update: &ProfileUpdate) -> Result<Arc<CurrentUser>, CoreError> {
        let user = self
            .inner
            .api
            .change_user_information(update)
            .await
            .map_err(|e| self.fail(Action::UpdateProfile, None, e))?;
        Ok(self.apply_user(user))
    }

    pub async fn update_avatar(&self, avatar_url: &str) -> Result<Arc<CurrentUser>, CoreError> {
        let user = self
            .inner
            .api
            .change_profile_avatar(avatar_url)
            .await
            .map_err(|e| self.fail(Action::UpdateAvatar, None, e))?;
        Ok(self.apply_user(user))
    }

    fn apply_user(&self, user: CurrentUser) -> Arc<CurrentUser> {
        let user = Arc::new(user);
        self.inner.store.replace_user(Arc::clone(&user));
        self.close_all();
        user
    }

    // ── Command execution ────────────────────────────────────────

    /// Route a command to its handler.
    pub async fn execute(&self, cmd: Command) -> Result<CommandResult, CoreError> {
        debug!(?cmd, "executing command");
        match cmd {
            Command::ToggleLike { id } => {
                let card = self.find_card(&id)?;
                self.toggle_like(&card).await.map(CommandResult::Card)
            }
            Command::DeleteCard { id } => {
                self.delete_card(&id).await?;
                Ok(CommandResult::Deleted(id))
            }
            Command::RequestDelete { id } => {
                let card = self.find_card(&id)?;
                self.request_delete(card);
                Ok(CommandResult::Ok)
            }
            Command::ConfirmDelete => self.confirm_delete().await.map(CommandResult::Deleted),
            Command::AddCard(card) => self.add_card(card).await.map(CommandResult::Card),
            Command::UpdateProfile(update) => {
                self.update_user(&update).await.map(CommandResult::User)
            }
            Command::UpdateAvatar { avatar_url } => self
                .update_avatar(&avatar_url)
                .await
                .map(CommandResult::User),
            Command::OpenPopup(kind) => {
                self.open(kind);
                Ok(CommandResult::Ok)
            }
            Command::ViewImage { id } => {
                let card = self.find_card(&id)?;
                self.view_image(&card);
                Ok(CommandResult::Ok)
            }
            Command::CloseAll => {
                self.close_all();
                Ok(CommandResult::Ok)
            }
        }
    }

    fn find_card(&self, id: &CardId) -> Result<Arc<Card>, CoreError> {
        self.snapshot()
            .card(id)
            .cloned()
            .ok_or_else(|| CoreError::CardNotFound {
                identifier: id.to_string(),
            })
    }

    /// Log and broadcast a failed request, handing the error back.
    fn fail(&self, action: Action, card_id: Option<&CardId>, err: CoreError) -> CoreError {
        match card_id {
            Some(id) => warn!(%action, card = %id, error = %err, "request failed"),
            None => warn!(%action, error = %err, "request failed"),
        }
        // No subscribers is fine: the error still reaches the caller.
        let _ = self.inner.notice_tx.send(Arc::new(Notice::RequestFailed {
            action,
            card_id: card_id.cloned(),
            message: err.to_string(),
        }));
        err
    }
}

fn build_transport(config: &SessionConfig) -> TransportConfig {
    TransportConfig {
        tls: match &config.tls {
            TlsVerification::SystemDefaults => TlsMode::System,
            TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
        },
        timeout: config.timeout,
    }
}
