// ── Reactive state stream ──
//
// Subscription type for consuming session changes from the store.

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

use crate::store::AppState;

/// A subscription to the session state.
///
/// Gives point-in-time snapshot access plus change notification, either
/// through [`changed()`](Self::changed) or by converting into a `Stream`.
pub struct StateStream {
    current: Arc<AppState>,
    receiver: watch::Receiver<Arc<AppState>>,
}

impl StateStream {
    pub(crate) fn new(mut receiver: watch::Receiver<Arc<AppState>>) -> Self {
        let current = receiver.borrow_and_update().clone();
        Self { current, receiver }
    }

    /// The snapshot captured at creation (or at the last `changed()`).
    pub fn current(&self) -> &Arc<AppState> {
        &self.current
    }

    /// The latest snapshot, which may be newer than `current()`.
    pub fn latest(&self) -> Arc<AppState> {
        self.receiver.borrow().clone()
    }

    /// Wait for the next change. Returns `None` once the controller is gone.
    pub async fn changed(&mut self) -> Option<Arc<AppState>> {
        self.receiver.changed().await.ok()?;
        let snap = self.receiver.borrow_and_update().clone();
        self.current = snap.clone();
        Some(snap)
    }

    /// Convert into a `Stream`. The first item is the current snapshot.
    pub fn into_stream(self) -> StateWatchStream {
        StateWatchStream {
            inner: WatchStream::new(self.receiver),
        }
    }
}

/// `Stream` adapter yielding a snapshot per state change.
pub struct StateWatchStream {
    inner: WatchStream<Arc<AppState>>,
}

impl Stream for StateWatchStream {
    type Item = Arc<AppState>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.inner).poll_next(cx)
    }
}
