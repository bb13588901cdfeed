//! Transient, self-clearing notifications ("Added to bag").
//!
//! One notice is live at a time. Posting a new one supersedes the previous
//! notice and its pending clear. A clear only ever removes the notice it was
//! scheduled for, so a late timer cannot erase a newer message.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde::Serialize;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use uuid::Uuid;

/// Reference lifetime of a notice.
pub const DEFAULT_NOTICE_TTL: Duration = Duration::from_millis(3000);

/// Identity of a posted notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NoticeId(Uuid);

impl NoticeId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for NoticeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A live notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub id: NoticeId,
    pub message: String,
}

#[derive(Default)]
struct Slot {
    current: Option<Notice>,
    pending_clear: Option<JoinHandle<()>>,
}

impl Slot {
    /// Clear `id` if it is still the live notice. Returns whether it was.
    fn clear_if_current(&mut self, id: NoticeId) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }
}

/// The notification channel.
pub struct Notices {
    slot: Arc<Mutex<Slot>>,
    ttl: Duration,
}

impl Default for Notices {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_TTL)
    }
}

impl std::fmt::Debug for Notices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notices")
            .field("current", &self.current())
            .field("ttl", &self.ttl)
            .finish()
    }
}

fn lock(slot: &Mutex<Slot>) -> MutexGuard<'_, Slot> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Notices {
    /// Create a channel whose notices clear after `ttl`.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot::default())),
            ttl,
        }
    }

    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// The live notice, if any.
    #[must_use]
    pub fn current(&self) -> Option<Notice> {
        lock(&self.slot).current.clone()
    }

    /// Show `message`, replacing whatever was showing.
    ///
    /// The clear is scheduled on the current tokio runtime. Outside a runtime
    /// the notice stays until superseded or dismissed.
    pub fn post(&self, message: impl Into<String>) -> NoticeId {
        let id = NoticeId::new();
        let message = message.into();
        let mut slot = lock(&self.slot);

        if let Some(previous) = slot.pending_clear.take() {
            previous.abort();
        }
        debug!(%id, %message, "Posted notice");
        slot.current = Some(Notice { id, message });

        match Handle::try_current() {
            Ok(runtime) => {
                let shared = Arc::clone(&self.slot);
                let ttl = self.ttl;
                slot.pending_clear = Some(runtime.spawn(async move {
                    tokio::time::sleep(ttl).await;
                    let mut slot = lock(&shared);
                    if slot.clear_if_current(id) {
                        slot.pending_clear = None;
                        debug!(%id, "Notice expired");
                    }
                }));
            }
            Err(_) => warn!(%id, "No tokio runtime; notice will not expire on its own"),
        }
        id
    }

    /// Clear `id` early. Ignored if a newer notice has replaced it.
    pub fn dismiss(&self, id: NoticeId) -> bool {
        let mut slot = lock(&self.slot);
        let cleared = slot.clear_if_current(id);
        if cleared {
            if let Some(pending) = slot.pending_clear.take() {
                pending.abort();
            }
        }
        cleared
    }
}

impl Drop for Notices {
    fn drop(&mut self) {
        if let Some(pending) = lock(&self.slot).pending_clear.take() {
            pending.abort();
        }
    }
}
