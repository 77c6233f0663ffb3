//! Resource list controllers.
//!
//! One controller per managed collection. Controllers are cheap clones over
//! shared interior state, so a UI layer can hold one handle per view while
//! background tasks drive the same instance.

mod collaborators;
mod products;

pub use collaborators::*;
pub use products::*;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::errors::ApiError;

/// What a notice means to the person reading it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

/// User-visible outcome message for the most recent operation.
///
/// One slot per controller carries mutation outcomes, list failures, and
/// permission notices; the kind disambiguates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }
}

/// Snapshot of a controller's list state.
#[derive(Debug, Clone)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub notice: Option<Notice>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            notice: None,
        }
    }
}

/// Confirmation seam for destructive operations.
///
/// Mutations that need an explicit yes take the prompt through this trait so
/// drivers and tests decide interactively or by policy.
pub trait ConfirmPrompt: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Policy that approves every prompt. For non-interactive drivers.
pub struct AlwaysConfirm;

impl ConfirmPrompt for AlwaysConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Shared list state plus the request sequence that resolves overlapping
/// fetches: a completing request applies its outcome only while its ticket
/// is still the latest issued.
pub(crate) struct ListStore<T> {
    state: Arc<RwLock<ListState<T>>>,
    seq: Arc<AtomicU64>,
}

impl<T> Clone for ListStore<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            seq: Arc::clone(&self.seq),
        }
    }
}

impl<T: Clone> ListStore<T> {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(ListState::default())),
            seq: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Start a list request: issue a ticket, raise the loading flag, clear
    /// the previous notice.
    pub fn begin_list(&self) -> u64 {
        let ticket = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        let mut state = self.state.write().expect("list state lock poisoned");
        state.loading = true;
        state.notice = None;
        ticket
    }

    /// Terminate a list request. Loading is cleared on every outcome; a
    /// stale ticket leaves state entirely untouched because a newer request
    /// now owns it.
    pub fn finish_list(&self, ticket: u64, outcome: Result<Vec<T>, ApiError>, load_error: &str) {
        if self.seq.load(Ordering::SeqCst) != ticket {
            tracing::debug!("Discarding stale list response (ticket {})", ticket);
            return;
        }

        let mut state = self.state.write().expect("list state lock poisoned");
        state.loading = false;
        match outcome {
            Ok(items) => {
                state.items = items;
            }
            Err(err) => {
                state.items = Vec::new();
                state.notice = Some(Notice::error(format!("{}: {}", load_error, err.message())));
            }
        }
    }

    pub fn snapshot(&self) -> ListState<T> {
        self.state.read().expect("list state lock poisoned").clone()
    }

    pub fn set_notice(&self, notice: Notice) {
        self.state
            .write()
            .expect("list state lock poisoned")
            .notice = Some(notice);
    }

    /// Invalidate all in-flight requests; their results will be discarded on
    /// arrival. Used when the owning view goes away.
    pub fn invalidate(&self) {
        self.seq.fetch_add(1, Ordering::SeqCst);
    }
}
