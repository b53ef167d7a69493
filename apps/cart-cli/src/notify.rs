//! # Notices
//!
//! The side channel cart operations report through. Operations never
//! return an error to their caller; a failed operation leaves the cart as
//! it was and emits exactly one [`Notice`].
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Outcome                                   Notice                       │
//! │  ───────                                   ──────                       │
//! │  stock too low / amount < 1                StockInsufficient            │
//! │  add: lookup or storage failure            AddFailed                    │
//! │  remove: not in cart or storage failure    RemoveFailed                 │
//! │  update: lookup, not in cart, storage      UpdateFailed                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;

/// A user-facing error notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    StockInsufficient,
    AddFailed,
    RemoveFailed,
    UpdateFailed,
}

impl Notice {
    /// The message shown to the shopper.
    pub fn message(&self) -> &'static str {
        match self {
            Notice::StockInsufficient => "Quantidade solicitada fora de estoque",
            Notice::AddFailed => "Erro na adição do produto",
            Notice::RemoveFailed => "Erro na remoção do produto",
            Notice::UpdateFailed => "Erro na alteração de quantidade do produto",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Receives notices from the cart store.
pub trait Notifier: Send {
    fn notify(&self, notice: Notice);
}

/// Notifier that keeps every notice for later display.
///
/// Clones share the same buffer, so the caller keeps one handle and gives
/// another to the store.
#[derive(Debug, Clone, Default)]
pub struct NoticeLog {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl NoticeLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the notices received so far, oldest first.
    pub fn snapshot(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drains the buffer.
    pub fn take(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.notices.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Notifier for NoticeLog {
    fn notify(&self, notice: Notice) {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            Notice::StockInsufficient.to_string(),
            "Quantidade solicitada fora de estoque"
        );
        assert_eq!(Notice::AddFailed.message(), "Erro na adição do produto");
        assert_eq!(Notice::RemoveFailed.message(), "Erro na remoção do produto");
        assert_eq!(
            Notice::UpdateFailed.message(),
            "Erro na alteração de quantidade do produto"
        );
    }

    #[test]
    fn test_log_clones_share_buffer() {
        let log = NoticeLog::new();
        let handle = log.clone();

        handle.notify(Notice::AddFailed);
        handle.notify(Notice::StockInsufficient);

        assert_eq!(
            log.snapshot(),
            vec![Notice::AddFailed, Notice::StockInsufficient]
        );
        assert_eq!(log.take().len(), 2);
        assert!(log.snapshot().is_empty());
    }

    #[test]
    fn test_serializes_as_snake_case() {
        let json = serde_json::to_string(&Notice::StockInsufficient).unwrap();
        assert_eq!(json, "\"stock_insufficient\"");
    }
}
