//! Transient user-facing notifications.
//!
//! Fetch failures land in a bounded in-process queue; the web layer drains
//! it so the UI can show the messages as toasts. Delivery is at-most-once:
//! draining removes.

use std::collections::VecDeque;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::Mutex;

/// Undelivered notifications kept at most; past this the oldest is dropped.
const MAX_PENDING: usize = 32;

/// A transient, non-blocking message for the end user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub title: String,
    /// Detail line; absent when the failure carried no server message.
    pub message: Option<String>,
    pub raised_at: DateTime<Utc>,
}

/// Cheaply clonable handle to the notification queue.
#[derive(Clone, Default)]
pub struct Notifier {
    pending: Arc<Mutex<VecDeque<Notification>>>,
}

impl Notifier {
    /// Create an empty notifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a notification, dropping the oldest once the queue is full.
    pub async fn notify(&self, title: impl Into<String>, message: Option<String>) {
        let notification = Notification {
            title: title.into(),
            message,
            raised_at: Utc::now(),
        };

        let mut pending = self.pending.lock().await;
        if pending.len() == MAX_PENDING {
            pending.pop_front();
        }
        pending.push_back(notification);
    }

    /// Remove and return everything pending, oldest first.
    pub async fn drain(&self) -> Vec<Notification> {
        self.pending.lock().await.drain(..).collect()
    }

    /// Number of undelivered notifications.
    pub async fn len(&self) -> usize {
        self.pending.lock().await.len()
    }

    /// Check if nothing is pending.
    pub async fn is_empty(&self) -> bool {
        self.pending.lock().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn drain_returns_oldest_first_and_empties() {
        let notifier = Notifier::new();
        notifier.notify("first", None).await;
        notifier.notify("second", Some("detail".into())).await;

        let drained = notifier.drain().await;
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].title, "first");
        assert_eq!(drained[1].title, "second");
        assert_eq!(drained[1].message.as_deref(), Some("detail"));

        assert!(notifier.is_empty().await);
        assert!(notifier.drain().await.is_empty());
    }

    #[tokio::test]
    async fn queue_is_bounded_dropping_oldest() {
        let notifier = Notifier::new();
        for i in 0..MAX_PENDING + 3 {
            notifier.notify(format!("n{i}"), None).await;
        }

        let drained = notifier.drain().await;
        assert_eq!(drained.len(), MAX_PENDING);
        assert_eq!(drained[0].title, "n3");
        assert_eq!(drained.last().unwrap().title, format!("n{}", MAX_PENDING + 2));
    }
}
