//! In-process notification bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`NotificationBus`] is the publish/subscribe hub for [`Notification`]s.
//! Publishing never blocks, so it is safe to call from synchronous code.

use chrono::{DateTime, Utc};
use grainboard_core::types::EntityId;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

// ---------------------------------------------------------------------------
// Notification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
}

/// A user-facing notification about a dashboard operation.
///
/// Constructed via [`Notification::success`] or [`Notification::error`] and
/// enriched with [`with_event`](Notification::with_event) and
/// [`with_source`](Notification::with_source).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,

    /// Short headline, e.g. `"Projet créé"`.
    pub title: String,

    /// One-sentence detail shown under the title.
    pub description: String,

    /// Dot-separated operation name, e.g. `"project.created"`.
    pub event_type: Option<String>,

    /// Optional source entity kind (e.g. `"project"`, `"grain"`).
    pub source_entity_type: Option<String>,

    /// Optional source entity id.
    pub source_entity_id: Option<EntityId>,

    /// When the notification was created (UTC).
    pub timestamp: DateTime<Utc>,
}

impl Notification {
    fn new(
        kind: NotificationKind,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
            event_type: None,
            source_entity_type: None,
            source_entity_id: None,
            timestamp: Utc::now(),
        }
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, title, description)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, title, description)
    }

    /// Tag the notification with the operation that produced it.
    pub fn with_event(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = Some(event_type.into());
        self
    }

    /// Attach a source entity to the notification.
    pub fn with_source(
        mut self,
        entity_type: impl Into<String>,
        entity_id: impl Into<EntityId>,
    ) -> Self {
        self.source_entity_type = Some(entity_type.into());
        self.source_entity_id = Some(entity_id.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

// ---------------------------------------------------------------------------
// NotificationBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
pub const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out notification bus.
///
/// Wraps a [`broadcast::Sender`] so that any number of subscribers can
/// independently receive every published [`Notification`].
///
/// # Usage
///
/// ```rust
/// use grainboard_events::bus::{Notification, NotificationBus};
///
/// let bus = NotificationBus::default();
/// let mut rx = bus.subscribe();
///
/// bus.publish(Notification::success("Projet créé", "Le projet X a été créé avec succès."));
/// assert_eq!(rx.try_recv().unwrap().title, "Projet créé");
/// ```
#[derive(Debug)]
pub struct NotificationBus {
    sender: broadcast::Sender<Notification>,
}

impl NotificationBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed messages are dropped
    /// and slow receivers will observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Publish a notification to all current subscribers.
    ///
    /// If there are no active subscribers the notification is dropped.
    pub fn publish(&self, notification: Notification) {
        tracing::trace!(
            kind = ?notification.kind,
            event_type = notification.event_type.as_deref().unwrap_or("-"),
            "Publishing notification"
        );
        // SendError only means nobody is subscribed.
        let _ = self.sender.send(notification);
    }

    /// Subscribe to all notifications published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for NotificationBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
