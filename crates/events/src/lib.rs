//! Grainboard notification bus.
//!
//! Every dashboard mutation, successful or not, produces a
//! [`Notification`] that presentation layers render as a toast.
//!
//! - [`NotificationBus`]: in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`Notification`]: the notification envelope.

pub mod bus;

pub use bus::{Notification, NotificationBus, NotificationKind};
