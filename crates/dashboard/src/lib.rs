//! The grainboard dashboard service.
//!
//! [`Dashboard`] owns the store and the notification bus. It validates
//! input DTOs, runs repository mutations, publishes one notification per
//! outcome, and exposes the read projections the kanban and table views
//! render.

pub mod board;
pub mod config;
pub mod error;
pub mod messages;
pub mod service;

pub use config::DashboardConfig;
pub use error::{DashboardError, DashboardResult};
pub use service::Dashboard;
