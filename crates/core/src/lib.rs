//! Domain primitives shared by every grainboard crate.
//!
//! - [`status`]: the workflow taxonomy shared by projects and grains,
//!   plus the grain type enumeration.
//! - [`kanban`]: stable grouping of status-bearing items into board
//!   columns.
//! - [`progress`]: grain completion ratio shown on project cards.
//! - [`roles`]: explicit team roles carried by users.
//! - [`validation`]: field validators used by the input DTOs.

pub mod error;
pub mod kanban;
pub mod progress;
pub mod roles;
pub mod status;
pub mod types;
pub mod validation;
