//! In-memory storage for the grainboard dashboard.
//!
//! - [`store::Store`] owns every collection and is passed explicitly to
//!   the resolver and the repositories.
//! - [`models`] holds entity structs, input DTOs and read views.
//! - [`repositories`] holds the create/update/delete operations.
//! - [`resolver`] joins entities into composite read-only views.
//! - [`seed`] supplies the initial collections.

pub mod models;
pub mod repositories;
pub mod resolver;
pub mod seed;
pub mod store;

pub use seed::{Seed, SeedError};
pub use store::Store;
