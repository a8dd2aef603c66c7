//! Domain model structs and DTOs.
//!
//! Each entity submodule contains:
//! - A `Serialize` + `Deserialize` entity struct
//! - A `Validate` create DTO (where the entity can be created)
//! - A `Validate` update DTO (all `Option` fields) for partial merges

pub mod client;
pub mod contact;
pub mod grain;
pub mod project;
pub mod user;
pub mod view;
