//! Mutation and lookup operations over the [`Store`](crate::Store).
//!
//! Repositories are stateless unit structs; the store is passed to every
//! call. Update operations return `None` when the target does not exist.

pub mod grain_repo;
pub mod project_repo;

pub use grain_repo::GrainRepo;
pub use project_repo::ProjectRepo;
