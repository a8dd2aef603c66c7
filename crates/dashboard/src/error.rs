use grainboard_core::error::CoreError;
use grainboard_db::SeedError;

use crate::messages;

/// Error type for dashboard operations.
///
/// Wraps [`CoreError`] for domain errors and adds input and seed failures.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// A domain-level error from `grainboard_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An input DTO failed field validation.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] validator::ValidationErrors),

    /// The seed could not be read or parsed.
    #[error(transparent)]
    Seed(#[from] SeedError),
}

/// Convenience type alias for dashboard return values.
pub type DashboardResult<T> = Result<T, DashboardError>;

impl DashboardError {
    /// Text for the error notification shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            DashboardError::Core(CoreError::NotFound { entity, .. }) => {
                messages::not_found(entity)
            }
            DashboardError::Core(CoreError::Validation(msg))
            | DashboardError::Core(CoreError::Conflict(msg)) => msg.clone(),
            other => other.to_string(),
        }
    }
}
