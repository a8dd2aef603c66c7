//! Client entity model.

use grainboard_core::types::EntityId;
use serde::{Deserialize, Serialize};

/// A customer organisation.
///
/// `project_ids` is an informational back-reference taken from the seed;
/// project ownership is decided by `Project::client_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub contact_ids: Vec<EntityId>,
    #[serde(default)]
    pub project_ids: Vec<EntityId>,
}
