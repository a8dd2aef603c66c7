//! Client contact entity model.

use grainboard_core::types::EntityId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: EntityId,
    pub last_name: String,
    pub first_name: String,
    pub phone: String,
    pub email: String,
    pub client_id: EntityId,
}

impl Contact {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.last_name, self.first_name)
    }
}
