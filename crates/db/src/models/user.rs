//! User entity model.

use grainboard_core::roles::TeamRole;
use grainboard_core::types::EntityId;
use serde::{Deserialize, Serialize};

/// A team member.
///
/// `title` and `team` are free text shown in listings. Project team
/// membership is governed by `role` alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub last_name: String,
    pub first_name: String,
    pub title: String,
    pub team: String,
    pub admin: bool,
    pub role: TeamRole,
}

impl User {
    /// Display name, last name first.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.last_name, self.first_name)
    }
}
