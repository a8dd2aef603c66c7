//! Explicit team roles.
//!
//! Every user carries exactly one [`TeamRole`]. A project's lead, creative
//! and technical lists may only reference users holding the matching role;
//! the storage layer checks this on every write.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamRole {
    Lead,
    Creative,
    Technical,
    Other,
}

impl TeamRole {
    /// Label used for the matching project team section.
    pub fn label(self) -> &'static str {
        match self {
            TeamRole::Lead => "Chefs de projet",
            TeamRole::Creative => "Équipe créative",
            TeamRole::Technical => "Équipe technique",
            TeamRole::Other => "Autre",
        }
    }
}

/// Check that a user assigned to a project team slot holds `required`.
pub fn ensure_role(user_id: &str, actual: TeamRole, required: TeamRole) -> Result<(), CoreError> {
    if actual == required {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "User '{user_id}' has role {actual:?} and cannot be assigned to {}",
            required.label()
        )))
    }
}
