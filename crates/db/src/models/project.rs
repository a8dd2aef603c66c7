//! Project entity model and DTOs.

use grainboard_core::error::CoreError;
use grainboard_core::status::ProjectStatus;
use grainboard_core::types::EntityId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A client project.
///
/// Grains are not embedded: the store indexes them by project id, so a
/// project's grain list can never drift from the grain collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub status: ProjectStatus,
    pub client_id: EntityId,
    #[serde(default)]
    pub lead_ids: Vec<EntityId>,
    #[serde(default)]
    pub creative_ids: Vec<EntityId>,
    #[serde(default)]
    pub technical_ids: Vec<EntityId>,
    #[serde(default)]
    pub contact_ids: Vec<EntityId>,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(custom(function = "grainboard_core::validation::not_blank"))]
    pub name: String,
    pub description: Option<String>,
    /// Defaults to the first pipeline stage if omitted.
    pub status: Option<ProjectStatus>,
    pub client_id: EntityId,
    pub lead_ids: Option<Vec<EntityId>>,
    pub creative_ids: Option<Vec<EntityId>>,
    pub technical_ids: Option<Vec<EntityId>>,
    pub contact_ids: Option<Vec<EntityId>>,
}

/// DTO for updating an existing project. All fields are optional.
///
/// Lists are replaced wholesale, never merged element-wise.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProject {
    #[validate(custom(function = "grainboard_core::validation::not_blank"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub client_id: Option<EntityId>,
    pub lead_ids: Option<Vec<EntityId>>,
    pub creative_ids: Option<Vec<EntityId>>,
    pub technical_ids: Option<Vec<EntityId>>,
    pub contact_ids: Option<Vec<EntityId>>,
}

impl UpdateProject {
    /// A patch that only moves the project to another stage.
    pub fn status_only(status: ProjectStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

impl Project {
    /// Build a project record from its create DTO.
    pub fn from_input(id: EntityId, input: &CreateProject) -> Self {
        Self {
            id,
            name: input.name.clone(),
            description: input.description.clone().unwrap_or_default(),
            status: input.status.unwrap_or_default(),
            client_id: input.client_id.clone(),
            lead_ids: input.lead_ids.clone().unwrap_or_default(),
            creative_ids: input.creative_ids.clone().unwrap_or_default(),
            technical_ids: input.technical_ids.clone().unwrap_or_default(),
            contact_ids: input.contact_ids.clone().unwrap_or_default(),
        }
    }

    /// Shallow merge: every provided field replaces the current value.
    pub fn apply(&mut self, input: &UpdateProject) {
        if let Some(name) = &input.name {
            self.name = name.clone();
        }
        if let Some(description) = &input.description {
            self.description = description.clone();
        }
        if let Some(status) = input.status {
            self.status = status;
        }
        if let Some(client_id) = &input.client_id {
            self.client_id = client_id.clone();
        }
        if let Some(ids) = &input.lead_ids {
            self.lead_ids = ids.clone();
        }
        if let Some(ids) = &input.creative_ids {
            self.creative_ids = ids.clone();
        }
        if let Some(ids) = &input.technical_ids {
            self.technical_ids = ids.clone();
        }
        if let Some(ids) = &input.contact_ids {
            self.contact_ids = ids.clone();
        }
    }
}

/// What happens to a project's grains when the project is deleted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectDeletePolicy {
    /// Delete the grains together with the project.
    #[default]
    Cascade,
    /// Refuse to delete a project that still owns grains.
    Restrict,
}

impl std::str::FromStr for ProjectDeletePolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cascade" => Ok(Self::Cascade),
            "restrict" => Ok(Self::Restrict),
            other => Err(CoreError::Validation(format!(
                "Invalid project delete policy '{other}'. Must be one of: cascade, restrict"
            ))),
        }
    }
}
