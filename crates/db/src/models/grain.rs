//! Grain (sub-task) entity model and DTOs.

use grainboard_core::status::{GrainStatus, GrainType};
use grainboard_core::types::EntityId;
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// A work item belonging to exactly one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grain {
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: GrainStatus,
    pub project_id: EntityId,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub grain_type: Option<GrainType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// DTO for creating a new grain. The owning project is passed separately.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateGrain {
    #[validate(custom(function = "grainboard_core::validation::not_blank"))]
    pub title: String,
    pub description: Option<String>,
    /// Defaults to the first pipeline stage if omitted.
    pub status: Option<GrainStatus>,
    #[serde(rename = "type")]
    pub grain_type: Option<GrainType>,
    #[validate(url)]
    pub link: Option<String>,
}

/// DTO for updating an existing grain. All fields are optional.
///
/// `grain_type` and `link` use `Option<Option<T>>` so they can be cleared:
/// absent keeps the current value, `null` clears it.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateGrain {
    #[validate(custom(function = "grainboard_core::validation::not_blank"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<GrainStatus>,
    #[serde(rename = "type", default, deserialize_with = "present")]
    pub grain_type: Option<Option<GrainType>>,
    #[serde(default, deserialize_with = "present")]
    #[validate(url)]
    pub link: Option<Option<String>>,
}

/// A key that is present deserializes to `Some`, even when its value is
/// `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl UpdateGrain {
    /// A patch that only moves the grain to another stage.
    pub fn status_only(status: GrainStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

impl Grain {
    /// Shallow merge: every provided field replaces the current value.
    pub fn apply(&mut self, input: &UpdateGrain) {
        if let Some(title) = &input.title {
            self.title = title.clone();
        }
        if let Some(description) = &input.description {
            self.description = description.clone();
        }
        if let Some(status) = input.status {
            self.status = status;
        }
        if let Some(grain_type) = input.grain_type {
            self.grain_type = grain_type;
        }
        if let Some(link) = &input.link {
            self.link = link.clone();
        }
    }
}
