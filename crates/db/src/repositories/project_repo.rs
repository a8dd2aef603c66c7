//! Repository for projects.

use grainboard_core::error::CoreError;
use grainboard_core::status::ProjectStatus;

use crate::models::project::{CreateProject, Project, ProjectDeletePolicy, UpdateProject};
use crate::store::Store;

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project with a fresh id, returning the created record.
    ///
    /// Team assignments are checked against user roles. Required fields are
    /// not re-validated here.
    pub fn create(store: &mut Store, input: &CreateProject) -> Result<Project, CoreError> {
        let project = Project::from_input(store.next_id("project"), input);
        store.check_team(&project)?;
        store.insert_project(project.clone());
        Ok(project)
    }

    pub fn find_by_id(store: &Store, id: &str) -> Option<Project> {
        store.project(id).cloned()
    }

    /// All projects in insertion order.
    pub fn list(store: &Store) -> Vec<Project> {
        store.projects().cloned().collect()
    }

    /// Merge `input` over an existing project.
    ///
    /// Returns `Ok(None)` if no project with the given `id` exists. The
    /// stored record is left untouched when the merged team is invalid.
    pub fn update(
        store: &mut Store,
        id: &str,
        input: &UpdateProject,
    ) -> Result<Option<Project>, CoreError> {
        let Some(current) = store.project(id) else {
            return Ok(None);
        };
        let mut merged = current.clone();
        merged.apply(input);
        store.check_team(&merged)?;

        match store.project_mut(id) {
            Some(slot) => {
                *slot = merged.clone();
                Ok(Some(merged))
            }
            None => Ok(None),
        }
    }

    /// Move a project to another stage. Any transition is allowed.
    pub fn update_status(store: &mut Store, id: &str, status: ProjectStatus) -> Option<Project> {
        let project = store.project_mut(id)?;
        project.status = status;
        Some(project.clone())
    }

    /// Delete a project according to `policy`.
    ///
    /// Returns `Ok(false)` if no project with the given `id` exists, and a
    /// [`CoreError::Conflict`] under [`ProjectDeletePolicy::Restrict`] when
    /// the project still owns grains.
    pub fn delete(
        store: &mut Store,
        id: &str,
        policy: ProjectDeletePolicy,
    ) -> Result<bool, CoreError> {
        if store.project(id).is_none() {
            return Ok(false);
        }
        let grains = store.grain_count(id);
        match policy {
            ProjectDeletePolicy::Restrict if grains > 0 => {
                return Err(CoreError::Conflict(format!(
                    "Project '{id}' still has {grains} grain(s)"
                )));
            }
            ProjectDeletePolicy::Cascade => {
                let removed = store.remove_project_grains(id);
                tracing::debug!(project_id = %id, removed, "Cascaded grain deletion");
            }
            ProjectDeletePolicy::Restrict => {}
        }
        Ok(store.remove_project(id).is_some())
    }
}
