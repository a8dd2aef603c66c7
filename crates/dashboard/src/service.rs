//! The dashboard service.
//!
//! Every mutation follows the same path: validate the DTO, run the
//! repository call against the store, then publish exactly one
//! notification describing the outcome. Reads never publish, except the
//! project detail lookup which reports a missing project the way the
//! detail page does.

use std::sync::Arc;

use grainboard_core::error::CoreError;
use grainboard_core::kanban::{group_by_status, KanbanBoard};
use grainboard_core::roles::TeamRole;
use grainboard_core::status::{GrainStatus, ProjectStatus};
use grainboard_db::models::contact::Contact;
use grainboard_db::models::grain::{CreateGrain, Grain, UpdateGrain};
use grainboard_db::models::project::{CreateProject, Project, ProjectDeletePolicy, UpdateProject};
use grainboard_db::models::user::User;
use grainboard_db::models::view::{ClientView, ContactView, ProjectView};
use grainboard_db::repositories::{GrainRepo, ProjectRepo};
use grainboard_db::{resolver, Seed, Store};
use grainboard_events::{Notification, NotificationBus};
use tokio::sync::broadcast;
use validator::Validate;

use crate::board::{BoardSnapshot, ProjectCard, ProjectDetail};
use crate::config::DashboardConfig;
use crate::error::{DashboardError, DashboardResult};
use crate::messages;

const PROJECT: &str = "Project";
const GRAIN: &str = "Grain";

#[derive(Debug)]
pub struct Dashboard {
    store: Store,
    bus: Arc<NotificationBus>,
    delete_policy: ProjectDeletePolicy,
}

impl Dashboard {
    pub fn new(store: Store, config: &DashboardConfig) -> Self {
        Self {
            store,
            bus: Arc::new(NotificationBus::new(config.notification_capacity)),
            delete_policy: config.project_delete_policy,
        }
    }

    /// Seed a dashboard from the configured seed file or the fixtures.
    pub fn from_config(config: &DashboardConfig) -> DashboardResult<Self> {
        let seed = match &config.seed_path {
            Some(path) => {
                tracing::info!(path = %path.display(), "Loading seed file");
                Seed::from_path(path)?
            }
            None => Seed::fixtures(),
        };
        let store = Store::from_seed(seed)?;
        tracing::info!(
            projects = store.project_count(),
            policy = ?config.project_delete_policy,
            "Dashboard ready"
        );
        Ok(Self::new(store, config))
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Shared handle to the notification bus.
    pub fn bus(&self) -> Arc<NotificationBus> {
        Arc::clone(&self.bus)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.bus.subscribe()
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// Project detail lookup. A missing project publishes an error
    /// notification.
    pub fn project(&self, id: &str) -> DashboardResult<ProjectView> {
        let result: DashboardResult<ProjectView> = resolver::resolve_project(&self.store, id)
            .ok_or_else(|| CoreError::not_found(PROJECT, id).into());
        if let Err(err) = &result {
            self.report_failure("project.viewed", err);
        }
        result
    }

    /// The project view together with its grain board.
    pub fn project_detail(&self, id: &str) -> DashboardResult<ProjectDetail> {
        self.project(id).map(ProjectDetail::from)
    }

    pub fn projects(&self) -> Vec<ProjectView> {
        resolver::resolve_all_projects(&self.store)
    }

    /// Table rows for the project list.
    pub fn project_rows(&self) -> Vec<ProjectCard> {
        self.projects().iter().map(ProjectCard::from).collect()
    }

    /// Every project on the kanban board.
    pub fn project_board(&self) -> BoardSnapshot<ProjectCard> {
        let board = group_by_status(self.projects(), |view| view.project.status)
            .map(|view| ProjectCard::from(&view));
        tracing::debug!(projects = board.len(), "Built project board");
        board.into()
    }

    /// A project's grains on the kanban board.
    pub fn grain_board(&self, project_id: &str) -> DashboardResult<KanbanBoard<Grain>> {
        if self.store.project(project_id).is_none() {
            return Err(CoreError::not_found(PROJECT, project_id).into());
        }
        Ok(group_by_status(
            GrainRepo::list_by_project(&self.store, project_id),
            |g| g.status,
        ))
    }

    pub fn clients(&self) -> Vec<ClientView> {
        resolver::resolve_clients_with_contacts(&self.store)
    }

    pub fn contacts(&self) -> Vec<ContactView> {
        resolver::resolve_contacts(&self.store)
    }

    pub fn users(&self) -> Vec<User> {
        self.store.users().cloned().collect()
    }

    /// Users eligible for a project team slot.
    pub fn team_candidates(&self, role: TeamRole) -> Vec<User> {
        self.store.users_with_role(role).cloned().collect()
    }

    /// Contacts selectable on a project of `client_id`.
    pub fn contact_candidates(&self, client_id: &str) -> Vec<Contact> {
        self.store.contacts_for_client(client_id).cloned().collect()
    }

    // -----------------------------------------------------------------------
    // Project mutations
    // -----------------------------------------------------------------------

    pub fn create_project(&mut self, input: &CreateProject) -> DashboardResult<Project> {
        let result = input
            .validate()
            .map_err(DashboardError::from)
            .and_then(|()| Ok(ProjectRepo::create(&mut self.store, input)?));
        self.report("project.created", result, |p| {
            Notification::success(messages::PROJECT_CREATED, messages::project_created(&p.name))
                .with_source("project", p.id.clone())
        })
    }

    pub fn update_project(&mut self, id: &str, input: &UpdateProject) -> DashboardResult<Project> {
        let result = input
            .validate()
            .map_err(DashboardError::from)
            .and_then(|()| {
                ProjectRepo::update(&mut self.store, id, input)?
                    .ok_or_else(|| CoreError::not_found(PROJECT, id).into())
            });
        self.report("project.updated", result, |p| {
            Notification::success(messages::PROJECT_UPDATED, messages::project_updated())
                .with_source("project", p.id.clone())
        })
    }

    /// Delete a project; its grains follow the configured delete policy.
    pub fn delete_project(&mut self, id: &str) -> DashboardResult<()> {
        let result: DashboardResult<()> =
            match ProjectRepo::delete(&mut self.store, id, self.delete_policy) {
                Ok(true) => Ok(()),
                Ok(false) => Err(CoreError::not_found(PROJECT, id).into()),
                Err(err) => Err(err.into()),
            };
        self.report("project.deleted", result, |_| {
            Notification::success(messages::PROJECT_DELETED, messages::project_deleted())
                .with_source("project", id)
        })
    }

    /// Drag-and-drop of a project card onto another column.
    pub fn change_project_status(
        &mut self,
        id: &str,
        status: ProjectStatus,
    ) -> DashboardResult<Project> {
        let result: DashboardResult<Project> =
            ProjectRepo::update_status(&mut self.store, id, status)
                .ok_or_else(|| CoreError::not_found(PROJECT, id).into());
        self.report("project.status_changed", result, |p| {
            Notification::success(
                messages::STATUS_CHANGED,
                messages::project_status_changed(&p.name, p.status),
            )
            .with_source("project", p.id.clone())
        })
    }

    // -----------------------------------------------------------------------
    // Grain mutations
    // -----------------------------------------------------------------------

    pub fn create_grain(
        &mut self,
        project_id: &str,
        input: &CreateGrain,
    ) -> DashboardResult<Grain> {
        let result = input
            .validate()
            .map_err(DashboardError::from)
            .and_then(|()| Ok(GrainRepo::create(&mut self.store, project_id, input)?));
        self.report("grain.created", result, |g| {
            Notification::success(messages::GRAIN_CREATED, messages::grain_created(&g.title))
                .with_source("grain", g.id.clone())
        })
    }

    pub fn update_grain(
        &mut self,
        project_id: &str,
        grain_id: &str,
        input: &UpdateGrain,
    ) -> DashboardResult<Grain> {
        let result = input
            .validate()
            .map_err(DashboardError::from)
            .and_then(|()| {
                GrainRepo::update(&mut self.store, project_id, grain_id, input)
                    .ok_or_else(|| CoreError::not_found(GRAIN, grain_id).into())
            });
        self.report("grain.updated", result, |g| {
            Notification::success(messages::GRAIN_UPDATED, messages::grain_updated())
                .with_source("grain", g.id.clone())
        })
    }

    pub fn delete_grain(&mut self, project_id: &str, grain_id: &str) -> DashboardResult<()> {
        let result: DashboardResult<()> =
            if GrainRepo::delete(&mut self.store, project_id, grain_id) {
                Ok(())
            } else {
                Err(CoreError::not_found(GRAIN, grain_id).into())
            };
        self.report("grain.deleted", result, |_| {
            Notification::success(messages::GRAIN_DELETED, messages::grain_deleted())
                .with_source("grain", grain_id)
        })
    }

    /// Drag-and-drop of a grain card onto another column.
    pub fn change_grain_status(
        &mut self,
        project_id: &str,
        grain_id: &str,
        status: GrainStatus,
    ) -> DashboardResult<Grain> {
        let result: DashboardResult<Grain> =
            GrainRepo::update_status(&mut self.store, project_id, grain_id, status)
                .ok_or_else(|| CoreError::not_found(GRAIN, grain_id).into());
        self.report("grain.status_changed", result, |g| {
            Notification::success(
                messages::STATUS_CHANGED,
                messages::grain_status_changed(&g.title, g.status),
            )
            .with_source("grain", g.id.clone())
        })
    }

    // -----------------------------------------------------------------------
    // Notification plumbing
    // -----------------------------------------------------------------------

    /// Publish the notification for `result` and hand the result back.
    fn report<T, F>(
        &self,
        event: &'static str,
        result: DashboardResult<T>,
        success: F,
    ) -> DashboardResult<T>
    where
        F: FnOnce(&T) -> Notification,
    {
        match &result {
            Ok(value) => {
                let notification = success(value).with_event(event);
                tracing::info!(
                    event,
                    entity_id = notification.source_entity_id.as_deref().unwrap_or("-"),
                    "Dashboard operation succeeded"
                );
                self.bus.publish(notification);
            }
            Err(err) => self.report_failure(event, err),
        }
        result
    }

    fn report_failure(&self, event: &'static str, err: &DashboardError) {
        tracing::warn!(event, error = %err, "Dashboard operation failed");
        self.bus.publish(
            Notification::error(messages::ERROR_TITLE, err.user_message()).with_event(event),
        );
    }
}
