//! Composite read-only views produced by [`crate::resolver`].
//!
//! Every joined relation is optional: a dangling foreign key yields `None`
//! (single relations) or is skipped (list relations).

use grainboard_core::kanban::{group_by_status, KanbanBoard};
use grainboard_core::progress::Progress;
use serde::Serialize;

use super::client::Client;
use super::contact::Contact;
use super::grain::Grain;
use super::project::Project;
use super::user::User;

/// A project joined with its client, grains, team members and contacts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectView {
    #[serde(flatten)]
    pub project: Project,
    pub client: Option<Client>,
    pub grains: Vec<Grain>,
    pub leads: Vec<User>,
    pub creative_team: Vec<User>,
    pub technical_team: Vec<User>,
    pub contacts: Vec<Contact>,
}

impl ProjectView {
    /// The project's grains laid out on a kanban board.
    pub fn grain_board(&self) -> KanbanBoard<Grain> {
        group_by_status(self.grains.iter().cloned(), |g| g.status)
    }

    /// Share of the project's grains that reached `termine`.
    pub fn progress(&self) -> Progress {
        Progress::from_statuses(self.grains.iter().map(|g| g.status))
    }
}

/// A client joined with its contacts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientView {
    #[serde(flatten)]
    pub client: Client,
    pub contacts: Vec<Contact>,
}

/// A contact joined with its owning client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactView {
    #[serde(flatten)]
    pub contact: Contact,
    pub client: Option<Client>,
}

/// A grain joined with its owning project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrainView {
    #[serde(flatten)]
    pub grain: Grain,
    pub project: Option<Project>,
}
