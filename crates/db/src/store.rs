//! The in-memory store.
//!
//! [`Store`] owns every collection. Reads take `&Store`, mutations go
//! through [`crate::repositories`] with `&mut Store`. Grains are stored
//! once, keyed by id, with a secondary index from project id to the
//! project's grain ids in creation order.

use std::collections::HashMap;

use grainboard_core::error::CoreError;
use grainboard_core::roles::{ensure_role, TeamRole};
use grainboard_core::types::EntityId;
use indexmap::IndexMap;

use crate::models::client::Client;
use crate::models::contact::Contact;
use crate::models::grain::Grain;
use crate::models::project::Project;
use crate::models::user::User;
use crate::seed::Seed;

#[derive(Debug, Clone, Default)]
pub struct Store {
    users: IndexMap<EntityId, User>,
    contacts: IndexMap<EntityId, Contact>,
    clients: IndexMap<EntityId, Client>,
    projects: IndexMap<EntityId, Project>,
    grains: IndexMap<EntityId, Grain>,
    grains_by_project: HashMap<EntityId, Vec<EntityId>>,
}

impl Store {
    /// A store with no data at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load every collection from a seed.
    ///
    /// Rejects duplicate ids, contacts pointing at unknown clients, grains
    /// pointing at unknown projects and team assignments that violate the
    /// role rules. A project pointing at an unknown client is accepted; the
    /// resolver reports that relation as absent.
    pub fn from_seed(seed: Seed) -> Result<Self, CoreError> {
        let mut store = Self::empty();

        for user in seed.users {
            insert_unique(&mut store.users, "User", user.id.clone(), user)?;
        }
        for client in seed.clients {
            insert_unique(&mut store.clients, "Client", client.id.clone(), client)?;
        }
        for contact in seed.contacts {
            if !store.clients.contains_key(&contact.client_id) {
                return Err(CoreError::Validation(format!(
                    "Contact '{}' references unknown client '{}'",
                    contact.id, contact.client_id
                )));
            }
            insert_unique(&mut store.contacts, "Contact", contact.id.clone(), contact)?;
        }
        for project in seed.projects {
            store.check_team(&project)?;
            if store.projects.contains_key(&project.id) {
                return Err(duplicate("Project", &project.id));
            }
            store.insert_project(project);
        }
        for grain in seed.grains {
            if !store.projects.contains_key(&grain.project_id) {
                return Err(CoreError::Validation(format!(
                    "Grain '{}' references unknown project '{}'",
                    grain.id, grain.project_id
                )));
            }
            if store.grains.contains_key(&grain.id) {
                return Err(duplicate("Grain", &grain.id));
            }
            store.insert_grain(grain);
        }

        tracing::debug!(
            users = store.users.len(),
            contacts = store.contacts.len(),
            clients = store.clients.len(),
            projects = store.projects.len(),
            grains = store.grains.len(),
            "Store loaded from seed"
        );
        Ok(store)
    }

    // -- users -------------------------------------------------------------

    pub fn users(&self) -> impl Iterator<Item = &User> + '_ {
        self.users.values()
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }

    /// Candidate users for a project team slot.
    pub fn users_with_role(&self, role: TeamRole) -> impl Iterator<Item = &User> + '_ {
        self.users.values().filter(move |u| u.role == role)
    }

    // -- contacts ----------------------------------------------------------

    pub fn contacts(&self) -> impl Iterator<Item = &Contact> + '_ {
        self.contacts.values()
    }

    pub fn contact(&self, id: &str) -> Option<&Contact> {
        self.contacts.get(id)
    }

    /// Contacts owned by a client, i.e. the ones selectable on its projects.
    pub fn contacts_for_client<'a>(
        &'a self,
        client_id: &'a str,
    ) -> impl Iterator<Item = &'a Contact> + 'a {
        self.contacts
            .values()
            .filter(move |c| c.client_id == client_id)
    }

    // -- clients -----------------------------------------------------------

    pub fn clients(&self) -> impl Iterator<Item = &Client> + '_ {
        self.clients.values()
    }

    pub fn client(&self, id: &str) -> Option<&Client> {
        self.clients.get(id)
    }

    // -- projects ----------------------------------------------------------

    pub fn projects(&self) -> impl Iterator<Item = &Project> + '_ {
        self.projects.values()
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.get(id)
    }

    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    // -- grains ------------------------------------------------------------

    /// Every grain, in creation order.
    pub fn grains(&self) -> impl Iterator<Item = &Grain> + '_ {
        self.grains.values()
    }

    pub fn grain(&self, id: &str) -> Option<&Grain> {
        self.grains.get(id)
    }

    /// Grains owned by a project, in creation order.
    pub fn project_grains(&self, project_id: &str) -> Vec<&Grain> {
        self.grains_by_project
            .get(project_id)
            .map(|ids| ids.iter().filter_map(|id| self.grains.get(id)).collect())
            .unwrap_or_default()
    }

    pub fn grain_count(&self, project_id: &str) -> usize {
        self.grains_by_project
            .get(project_id)
            .map(Vec::len)
            .unwrap_or(0)
    }

    // -- write-time invariants ----------------------------------------------

    /// Every team slot must reference existing users holding the slot's role.
    pub fn check_team(&self, project: &Project) -> Result<(), CoreError> {
        let slots = [
            (&project.lead_ids, TeamRole::Lead),
            (&project.creative_ids, TeamRole::Creative),
            (&project.technical_ids, TeamRole::Technical),
        ];
        for (ids, required) in slots {
            for id in ids {
                let user = self.users.get(id).ok_or_else(|| {
                    CoreError::Validation(format!("Unknown user '{id}' in {}", required.label()))
                })?;
                ensure_role(id, user.role, required)?;
            }
        }
        Ok(())
    }

    // -- mutation primitives (used by the repositories) ---------------------

    /// A fresh identifier, unique among all projects and grains.
    pub(crate) fn next_id(&self, prefix: &str) -> EntityId {
        loop {
            let id = format!("{prefix}-{}", uuid::Uuid::new_v4());
            if !self.projects.contains_key(&id) && !self.grains.contains_key(&id) {
                return id;
            }
        }
    }

    pub(crate) fn insert_project(&mut self, project: Project) {
        self.grains_by_project.entry(project.id.clone()).or_default();
        self.projects.insert(project.id.clone(), project);
    }

    pub(crate) fn project_mut(&mut self, id: &str) -> Option<&mut Project> {
        self.projects.get_mut(id)
    }

    /// Remove a project and its index entry. Grains are left to the caller.
    pub(crate) fn remove_project(&mut self, id: &str) -> Option<Project> {
        self.grains_by_project.remove(id);
        self.projects.shift_remove(id)
    }

    pub(crate) fn insert_grain(&mut self, grain: Grain) {
        self.grains_by_project
            .entry(grain.project_id.clone())
            .or_default()
            .push(grain.id.clone());
        self.grains.insert(grain.id.clone(), grain);
    }

    /// Mutable access to a grain, only if it belongs to `project_id`.
    pub(crate) fn project_grain_mut(
        &mut self,
        project_id: &str,
        grain_id: &str,
    ) -> Option<&mut Grain> {
        self.grains
            .get_mut(grain_id)
            .filter(|g| g.project_id == project_id)
    }

    /// Remove a grain from the collection and from its project index.
    pub(crate) fn remove_grain(&mut self, project_id: &str, grain_id: &str) -> Option<Grain> {
        if self.grains.get(grain_id)?.project_id != project_id {
            return None;
        }
        if let Some(ids) = self.grains_by_project.get_mut(project_id) {
            ids.retain(|id| id != grain_id);
        }
        self.grains.shift_remove(grain_id)
    }

    /// Remove every grain owned by a project. Returns how many were removed.
    pub(crate) fn remove_project_grains(&mut self, project_id: &str) -> usize {
        let ids = self
            .grains_by_project
            .get_mut(project_id)
            .map(std::mem::take)
            .unwrap_or_default();
        for id in &ids {
            self.grains.shift_remove(id);
        }
        ids.len()
    }
}

fn duplicate(entity: &str, id: &str) -> CoreError {
    CoreError::Validation(format!("Duplicate {entity} id '{id}'"))
}

fn insert_unique<T>(
    map: &mut IndexMap<EntityId, T>,
    entity: &str,
    id: EntityId,
    value: T,
) -> Result<(), CoreError> {
    if map.contains_key(&id) {
        return Err(duplicate(entity, &id));
    }
    map.insert(id, value);
    Ok(())
}
