//! Relationship resolution.
//!
//! Joins projects, grains, clients, contacts and users from a [`Store`]
//! into composite views. Nothing here mutates the store, and nothing here
//! fails on a dangling reference: single relations come back as `None`,
//! list relations silently skip unknown ids.

use grainboard_core::types::EntityId;

use crate::models::contact::Contact;
use crate::models::project::Project;
use crate::models::user::User;
use crate::models::view::{ClientView, ContactView, GrainView, ProjectView};
use crate::store::Store;

/// Resolve a single project. `None` means the project does not exist.
pub fn resolve_project(store: &Store, id: &str) -> Option<ProjectView> {
    store.project(id).map(|project| join_project(store, project))
}

/// Resolve every project, in store order.
pub fn resolve_all_projects(store: &Store) -> Vec<ProjectView> {
    store
        .projects()
        .map(|project| join_project(store, project))
        .collect()
}

/// Every client with its contacts.
pub fn resolve_clients_with_contacts(store: &Store) -> Vec<ClientView> {
    store
        .clients()
        .map(|client| ClientView {
            client: client.clone(),
            contacts: contacts(store, &client.contact_ids),
        })
        .collect()
}

/// Every contact with its owning client.
pub fn resolve_contacts(store: &Store) -> Vec<ContactView> {
    store
        .contacts()
        .map(|contact| ContactView {
            contact: contact.clone(),
            client: store.client(&contact.client_id).cloned(),
        })
        .collect()
}

/// Resolve a single grain with its project.
pub fn resolve_grain(store: &Store, id: &str) -> Option<GrainView> {
    store.grain(id).map(|grain| GrainView {
        grain: grain.clone(),
        project: store.project(&grain.project_id).cloned(),
    })
}

fn join_project(store: &Store, project: &Project) -> ProjectView {
    ProjectView {
        project: project.clone(),
        client: store.client(&project.client_id).cloned(),
        grains: store
            .project_grains(&project.id)
            .into_iter()
            .cloned()
            .collect(),
        leads: users(store, &project.lead_ids),
        creative_team: users(store, &project.creative_ids),
        technical_team: users(store, &project.technical_ids),
        contacts: contacts(store, &project.contact_ids),
    }
}

fn users(store: &Store, ids: &[EntityId]) -> Vec<User> {
    ids.iter()
        .filter_map(|id| store.user(id).cloned())
        .collect()
}

fn contacts(store: &Store, ids: &[EntityId]) -> Vec<Contact> {
    ids.iter()
        .filter_map(|id| store.contact(id).cloned())
        .collect()
}
