//! Seed data for a fresh [`Store`](crate::Store).
//!
//! A seed is loaded once at startup, either from the built-in fixtures or
//! from a JSON document with the same shape as [`Seed`].

use std::path::Path;

use grainboard_core::roles::TeamRole;
use grainboard_core::status::ProjectStatus;
use serde::{Deserialize, Serialize};

use crate::models::client::Client;
use crate::models::contact::Contact;
use crate::models::grain::Grain;
use crate::models::project::Project;
use crate::models::user::User;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed seed document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Initial contents of every collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub contacts: Vec<Contact>,
    #[serde(default)]
    pub clients: Vec<Client>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub grains: Vec<Grain>,
}

impl Seed {
    pub fn from_json_str(json: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// The demo agency: four team members, three clients, five projects.
    pub fn fixtures() -> Self {
        Self {
            users: vec![
                user(
                    "user1",
                    "Dupont",
                    "Jean",
                    "Chef de Projet",
                    "Production",
                    true,
                    TeamRole::Lead,
                ),
                user("user2", "Martin", "Sophie", "Designer", "Créatif", false, TeamRole::Creative),
                user(
                    "user3",
                    "Leroy",
                    "Thomas",
                    "Développeur",
                    "Technique",
                    false,
                    TeamRole::Technical,
                ),
                user("user4", "Bernard", "Léa", "Consultante", "Stratégie", false, TeamRole::Other),
            ],
            contacts: vec![
                contact(
                    "contact1",
                    "Petit",
                    "Pierre",
                    "01 23 45 67 89",
                    "pierre.petit@example.com",
                    "client1",
                ),
                contact(
                    "contact2",
                    "Dubois",
                    "Marie",
                    "01 23 45 67 90",
                    "marie.dubois@example.com",
                    "client1",
                ),
                contact(
                    "contact3",
                    "Moreau",
                    "Julien",
                    "01 23 45 67 91",
                    "julien.moreau@example.com",
                    "client2",
                ),
                contact(
                    "contact4",
                    "Lambert",
                    "Claire",
                    "01 23 45 67 92",
                    "claire.lambert@example.com",
                    "client3",
                ),
            ],
            clients: vec![
                client(
                    "client1",
                    "Société A",
                    &["contact1", "contact2"],
                    &["project1", "project2"],
                ),
                client("client2", "Entreprise B", &["contact3"], &["project3"]),
                client("client3", "Compagnie C", &["contact4"], &["project4", "project5"]),
            ],
            projects: vec![
                Project {
                    lead_ids: vec!["user1".into()],
                    creative_ids: vec!["user2".into()],
                    technical_ids: vec!["user3".into()],
                    contact_ids: vec!["contact1".into()],
                    ..project(
                        "project1",
                        "Refonte Site Web",
                        "Refonte complète du site web corporate avec nouvelles fonctionnalités",
                        ProjectStatus::Developpement,
                        "client1",
                    )
                },
                project(
                    "project2",
                    "Application Mobile",
                    "Développement d'une application mobile iOS et Android",
                    ProjectStatus::Propal,
                    "client1",
                ),
                project(
                    "project3",
                    "Système CRM",
                    "Mise en place d'un système CRM personnalisé",
                    ProjectStatus::Developpement,
                    "client2",
                ),
                project(
                    "project4",
                    "Étude de Marché",
                    "Réalisation d'une étude de marché pour un nouveau produit",
                    ProjectStatus::AppelOffre,
                    "client3",
                ),
                project(
                    "project5",
                    "Identité Visuelle",
                    "Création d'une nouvelle identité visuelle",
                    ProjectStatus::Termine,
                    "client3",
                ),
            ],
            grains: vec![
                grain(
                    "grain1",
                    "Analyse des besoins",
                    "Réaliser une analyse détaillée des besoins du client",
                    ProjectStatus::ConceptionConsultant,
                    "project1",
                ),
                grain(
                    "grain2",
                    "Maquettes UI",
                    "Créer les maquettes d'interface utilisateur",
                    ProjectStatus::ConceptionCrea,
                    "project1",
                ),
                grain(
                    "grain3",
                    "Développement frontend",
                    "Implémenter les interfaces utilisateur",
                    ProjectStatus::Developpement,
                    "project1",
                ),
                grain(
                    "grain4",
                    "Proposition commerciale",
                    "Rédiger la proposition commerciale",
                    ProjectStatus::Propal,
                    "project2",
                ),
                grain(
                    "grain5",
                    "Estimation technique",
                    "Réaliser l'estimation technique du projet",
                    ProjectStatus::ConceptionConsultant,
                    "project2",
                ),
                grain(
                    "grain6",
                    "Architecture du système",
                    "Concevoir l'architecture technique",
                    ProjectStatus::ConceptionConsultant,
                    "project3",
                ),
                grain(
                    "grain7",
                    "Développement backend",
                    "Développer les APIs et la logique métier",
                    ProjectStatus::Developpement,
                    "project3",
                ),
                grain(
                    "grain8",
                    "Tests fonctionnels",
                    "Réaliser les tests fonctionnels",
                    ProjectStatus::RetourEquipe,
                    "project3",
                ),
                grain(
                    "grain9",
                    "Analyse concurrentielle",
                    "Analyser le positionnement des concurrents",
                    ProjectStatus::AppelOffre,
                    "project4",
                ),
                grain(
                    "grain10",
                    "Revue client finale",
                    "Présentation finale au client",
                    ProjectStatus::Termine,
                    "project5",
                ),
            ],
        }
    }
}

// ---------------------------------------------------------------------------
// Fixture builders
// ---------------------------------------------------------------------------

fn user(
    id: &str,
    last_name: &str,
    first_name: &str,
    title: &str,
    team: &str,
    admin: bool,
    role: TeamRole,
) -> User {
    User {
        id: id.into(),
        last_name: last_name.into(),
        first_name: first_name.into(),
        title: title.into(),
        team: team.into(),
        admin,
        role,
    }
}

fn contact(
    id: &str,
    last_name: &str,
    first_name: &str,
    phone: &str,
    email: &str,
    client_id: &str,
) -> Contact {
    Contact {
        id: id.into(),
        last_name: last_name.into(),
        first_name: first_name.into(),
        phone: phone.into(),
        email: email.into(),
        client_id: client_id.into(),
    }
}

fn client(id: &str, name: &str, contact_ids: &[&str], project_ids: &[&str]) -> Client {
    Client {
        id: id.into(),
        name: name.into(),
        contact_ids: contact_ids.iter().map(|s| s.to_string()).collect(),
        project_ids: project_ids.iter().map(|s| s.to_string()).collect(),
    }
}

fn project(
    id: &str,
    name: &str,
    description: &str,
    status: ProjectStatus,
    client_id: &str,
) -> Project {
    Project {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        status,
        client_id: client_id.into(),
        lead_ids: Vec::new(),
        creative_ids: Vec::new(),
        technical_ids: Vec::new(),
        contact_ids: Vec::new(),
    }
}

fn grain(
    id: &str,
    title: &str,
    description: &str,
    status: ProjectStatus,
    project_id: &str,
) -> Grain {
    Grain {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        status,
        project_id: project_id.into(),
        grain_type: None,
        link: None,
    }
}
