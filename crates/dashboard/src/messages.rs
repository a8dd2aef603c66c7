//! User-facing notification texts.

use grainboard_core::status::ProjectStatus;

pub const ERROR_TITLE: &str = "Erreur";

pub const PROJECT_CREATED: &str = "Projet créé";
pub const PROJECT_UPDATED: &str = "Projet modifié";
pub const PROJECT_DELETED: &str = "Projet supprimé";
pub const GRAIN_CREATED: &str = "Grain créé";
pub const GRAIN_UPDATED: &str = "Grain modifié";
pub const GRAIN_DELETED: &str = "Grain supprimé";
pub const STATUS_CHANGED: &str = "Statut modifié";

pub fn project_created(name: &str) -> String {
    format!("Le projet {name} a été créé avec succès.")
}

pub fn project_updated() -> String {
    "Le projet a été modifié avec succès.".to_string()
}

pub fn project_deleted() -> String {
    "Le projet a été supprimé avec succès.".to_string()
}

pub fn project_status_changed(name: &str, status: ProjectStatus) -> String {
    format!("Le projet {name} est maintenant en statut {}.", status.label())
}

pub fn grain_created(title: &str) -> String {
    format!("Le grain {title} a été créé avec succès.")
}

pub fn grain_updated() -> String {
    "Le grain a été modifié avec succès.".to_string()
}

pub fn grain_deleted() -> String {
    "Le grain a été supprimé avec succès.".to_string()
}

pub fn grain_status_changed(title: &str, status: ProjectStatus) -> String {
    format!("Le grain {title} est maintenant en statut {}.", status.label())
}

/// "Not found" text for an entity kind as named in `CoreError::NotFound`.
pub fn not_found(entity: &str) -> String {
    match entity {
        "Project" => "Projet non trouvé".to_string(),
        "Grain" => "Grain non trouvé".to_string(),
        other => format!("{other} non trouvé"),
    }
}
