//! Repository for grains.
//!
//! Every operation is scoped by the owning project id: a grain addressed
//! through the wrong project is treated as missing.

use grainboard_core::error::CoreError;
use grainboard_core::status::GrainStatus;

use crate::models::grain::{CreateGrain, Grain, UpdateGrain};
use crate::store::Store;

/// Provides CRUD operations for grains.
pub struct GrainRepo;

impl GrainRepo {
    /// Insert a new grain under `project_id`, returning the created record.
    pub fn create(
        store: &mut Store,
        project_id: &str,
        input: &CreateGrain,
    ) -> Result<Grain, CoreError> {
        if store.project(project_id).is_none() {
            return Err(CoreError::not_found("Project", project_id));
        }
        let grain = Grain {
            id: store.next_id("grain"),
            title: input.title.clone(),
            description: input.description.clone().unwrap_or_default(),
            status: input.status.unwrap_or_default(),
            project_id: project_id.to_string(),
            grain_type: input.grain_type,
            link: input.link.clone(),
        };
        store.insert_grain(grain.clone());
        Ok(grain)
    }

    pub fn find_by_id(store: &Store, id: &str) -> Option<Grain> {
        store.grain(id).cloned()
    }

    /// Grains of a project in creation order.
    pub fn list_by_project(store: &Store, project_id: &str) -> Vec<Grain> {
        store
            .project_grains(project_id)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Merge `input` over an existing grain of `project_id`.
    ///
    /// Returns `None` if the grain does not exist or belongs to another
    /// project.
    pub fn update(
        store: &mut Store,
        project_id: &str,
        grain_id: &str,
        input: &UpdateGrain,
    ) -> Option<Grain> {
        let grain = store.project_grain_mut(project_id, grain_id)?;
        grain.apply(input);
        Some(grain.clone())
    }

    /// Move a grain to another stage. Any transition is allowed.
    pub fn update_status(
        store: &mut Store,
        project_id: &str,
        grain_id: &str,
        status: GrainStatus,
    ) -> Option<Grain> {
        Self::update(store, project_id, grain_id, &UpdateGrain::status_only(status))
    }

    /// Delete a grain of `project_id`. Returns `true` if it was removed.
    pub fn delete(store: &mut Store, project_id: &str, grain_id: &str) -> bool {
        store.remove_grain(project_id, grain_id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use grainboard_core::status::GrainType;

    use crate::seed::Seed;

    use super::*;

    fn store() -> Store {
        Store::from_seed(Seed::fixtures()).unwrap()
    }

    fn input(title: &str) -> CreateGrain {
        CreateGrain {
            title: title.into(),
            ..CreateGrain::default()
        }
    }

    #[test]
    fn create_sets_owner_and_defaults() {
        let mut store = store();
        let grain =
            GrainRepo::create(&mut store, "project2", &input("Budget prévisionnel")).unwrap();
        assert_eq!(grain.project_id, "project2");
        assert_eq!(grain.status, GrainStatus::AppelOffre);
        assert_eq!(grain.description, "");
        assert!(grain.id.starts_with("grain-"));

        let listed = GrainRepo::list_by_project(&store, "project2");
        assert_eq!(listed.last(), Some(&grain));
    }

    #[test]
    fn create_under_missing_project_is_not_found() {
        let mut store = store();
        let err = GrainRepo::create(&mut store, "ghost", &input("X")).unwrap_err();
        assert_eq!(err, CoreError::not_found("Project", "ghost"));
    }

    #[test]
    fn repository_does_not_revalidate_titles() {
        let mut store = store();
        let grain = GrainRepo::create(&mut store, "project1", &input("")).unwrap();
        assert_eq!(grain.title, "");
    }

    #[test]
    fn update_through_wrong_project_is_missing() {
        let mut store = store();
        let result = GrainRepo::update(&mut store, "project2", "grain1", &UpdateGrain::default());
        assert!(result.is_none());
    }

    #[test]
    fn update_is_visible_in_project_listing() {
        let mut store = store();
        let updated = GrainRepo::update(
            &mut store,
            "project1",
            "grain2",
            &UpdateGrain {
                grain_type: Some(Some(GrainType::Maquette)),
                link: Some(Some("https://figma.com/file/ui".into())),
                ..UpdateGrain::default()
            },
        )
        .unwrap();

        let listed = GrainRepo::list_by_project(&store, "project1");
        assert_eq!(listed[1], updated);
        assert_eq!(GrainRepo::find_by_id(&store, "grain2"), Some(updated));
    }

    #[test]
    fn update_status_only_changes_status() {
        let mut store = store();
        let before = GrainRepo::find_by_id(&store, "grain3").unwrap();
        let after =
            GrainRepo::update_status(&mut store, "project1", "grain3", GrainStatus::RetourClient)
                .unwrap();
        assert_eq!(after.status, GrainStatus::RetourClient);
        assert_eq!(after.title, before.title);
    }

    #[test]
    fn delete_removes_from_collection_and_project() {
        let mut store = store();
        assert!(GrainRepo::delete(&mut store, "project3", "grain7"));
        assert!(GrainRepo::find_by_id(&store, "grain7").is_none());
        assert_eq!(store.grain_count("project3"), 2);
        assert!(!GrainRepo::delete(&mut store, "project3", "grain7"));
    }
}
