//! End-to-end tests of the dashboard service: validation at the input
//! boundary, store mutations, and the notification emitted for each.

use std::io::Write;

use assert_matches::assert_matches;
use grainboard_core::error::CoreError;
use grainboard_core::roles::TeamRole;
use grainboard_core::status::{GrainStatus, GrainType, ProjectStatus};
use grainboard_dashboard::{Dashboard, DashboardConfig, DashboardError};
use grainboard_db::models::grain::{CreateGrain, UpdateGrain};
use grainboard_db::models::project::{CreateProject, ProjectDeletePolicy, UpdateProject};
use grainboard_events::{Notification, NotificationKind};
use tokio::sync::broadcast::{self, error::TryRecvError};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn dashboard() -> Dashboard {
    Dashboard::from_config(&DashboardConfig::default()).expect("fixtures load")
}

fn dashboard_with_policy(policy: ProjectDeletePolicy) -> Dashboard {
    let config = DashboardConfig {
        project_delete_policy: policy,
        ..DashboardConfig::default()
    };
    Dashboard::from_config(&config).expect("fixtures load")
}

/// The single notification published since the last call.
fn only_notification(rx: &mut broadcast::Receiver<Notification>) -> Notification {
    let n = rx.try_recv().expect("one notification");
    assert_matches!(rx.try_recv(), Err(TryRecvError::Empty));
    n
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[test]
fn create_project_publishes_success_and_appears_on_board() {
    let mut dash = dashboard();
    let mut rx = dash.subscribe();

    let project = dash
        .create_project(&CreateProject {
            name: "Portail RH".into(),
            client_id: "client2".into(),
            lead_ids: Some(vec!["user1".into()]),
            ..CreateProject::default()
        })
        .unwrap();

    let n = only_notification(&mut rx);
    assert_eq!(n.kind, NotificationKind::Success);
    assert_eq!(n.title, "Projet créé");
    assert_eq!(n.description, "Le projet Portail RH a été créé avec succès.");
    assert_eq!(n.event_type.as_deref(), Some("project.created"));
    assert_eq!(n.source_entity_id.as_deref(), Some(project.id.as_str()));

    let snapshot = dash.project_board();
    let first_column = &snapshot.board[ProjectStatus::AppelOffre];
    assert!(first_column.iter().any(|card| card.id == project.id));
    assert_eq!(snapshot.columns.len(), ProjectStatus::COUNT);
}

#[test]
fn cards_and_detail_carry_grain_progress() {
    let mut dash = dashboard();

    let rows = dash.project_rows();
    let finished = rows.iter().find(|card| card.id == "project5").unwrap();
    assert_eq!((finished.completed_grains, finished.grain_count), (1, 1));
    assert_eq!(finished.progress_percent, 100);
    let running = rows.iter().find(|card| card.id == "project3").unwrap();
    assert_eq!((running.completed_grains, running.progress_percent), (0, 0));

    let empty = dash
        .create_project(&CreateProject {
            name: "Sans grains".into(),
            client_id: "client1".into(),
            ..CreateProject::default()
        })
        .unwrap();
    let detail = dash.project_detail(&empty.id).unwrap();
    assert_eq!((detail.progress.total, detail.progress.percent), (0, 0));
    let snapshot = dash.project_board();
    let card = snapshot.board[ProjectStatus::AppelOffre]
        .iter()
        .find(|c| c.id == empty.id)
        .unwrap();
    assert_eq!(card.progress_percent, 0);

    dash.change_grain_status("project3", "grain6", GrainStatus::Termine).unwrap();
    let detail = dash.project_detail("project3").unwrap();
    assert_eq!((detail.progress.completed, detail.progress.percent), (1, 33));
}

#[test]
fn blank_name_is_rejected_without_mutation() {
    let mut dash = dashboard();
    let mut rx = dash.subscribe();
    let before = dash.store().project_count();

    let err = dash
        .create_project(&CreateProject {
            name: "   ".into(),
            client_id: "client1".into(),
            ..CreateProject::default()
        })
        .unwrap_err();

    assert_matches!(err, DashboardError::InvalidInput(_));
    assert_eq!(dash.store().project_count(), before);

    let n = only_notification(&mut rx);
    assert!(n.is_error());
    assert_eq!(n.title, "Erreur");
    assert_eq!(n.event_type.as_deref(), Some("project.created"));
}

#[test]
fn wrong_team_role_is_rejected() {
    let mut dash = dashboard();
    let err = dash
        .update_project(
            "project2",
            &UpdateProject {
                technical_ids: Some(vec!["user2".into()]),
                ..UpdateProject::default()
            },
        )
        .unwrap_err();
    assert_matches!(err, DashboardError::Core(CoreError::Validation(_)));
    assert!(dash.project("project2").unwrap().technical_team.is_empty());
}

#[test]
fn status_update_changes_only_the_status() {
    let mut dash = dashboard();
    let before = dash.project("project1").unwrap();

    dash.update_project("project1", &UpdateProject::status_only(ProjectStatus::Termine)).unwrap();

    let after = dash.project("project1").unwrap();
    let mut expected = before;
    expected.project.status = ProjectStatus::Termine;
    assert_eq!(after, expected);
}

#[test]
fn unknown_project_reports_not_found() {
    let mut dash = dashboard();
    let mut rx = dash.subscribe();

    assert_matches!(
        dash.project("nonexistent"),
        Err(DashboardError::Core(CoreError::NotFound { entity: "Project", .. }))
    );
    assert_eq!(only_notification(&mut rx).description, "Projet non trouvé");

    assert!(dash.change_project_status("nonexistent", ProjectStatus::Propal).is_err());
    assert_eq!(only_notification(&mut rx).description, "Projet non trouvé");
}

#[test]
fn cascade_policy_deletes_grains_with_project() {
    let mut dash = dashboard_with_policy(ProjectDeletePolicy::Cascade);
    let mut rx = dash.subscribe();

    dash.delete_project("project3").unwrap();

    assert!(dash.store().project("project3").is_none());
    assert_eq!(dash.store().grain_count("project3"), 0);
    assert!(dash.store().grain("grain6").is_none());
    assert_eq!(only_notification(&mut rx).title, "Projet supprimé");
}

#[test]
fn restrict_policy_refuses_project_with_grains() {
    let mut dash = dashboard_with_policy(ProjectDeletePolicy::Restrict);
    let mut rx = dash.subscribe();

    let err = dash.delete_project("project3").unwrap_err();
    assert_matches!(err, DashboardError::Core(CoreError::Conflict(_)));
    assert!(dash.store().project("project3").is_some());
    assert_eq!(dash.store().grain_count("project3"), 3);

    let n = only_notification(&mut rx);
    assert!(n.is_error());
    assert!(n.description.contains("3 grain"));
}

// ---------------------------------------------------------------------------
// Grains
// ---------------------------------------------------------------------------

#[test]
fn create_then_delete_grain_restores_count() {
    let mut dash = dashboard();
    let mut rx = dash.subscribe();
    let before = dash.store().grain_count("project1");

    let grain = dash
        .create_grain(
            "project1",
            &CreateGrain {
                title: "X".into(),
                status: Some(GrainStatus::AppelOffre),
                ..CreateGrain::default()
            },
        )
        .unwrap();
    assert_eq!(only_notification(&mut rx).title, "Grain créé");

    dash.delete_grain("project1", &grain.id).unwrap();
    assert_eq!(only_notification(&mut rx).title, "Grain supprimé");
    assert_eq!(dash.store().grain_count("project1"), before);
}

#[test]
fn invalid_link_is_rejected() {
    let mut dash = dashboard();
    let err = dash
        .update_grain(
            "project1",
            "grain1",
            &UpdateGrain {
                link: Some(Some("pas une url".into())),
                ..UpdateGrain::default()
            },
        )
        .unwrap_err();
    assert_matches!(err, DashboardError::InvalidInput(_));
    assert!(dash.store().grain("grain1").unwrap().link.is_none());
}

#[test]
fn grain_update_is_visible_on_the_project_board() {
    let mut dash = dashboard();
    dash.update_grain(
        "project1",
        "grain2",
        &UpdateGrain {
            grain_type: Some(Some(GrainType::Maquette)),
            link: Some(Some("https://figma.example.com/file/42".into())),
            ..UpdateGrain::default()
        },
    )
    .unwrap();
    dash.change_grain_status("project1", "grain2", GrainStatus::RetourClient).unwrap();

    let board = dash.grain_board("project1").unwrap();
    let moved = &board[ProjectStatus::RetourClient];
    assert_eq!(moved.len(), 1);
    assert_eq!(moved[0].grain_type, Some(GrainType::Maquette));
    assert!(board[ProjectStatus::ConceptionCrea].is_empty());
}

#[test]
fn grain_of_another_project_is_not_found() {
    let mut dash = dashboard();
    let mut rx = dash.subscribe();
    let err = dash
        .change_grain_status("project2", "grain1", GrainStatus::Termine)
        .unwrap_err();
    assert_matches!(err, DashboardError::Core(CoreError::NotFound { entity: "Grain", .. }));
    assert_eq!(only_notification(&mut rx).description, "Grain non trouvé");
}

#[test]
fn grain_board_of_missing_project_is_not_found() {
    let dash = dashboard();
    assert!(dash.grain_board("nonexistent").is_err());
}

// ---------------------------------------------------------------------------
// Configuration and seeding
// ---------------------------------------------------------------------------

#[test]
fn seed_file_replaces_fixtures() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "users": [{{"id": "u1", "last_name": "Roux", "first_name": "Anne",
                        "title": "Cheffe de projet", "team": "Production",
                        "admin": true, "role": "lead"}}],
            "clients": [{{"id": "c1", "name": "Maison D",
                          "contact_ids": [], "project_ids": ["p1"]}}],
            "projects": [{{"id": "p1", "name": "Catalogue", "description": "",
                           "status": "retour-client", "client_id": "c1",
                           "lead_ids": ["u1"], "creative_ids": [], "technical_ids": [],
                           "contact_ids": []}}]
        }}"#
    )
    .unwrap();

    let config = DashboardConfig {
        seed_path: Some(file.path().to_path_buf()),
        ..DashboardConfig::default()
    };
    let dash = Dashboard::from_config(&config).unwrap();

    assert_eq!(dash.store().project_count(), 1);
    let snapshot = dash.project_board();
    assert_eq!(snapshot.board[ProjectStatus::RetourClient][0].name, "Catalogue");
    assert_eq!(dash.team_candidates(TeamRole::Lead).len(), 1);
}

#[test]
fn missing_seed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = DashboardConfig {
        seed_path: Some(dir.path().join("absent.json")),
        ..DashboardConfig::default()
    };
    assert_matches!(Dashboard::from_config(&config), Err(DashboardError::Seed(_)));
}

#[test]
fn bus_handle_sees_service_notifications() {
    let mut dash = dashboard();
    let bus = dash.bus();
    let mut rx = bus.subscribe();
    assert_eq!(bus.subscriber_count(), 1);

    dash.change_project_status("project4", ProjectStatus::Propal).unwrap();
    assert_eq!(only_notification(&mut rx).title, "Statut modifié");
}
