//! Board and table projections rendered by the presentation layer.

use grainboard_core::kanban::{ColumnSummary, KanbanBoard};
use grainboard_core::progress::Progress;
use grainboard_core::status::ProjectStatus;
use grainboard_core::types::EntityId;
use grainboard_db::models::grain::Grain;
use grainboard_db::models::view::ProjectView;
use serde::Serialize;

/// Compact project card, also used as a table row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectCard {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub status_label: &'static str,
    pub client_name: Option<String>,
    pub grain_count: usize,
    pub completed_grains: usize,
    /// Rounded share of finished grains, shown as "Avancement".
    pub progress_percent: u8,
}

impl From<&ProjectView> for ProjectCard {
    fn from(view: &ProjectView) -> Self {
        let progress = view.progress();
        Self {
            id: view.project.id.clone(),
            name: view.project.name.clone(),
            description: view.project.description.clone(),
            status: view.project.status,
            status_label: view.project.status.label(),
            client_name: view.client.as_ref().map(|c| c.name.clone()),
            grain_count: progress.total,
            completed_grains: progress.completed,
            progress_percent: progress.percent,
        }
    }
}

/// A kanban board with its column headers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardSnapshot<T> {
    pub columns: Vec<ColumnSummary>,
    pub board: KanbanBoard<T>,
}

impl<T> From<KanbanBoard<T>> for BoardSnapshot<T> {
    fn from(board: KanbanBoard<T>) -> Self {
        Self {
            columns: board.summary(),
            board,
        }
    }
}

/// A project detail page: the joined view plus its grain board.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectDetail {
    pub project: ProjectView,
    pub progress: Progress,
    pub grain_board: BoardSnapshot<Grain>,
}

impl From<ProjectView> for ProjectDetail {
    fn from(project: ProjectView) -> Self {
        let grain_board = project.grain_board().into();
        Self {
            progress: project.progress(),
            project,
            grain_board,
        }
    }
}
