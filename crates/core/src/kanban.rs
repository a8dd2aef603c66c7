//! Kanban grouping of status-bearing items.
//!
//! [`group_by_status`] is a single-pass stable partition over the fixed
//! status alphabet. The resulting [`KanbanBoard`] always holds one column
//! per stage, empty or not, so consumers never branch on a missing key.

use std::collections::BTreeMap;
use std::ops::Index;

use serde::Serialize;

use crate::status::ProjectStatus;

/// One column per taxonomy stage, in pipeline order.
///
/// Serializes as an ordered map `slug -> [items]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct KanbanBoard<T> {
    columns: BTreeMap<ProjectStatus, Vec<T>>,
}

/// Header data for a single board column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSummary {
    pub status: ProjectStatus,
    pub label: &'static str,
    pub color: &'static str,
    pub count: usize,
}

/// Partition `items` into one bucket per stage.
///
/// Items keep their relative input order inside each bucket.
pub fn group_by_status<T, I, F>(items: I, status_of: F) -> KanbanBoard<T>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> ProjectStatus,
{
    let mut board = KanbanBoard::empty();
    for item in items {
        let status = status_of(&item);
        board.columns.entry(status).or_default().push(item);
    }
    board
}

impl<T> KanbanBoard<T> {
    /// A board with every column present and empty.
    pub fn empty() -> Self {
        let columns = ProjectStatus::ALL
            .iter()
            .map(|status| (*status, Vec::new()))
            .collect();
        Self { columns }
    }

    /// Items in the given column.
    pub fn column(&self, status: ProjectStatus) -> &[T] {
        self.columns.get(&status).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate columns in pipeline order.
    pub fn columns(&self) -> impl Iterator<Item = (ProjectStatus, &[T])> + '_ {
        self.columns
            .iter()
            .map(|(status, items)| (*status, items.as_slice()))
    }

    /// Column headers with item counts, in pipeline order.
    pub fn summary(&self) -> Vec<ColumnSummary> {
        self.columns()
            .map(|(status, items)| ColumnSummary {
                status,
                label: status.label(),
                color: status.color(),
                count: items.len(),
            })
            .collect()
    }

    /// Total number of items across all columns.
    pub fn len(&self) -> usize {
        self.columns.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Transform every item while keeping column membership and order.
    pub fn map<U, F>(self, mut f: F) -> KanbanBoard<U>
    where
        F: FnMut(T) -> U,
    {
        let columns = self
            .columns
            .into_iter()
            .map(|(status, items)| (status, items.into_iter().map(&mut f).collect()))
            .collect();
        KanbanBoard { columns }
    }
}

impl<T> Default for KanbanBoard<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Index<ProjectStatus> for KanbanBoard<T> {
    type Output = [T];

    fn index(&self, status: ProjectStatus) -> &Self::Output {
        self.column(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Card {
        id: &'static str,
        status: ProjectStatus,
    }

    fn card(id: &'static str, status: ProjectStatus) -> Card {
        Card { id, status }
    }

    fn ids(items: &[Card]) -> Vec<&'static str> {
        items.iter().map(|c| c.id).collect()
    }

    #[test]
    fn empty_input_yields_every_column() {
        let board = group_by_status(Vec::<Card>::new(), |c| c.status);
        assert_eq!(board.columns().count(), ProjectStatus::COUNT);
        assert!(board.is_empty());
        for status in ProjectStatus::ALL {
            assert!(board[status].is_empty());
        }
    }

    #[test]
    fn items_land_in_their_column() {
        let board = group_by_status(
            vec![
                card("project1", ProjectStatus::Developpement),
                card("project2", ProjectStatus::Propal),
            ],
            |c| c.status,
        );

        assert_eq!(ids(&board[ProjectStatus::Developpement]), vec!["project1"]);
        assert_eq!(ids(&board[ProjectStatus::Propal]), vec!["project2"]);
        let empty = ProjectStatus::ALL
            .iter()
            .filter(|s| board[**s].is_empty())
            .count();
        assert_eq!(empty, 6);
    }

    #[test]
    fn bucket_preserves_input_order() {
        let board = group_by_status(
            vec![
                card("c", ProjectStatus::Termine),
                card("a", ProjectStatus::Propal),
                card("b", ProjectStatus::Termine),
                card("d", ProjectStatus::Termine),
            ],
            |c| c.status,
        );
        assert_eq!(ids(&board[ProjectStatus::Termine]), vec!["c", "b", "d"]);
    }

    #[test]
    fn columns_iterate_in_pipeline_order() {
        let board = group_by_status(vec![card("x", ProjectStatus::Termine)], |c| c.status);
        let order: Vec<ProjectStatus> = board.columns().map(|(s, _)| s).collect();
        assert_eq!(order, ProjectStatus::ALL.to_vec());
    }

    #[test]
    fn summary_counts_items() {
        let board = group_by_status(
            vec![
                card("a", ProjectStatus::AppelOffre),
                card("b", ProjectStatus::AppelOffre),
            ],
            |c| c.status,
        );
        let summary = board.summary();
        assert_eq!(summary[0].count, 2);
        assert_eq!(summary[0].label, "Appel d'offre");
        assert!(summary[1..].iter().all(|c| c.count == 0));
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn map_keeps_membership() {
        let board = group_by_status(
            vec![
                card("a", ProjectStatus::Propal),
                card("b", ProjectStatus::Propal),
            ],
            |c| c.status,
        )
        .map(|c| c.id);
        assert_eq!(board[ProjectStatus::Propal], ["a", "b"]);
    }

    #[test]
    fn serializes_every_stage_key() {
        let board = group_by_status(vec!["only"], |_| ProjectStatus::Propal);
        let json = serde_json::to_value(&board).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 8);
        assert_eq!(json["propal"], serde_json::json!(["only"]));
        assert_eq!(json["termine"], serde_json::json!([]));
    }
}
