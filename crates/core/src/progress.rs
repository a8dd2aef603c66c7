//! Completion progress of a project, derived from its grains.

use serde::Serialize;

use crate::status::ProjectStatus;

/// How many of a project's grains reached the final stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    /// `completed / total` as a whole percentage, rounded half up.
    /// Zero when there is nothing to complete.
    pub percent: u8,
}

impl Progress {
    pub fn new(completed: usize, total: usize) -> Self {
        let percent = if total == 0 {
            0
        } else {
            let completed = completed.min(total);
            ((completed * 200 + total) / (2 * total)) as u8
        };
        Self {
            completed,
            total,
            percent,
        }
    }

    /// Count the items whose status is [`ProjectStatus::Termine`].
    pub fn from_statuses<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = ProjectStatus>,
    {
        let (completed, total) = statuses.into_iter().fold((0, 0), |(done, all), status| {
            (done + usize::from(status == ProjectStatus::Termine), all + 1)
        });
        Self::new(completed, total)
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}
