//! Task-driven project progress recomputation.
//!
//! # Responsibility
//! - Derive each project's completion percentage and status from its tasks.
//!
//! # Invariants
//! - Pure over borrowed snapshots; a fresh project list is returned.
//! - A project with zero tasks reports 0 percent, never a division artifact.
//! - Every project is swept on every call, so stale manual overrides are
//!   replaced by the task-derived value.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::model::task::Task;

/// Recomputes completion for every project from the given task set.
///
/// Callers invoke this with the post-mutation task set after any change to
/// tasks; the manual-override write path skips it by design.
pub fn recalculate(projects: &[Project], tasks: &[Task]) -> Vec<Project> {
    projects
        .iter()
        .map(|project| {
            let (completed, total) = completion_counts(project.id, tasks);
            let progress = derive_progress(completed, total);
            Project {
                progress,
                status: ProjectStatus::from_progress(progress),
                ..project.clone()
            }
        })
        .collect()
}

/// Rounded completion percentage; zero-task projects report 0.
pub fn derive_progress(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u8
}

fn completion_counts(project_id: ProjectId, tasks: &[Task]) -> (usize, usize) {
    let mut completed = 0;
    let mut total = 0;
    for task in tasks.iter().filter(|t| t.project_id == project_id) {
        total += 1;
        if task.is_complete {
            completed += 1;
        }
    }
    (completed, total)
}
