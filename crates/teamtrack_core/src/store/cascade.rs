//! Cascade coordinator for entity deletion.
//!
//! # Responsibility
//! - Enforce referential integrity when a project or member is removed.
//! - Re-derive project progress from the post-cascade task set.
//!
//! # Invariants
//! - Deleting a project removes exactly the tasks owned by it.
//! - Deleting a member removes every task assigned to it, across all
//!   projects; this is full task deletion, not unassignment.
//! - Unknown ids are idempotent no-ops that still end in a safe recompute.

use crate::derive::progress::recalculate;
use crate::model::member::MemberId;
use crate::model::project::ProjectId;
use crate::store::WorkloadState;
use log::info;

/// Removes a project and its tasks, then recomputes progress.
pub fn delete_project(state: &mut WorkloadState, project_id: ProjectId) {
    let projects_before = state.projects.len();
    let tasks_before = state.tasks.len();

    state.projects.retain(|project| project.id != project_id);
    state.tasks.retain(|task| task.project_id != project_id);
    state.projects = recalculate(&state.projects, &state.tasks);

    info!(
        "event=cascade_delete module=store status=ok kind=project removed_projects={} removed_tasks={}",
        projects_before - state.projects.len(),
        tasks_before - state.tasks.len()
    );
}

/// Removes a member and every task assigned to it, then recomputes progress.
///
/// A member's tasks may span multiple projects, so the recompute sweeps all
/// projects rather than any single one.
pub fn delete_member(state: &mut WorkloadState, member_id: MemberId) {
    let members_before = state.team_members.len();
    let tasks_before = state.tasks.len();

    state.team_members.retain(|member| member.id != member_id);
    state
        .tasks
        .retain(|task| task.assigned_to_member_id != Some(member_id));
    state.projects = recalculate(&state.projects, &state.tasks);

    info!(
        "event=cascade_delete module=store status=ok kind=member removed_members={} removed_tasks={}",
        members_before - state.team_members.len(),
        tasks_before - state.tasks.len()
    );
}
