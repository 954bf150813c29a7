//! Workload tracking use-case service.
//!
//! # Responsibility
//! - Accept user intents and run each one to completion synchronously:
//!   store mutation, cascade, task-driven recompute, then commit.
//! - Expose read-only snapshots with derived fields to the view layer.
//!
//! # Invariants
//! - Every task-set mutation recomputes project progress before the new
//!   state is observable; the manual-override path alone bypasses it.
//! - Persistence failures are logged and swallowed; the in-memory state
//!   stays authoritative and the caller is never blocked.
//! - Member workload views are derived fresh on every read.

use crate::derive::capacity::{analyze, MemberLoadView};
use crate::derive::progress::recalculate;
use crate::model::member::MemberId;
use crate::model::project::{Project, ProjectId};
use crate::model::task::{Task, TaskId};
use crate::repo::state_repo::{StateRepository, StateSnapshot};
use crate::store::seed::{seed_members, seed_projects, seed_state, seed_tasks};
use crate::store::{cascade, WorkloadState};
use log::{error, info};

/// Use-case facade owning the workload state and its repository.
pub struct WorkloadService<R: StateRepository> {
    state: WorkloadState,
    repo: R,
}

impl<R: StateRepository> WorkloadService<R> {
    /// Loads the persisted snapshot, seeding whatever is missing.
    ///
    /// An absent record seeds the full dataset; a present record fills
    /// absent fields from the seed portion; a corrupt record falls back to
    /// the seed wholesale. None of these paths fail.
    pub fn load(repo: R) -> Self {
        let state = match repo.load_state() {
            Ok(Some(snapshot)) => {
                info!("event=state_load module=service status=ok source=store");
                merge_with_seed(snapshot)
            }
            Ok(None) => {
                info!("event=state_load module=service status=ok source=seed reason=absent");
                seed_state()
            }
            Err(err) => {
                error!("event=state_load module=service status=error source=seed error={err}");
                seed_state()
            }
        };
        Self { state, repo }
    }

    /// Adds a project; returns its id, or `None` for a blank name.
    pub fn add_project(&mut self, name: &str) -> Option<ProjectId> {
        let id = self.state.add_project(name);
        if id.is_some() {
            self.commit("add_project");
        }
        id
    }

    /// Adds a task under an existing project.
    ///
    /// Changes the task set, so progress is recomputed before commit.
    pub fn add_task(
        &mut self,
        project_id: ProjectId,
        name: &str,
        assigned_to: Option<MemberId>,
    ) -> Option<TaskId> {
        let id = self.state.add_task(project_id, name, assigned_to);
        if id.is_some() {
            self.refresh_progress();
            self.commit("add_task");
        }
        id
    }

    /// Adds a team member with an optional capacity (default 5, floor 1).
    pub fn add_team_member(&mut self, name: &str, max_capacity: Option<u32>) -> Option<MemberId> {
        let id = self.state.add_member(name, max_capacity);
        if id.is_some() {
            self.commit("add_team_member");
        }
        id
    }

    /// Toggles a task's completion flag and recomputes progress.
    pub fn update_task_completion(&mut self, task_id: TaskId, complete: bool) {
        if self.state.update_task_completion(task_id, complete) {
            self.refresh_progress();
            self.commit("update_task_completion");
        }
    }

    /// Manually overrides a project's progress (clamped to 0..=100).
    ///
    /// Deliberately skips the task-driven recompute: the override sticks
    /// only until the next task-set mutation sweeps all projects again.
    pub fn update_project_progress(&mut self, project_id: ProjectId, progress: i64) {
        if self.state.update_project_progress(project_id, progress) {
            self.commit("update_project_progress");
        }
    }

    /// Edits a member's name and capacity (trimmed, clamped).
    pub fn update_team_member(&mut self, member_id: MemberId, name: &str, max_capacity: u32) {
        if self.state.update_member(member_id, name, max_capacity) {
            self.commit("update_team_member");
        }
    }

    /// Deletes a project and its tasks, recomputing the remainder.
    ///
    /// Idempotent: an unknown id still runs the recompute and commit.
    pub fn delete_project(&mut self, project_id: ProjectId) {
        cascade::delete_project(&mut self.state, project_id);
        self.commit("delete_project");
    }

    /// Deletes a single task and recomputes its project's progress.
    pub fn delete_task(&mut self, task_id: TaskId) {
        if self.state.delete_task(task_id) {
            self.refresh_progress();
            self.commit("delete_task");
        }
    }

    /// Deletes a member and every task assigned to it, across projects.
    ///
    /// Idempotent: an unknown id still runs the recompute and commit.
    pub fn delete_team_member(&mut self, member_id: MemberId) {
        cascade::delete_member(&mut self.state, member_id);
        self.commit("delete_team_member");
    }

    /// Read-only project snapshots with derived progress and status.
    pub fn projects(&self) -> &[Project] {
        &self.state.projects
    }

    /// Read-only tasks owned by one project.
    pub fn tasks_for_project(&self, project_id: ProjectId) -> Vec<Task> {
        self.state.tasks_for_project(project_id).cloned().collect()
    }

    /// Member workload views, derived fresh from the current task set.
    pub fn team_overview(&self) -> Vec<MemberLoadView> {
        analyze(&self.state.team_members, &self.state.tasks)
    }

    /// Read-only view of the full state.
    pub fn state(&self) -> &WorkloadState {
        &self.state
    }

    fn refresh_progress(&mut self) {
        self.state.projects = recalculate(&self.state.projects, &self.state.tasks);
    }

    fn commit(&mut self, op: &'static str) {
        match self.repo.save_state(&self.state) {
            Ok(()) => info!(
                "event=state_commit module=service status=ok op={op} projects={} tasks={} members={}",
                self.state.projects.len(),
                self.state.tasks.len(),
                self.state.team_members.len()
            ),
            Err(err) => {
                error!("event=state_commit module=service status=error op={op} error={err}");
            }
        }
    }
}

/// Fills absent snapshot fields from the seed dataset.
///
/// Stored projects keep their persisted progress untouched (a manual
/// override must survive a reload); seeded projects carry no stored
/// derivation yet, so their progress is derived from the merged task set.
fn merge_with_seed(snapshot: StateSnapshot) -> WorkloadState {
    let projects_seeded = snapshot.projects.is_none();
    let mut state = WorkloadState {
        projects: snapshot.projects.unwrap_or_else(seed_projects),
        tasks: snapshot.tasks.unwrap_or_else(seed_tasks),
        team_members: snapshot.team_members.unwrap_or_else(seed_members),
    };
    if projects_seeded {
        state.projects = recalculate(&state.projects, &state.tasks);
    }
    state
}
