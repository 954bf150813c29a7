//! Owned entity store for projects, tasks, and team members.
//!
//! # Responsibility
//! - Hold the three entity collections as the single source of truth.
//! - Provide total mutation primitives that never corrupt referential shape.
//!
//! # Invariants
//! - Exactly one `WorkloadState` value owns the collections; callers read
//!   borrowed snapshots and mutate only through these primitives.
//! - Every add assigns a fresh, collision-free identity.
//! - Operations targeting an unknown id are silent no-ops.
//! - `max_capacity` never drops below 1 and `progress` stays in 0..=100
//!   across every write path.

pub mod cascade;
pub mod seed;

use crate::model::member::{clamp_capacity, MemberId, TeamMember};
use crate::model::project::{Project, ProjectId};
use crate::model::task::{Task, TaskId};
use serde::{Deserialize, Serialize};

/// The single mutable container for all tracked entities.
///
/// Serializes as the snapshot record `{projects, tasks, teamMembers}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadState {
    pub projects: Vec<Project>,
    pub tasks: Vec<Task>,
    pub team_members: Vec<TeamMember>,
}

impl WorkloadState {
    /// Creates an empty state with no entities.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a project with zero progress.
    ///
    /// Returns the fresh id, or `None` when the name is blank after trim.
    pub fn add_project(&mut self, name: &str) -> Option<ProjectId> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let project = Project::new(name);
        let id = project.id;
        self.projects.push(project);
        Some(id)
    }

    /// Adds an incomplete task under an existing project.
    ///
    /// Returns `None` without touching state when the owning project does not
    /// exist or the name is blank. An assignment to an unknown member is
    /// stored as unassigned so the task graph never carries a dangling
    /// member reference.
    pub fn add_task(
        &mut self,
        project_id: ProjectId,
        name: &str,
        assigned_to: Option<MemberId>,
    ) -> Option<TaskId> {
        let name = name.trim();
        if name.is_empty() || self.project(project_id).is_none() {
            return None;
        }
        let assigned_to = assigned_to.filter(|id| self.member(*id).is_some());
        let task = Task::new(project_id, name, assigned_to);
        let id = task.id;
        self.tasks.push(task);
        Some(id)
    }

    /// Adds a team member, defaulting and clamping capacity.
    ///
    /// Returns the fresh id, or `None` when the name is blank after trim.
    pub fn add_member(&mut self, name: &str, max_capacity: Option<u32>) -> Option<MemberId> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let member = TeamMember::new(name, max_capacity);
        let id = member.id;
        self.team_members.push(member);
        Some(id)
    }

    /// Sets a task's completion flag.
    ///
    /// Returns whether a task was updated; unknown ids are no-ops.
    pub fn update_task_completion(&mut self, task_id: TaskId, complete: bool) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == task_id) {
            Some(task) => {
                task.is_complete = complete;
                true
            }
            None => false,
        }
    }

    /// Manually overrides a project's progress.
    ///
    /// The value is clamped to 0..=100 and the status follows the clamped
    /// value. This path intentionally bypasses task-driven recomputation; the
    /// override holds only until the next task-set mutation sweeps it away.
    pub fn update_project_progress(&mut self, project_id: ProjectId, progress: i64) -> bool {
        match self.projects.iter_mut().find(|p| p.id == project_id) {
            Some(project) => {
                project.set_progress(progress);
                true
            }
            None => false,
        }
    }

    /// Edits a member's name and capacity.
    ///
    /// The name is trimmed; a blank name keeps the existing one. Capacity is
    /// clamped to the floor of 1. Unknown ids are no-ops.
    pub fn update_member(&mut self, member_id: MemberId, name: &str, max_capacity: u32) -> bool {
        match self.team_members.iter_mut().find(|m| m.id == member_id) {
            Some(member) => {
                let name = name.trim();
                if !name.is_empty() {
                    member.name = name.to_string();
                }
                member.max_capacity = clamp_capacity(max_capacity);
                true
            }
            None => false,
        }
    }

    /// Removes a single task.
    ///
    /// Returns whether a task was removed; unknown ids are no-ops.
    pub fn delete_task(&mut self, task_id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != task_id);
        self.tasks.len() != before
    }

    pub fn project(&self, project_id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == project_id)
    }

    pub fn task(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    pub fn member(&self, member_id: MemberId) -> Option<&TeamMember> {
        self.team_members.iter().find(|m| m.id == member_id)
    }

    /// Iterates the tasks owned by one project, in insertion order.
    pub fn tasks_for_project(&self, project_id: ProjectId) -> impl Iterator<Item = &Task> {
        self.tasks
            .iter()
            .filter(move |task| task.project_id == project_id)
    }
}
