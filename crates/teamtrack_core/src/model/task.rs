//! Task domain model.
//!
//! # Invariants
//! - `project_id` references the owning project; a task never outlives it.
//! - `assigned_to_member_id` is `None` for unassigned tasks.

use crate::model::member::MemberId;
use crate::model::project::ProjectId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a task.
pub type TaskId = Uuid;

/// Atomic unit of work belonging to exactly one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    /// Owning project; deleting that project deletes this task.
    pub project_id: ProjectId,
    pub name: String,
    pub is_complete: bool,
    /// Assigned member, if any; deleting that member deletes this task.
    pub assigned_to_member_id: Option<MemberId>,
}

impl Task {
    /// Creates a new incomplete task with a generated stable ID.
    pub fn new(
        project_id: ProjectId,
        name: impl Into<String>,
        assigned_to_member_id: Option<MemberId>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), project_id, name, assigned_to_member_id)
    }

    /// Creates a task with a caller-provided stable ID.
    pub fn with_id(
        id: TaskId,
        project_id: ProjectId,
        name: impl Into<String>,
        assigned_to_member_id: Option<MemberId>,
    ) -> Self {
        Self {
            id,
            project_id,
            name: name.into(),
            is_complete: false,
            assigned_to_member_id,
        }
    }

    /// Returns whether the task counts against a member's open workload.
    pub fn is_open_for(&self, member_id: MemberId) -> bool {
        self.assigned_to_member_id == Some(member_id) && !self.is_complete
    }
}
