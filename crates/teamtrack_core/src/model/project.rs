//! Project domain model.
//!
//! # Responsibility
//! - Define the canonical project record and its derived status.
//! - Provide the progress clamp applied on every progress write.
//!
//! # Invariants
//! - `id` is stable and never reused for another project.
//! - `progress` stays within 0..=100.
//! - `status == Completed` exactly when `progress == 100`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a project.
pub type ProjectId = Uuid;

/// Completion state derived from `progress`.
///
/// Never set directly by a user action; every write path goes through
/// [`Project::set_progress`] or the task-driven recompute, both of which keep
/// it in step with the percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    InProgress,
    Completed,
}

impl ProjectStatus {
    /// Maps a clamped progress value to its status.
    pub fn from_progress(progress: u8) -> Self {
        if progress >= 100 {
            Self::Completed
        } else {
            Self::InProgress
        }
    }

    /// Short display label for list output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::InProgress => "in progress",
            Self::Completed => "completed",
        }
    }
}

/// Canonical project record.
///
/// Serialized with camelCase field names to match the external snapshot
/// schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Stable global ID used for task ownership references.
    pub id: ProjectId,
    pub name: String,
    /// Completion percentage in 0..=100; task-derived, or manually
    /// overridden until the next task-driven recompute.
    pub progress: u8,
    pub status: ProjectStatus,
}

impl Project {
    /// Creates a new project with a generated stable ID.
    ///
    /// Starts at zero progress with status `InProgress`.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates a project with a caller-provided stable ID.
    ///
    /// Used by seed and snapshot paths where identity already exists.
    pub fn with_id(id: ProjectId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            progress: 0,
            status: ProjectStatus::InProgress,
        }
    }

    /// Applies a raw progress value, clamping it and keeping status in step.
    pub fn set_progress(&mut self, progress: i64) {
        let clamped = clamp_progress(progress);
        self.progress = clamped;
        self.status = ProjectStatus::from_progress(clamped);
    }

    pub fn is_completed(&self) -> bool {
        self.status == ProjectStatus::Completed
    }
}

/// Clamps a raw progress input to the valid 0..=100 range.
///
/// Out-of-range values are clamped, never rejected.
pub fn clamp_progress(value: i64) -> u8 {
    value.clamp(0, 100) as u8
}
