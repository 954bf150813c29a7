//! Team member domain model.
//!
//! # Invariants
//! - `name` is stored trimmed and non-empty.
//! - `max_capacity` never drops below 1; the floor is enforced on write.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a team member.
pub type MemberId = Uuid;

/// Capacity assumed when a member is created without an explicit value.
pub const DEFAULT_MAX_CAPACITY: u32 = 5;

/// Staffing unit with a maximum concurrent open-task capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: MemberId,
    pub name: String,
    /// Concurrent open-task budget used for utilization and risk derivation.
    pub max_capacity: u32,
}

impl TeamMember {
    /// Creates a new member with a generated stable ID.
    ///
    /// A missing capacity defaults to [`DEFAULT_MAX_CAPACITY`]; any provided
    /// value is clamped to the floor of 1.
    pub fn new(name: impl Into<String>, max_capacity: Option<u32>) -> Self {
        Self::with_id(Uuid::new_v4(), name, max_capacity)
    }

    /// Creates a member with a caller-provided stable ID.
    pub fn with_id(id: MemberId, name: impl Into<String>, max_capacity: Option<u32>) -> Self {
        Self {
            id,
            name: name.into(),
            max_capacity: clamp_capacity(max_capacity.unwrap_or(DEFAULT_MAX_CAPACITY)),
        }
    }
}

/// Clamps a capacity value to the enforced floor of 1.
///
/// Out-of-range values are clamped, never rejected.
pub fn clamp_capacity(value: u32) -> u32 {
    value.max(1)
}
