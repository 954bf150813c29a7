//! Member workload analysis.
//!
//! # Responsibility
//! - Derive open-task counts, utilization, and risk tier per member.
//!
//! # Invariants
//! - Pure over borrowed snapshots; recomputed on every read, never cached.
//! - `capacity_pct` is the clamped display value in 0..=100; risk tiers are
//!   classified from the exact unclamped ratio.

use crate::model::member::{clamp_capacity, MemberId, TeamMember};
use crate::model::task::Task;
use serde::{Deserialize, Serialize};

/// Workload classification relative to capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Normal,
    Elevated,
    Critical,
}

impl RiskTier {
    /// Short display label for list output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Elevated => "elevated",
            Self::Critical => "critical",
        }
    }
}

/// Read model combining a member record with its derived workload fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberLoadView {
    pub id: MemberId,
    pub name: String,
    pub max_capacity: u32,
    /// Assigned tasks not yet complete.
    pub open_tasks: u32,
    /// Clamped utilization percentage for display, always in 0..=100.
    pub capacity_pct: u8,
    /// Open tasks beyond capacity; 0 while within capacity.
    pub over_capacity: u32,
    pub risk: RiskTier,
}

/// Derives a workload view for every member from the given task set.
pub fn analyze(members: &[TeamMember], tasks: &[Task]) -> Vec<MemberLoadView> {
    members
        .iter()
        .map(|member| analyze_member(member, tasks))
        .collect()
}

fn analyze_member(member: &TeamMember, tasks: &[Task]) -> MemberLoadView {
    let open_tasks = tasks.iter().filter(|t| t.is_open_for(member.id)).count() as u32;
    let max_capacity = clamp_capacity(member.max_capacity);

    let capacity_pct = (f64::from(open_tasks) * 100.0 / f64::from(max_capacity))
        .round()
        .min(100.0) as u8;

    // Tier thresholds compare the unclamped ratio, so clamping the display
    // value never hides an overload: ratio > 90 is open*100 > cap*90.
    let risk = if open_tasks > max_capacity || open_tasks * 100 > max_capacity * 90 {
        RiskTier::Critical
    } else if open_tasks * 100 > max_capacity * 50 {
        RiskTier::Elevated
    } else {
        RiskTier::Normal
    };

    MemberLoadView {
        id: member.id,
        name: member.name.clone(),
        max_capacity: member.max_capacity,
        open_tasks,
        capacity_pct,
        over_capacity: open_tasks.saturating_sub(max_capacity),
        risk,
    }
}
