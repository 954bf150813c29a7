//! Core domain logic for TeamTrack.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod derive;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use derive::capacity::{analyze, MemberLoadView, RiskTier};
pub use derive::progress::recalculate;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::member::{MemberId, TeamMember, DEFAULT_MAX_CAPACITY};
pub use model::project::{Project, ProjectId, ProjectStatus};
pub use model::task::{Task, TaskId};
pub use repo::state_repo::{
    RepoError, RepoResult, SqliteStateRepository, StateRepository, StateSnapshot, STATE_KEY,
};
pub use service::workload_service::WorkloadService;
pub use store::seed::seed_state;
pub use store::WorkloadState;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
