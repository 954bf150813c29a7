//! Fixed seed dataset used when no persisted snapshot exists.
//!
//! # Invariants
//! - Seed ids are fixed so repeated seeding is deterministic.
//! - Seed project progress is derived from the seed task set, never
//!   hand-written.

use crate::derive::progress::recalculate;
use crate::model::member::TeamMember;
use crate::model::project::Project;
use crate::model::task::Task;
use crate::store::WorkloadState;
use uuid::{uuid, Uuid};

const PROJECT_WEBSITE: Uuid = uuid!("6d9a2c61-0b4e-4f3a-9c2e-0a1d8b3f5e10");
const PROJECT_MOBILE: Uuid = uuid!("6d9a2c61-0b4e-4f3a-9c2e-0a1d8b3f5e11");
const PROJECT_PIPELINE: Uuid = uuid!("6d9a2c61-0b4e-4f3a-9c2e-0a1d8b3f5e12");

const MEMBER_AVA: Uuid = uuid!("b4f1c7d2-3e58-4a6b-8d90-2c5e7f9a1b20");
const MEMBER_MARCUS: Uuid = uuid!("b4f1c7d2-3e58-4a6b-8d90-2c5e7f9a1b21");
const MEMBER_PRIYA: Uuid = uuid!("b4f1c7d2-3e58-4a6b-8d90-2c5e7f9a1b22");

const TASK_IDS: [Uuid; 6] = [
    uuid!("0e8c5a13-7f24-4d6e-b1a9-4c2d6e8f0a30"),
    uuid!("0e8c5a13-7f24-4d6e-b1a9-4c2d6e8f0a31"),
    uuid!("0e8c5a13-7f24-4d6e-b1a9-4c2d6e8f0a32"),
    uuid!("0e8c5a13-7f24-4d6e-b1a9-4c2d6e8f0a33"),
    uuid!("0e8c5a13-7f24-4d6e-b1a9-4c2d6e8f0a34"),
    uuid!("0e8c5a13-7f24-4d6e-b1a9-4c2d6e8f0a35"),
];

/// Builds the full seed state with derived progress already applied.
pub fn seed_state() -> WorkloadState {
    let mut state = WorkloadState {
        projects: seed_projects(),
        tasks: seed_tasks(),
        team_members: seed_members(),
    };
    state.projects = recalculate(&state.projects, &state.tasks);
    state
}

/// Seed projects, at zero progress until derived from the seed tasks.
pub fn seed_projects() -> Vec<Project> {
    vec![
        Project::with_id(PROJECT_WEBSITE, "Website Refresh"),
        Project::with_id(PROJECT_MOBILE, "Mobile Onboarding"),
        Project::with_id(PROJECT_PIPELINE, "Data Pipeline"),
    ]
}

/// Seed tasks spanning all three projects.
pub fn seed_tasks() -> Vec<Task> {
    let mut landing = Task::with_id(
        TASK_IDS[0],
        PROJECT_WEBSITE,
        "Draft new landing page",
        Some(MEMBER_AVA),
    );
    landing.is_complete = true;

    vec![
        landing,
        Task::with_id(
            TASK_IDS[1],
            PROJECT_WEBSITE,
            "Migrate blog styles",
            Some(MEMBER_AVA),
        ),
        Task::with_id(
            TASK_IDS[2],
            PROJECT_WEBSITE,
            "Accessibility audit",
            Some(MEMBER_PRIYA),
        ),
        Task::with_id(
            TASK_IDS[3],
            PROJECT_MOBILE,
            "Sketch onboarding flow",
            Some(MEMBER_MARCUS),
        ),
        Task::with_id(
            TASK_IDS[4],
            PROJECT_MOBILE,
            "Instrument signup funnel",
            Some(MEMBER_PRIYA),
        ),
        Task::with_id(TASK_IDS[5], PROJECT_PIPELINE, "Backfill event archive", None),
    ]
}

/// Seed members with capacities 5, 5, and 4.
pub fn seed_members() -> Vec<TeamMember> {
    vec![
        TeamMember::with_id(MEMBER_AVA, "Ava Torres", Some(5)),
        TeamMember::with_id(MEMBER_MARCUS, "Marcus Lee", Some(5)),
        TeamMember::with_id(MEMBER_PRIYA, "Priya Shah", Some(4)),
    ]
}
