use rusqlite::Connection;
use teamtrack_core::db::open_db_in_memory;
use teamtrack_core::{
    ProjectId, ProjectStatus, RiskTier, SqliteStateRepository, WorkloadService,
};
use uuid::Uuid;

fn service(conn: &Connection) -> WorkloadService<SqliteStateRepository<'_>> {
    let repo = SqliteStateRepository::try_new(conn).unwrap();
    WorkloadService::load(repo)
}

fn project_id_by_name<R: teamtrack_core::StateRepository>(
    service: &WorkloadService<R>,
    name: &str,
) -> ProjectId {
    service
        .projects()
        .iter()
        .find(|project| project.name == name)
        .unwrap()
        .id
}

fn absent_id() -> Uuid {
    Uuid::parse_str("00000000-0000-4000-8000-999999999999").unwrap()
}

#[test]
fn loads_seed_dataset_when_store_is_empty() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    assert_eq!(service.projects().len(), 3);
    assert_eq!(service.state().tasks.len(), 6);

    let capacities: Vec<u32> = service
        .state()
        .team_members
        .iter()
        .map(|member| member.max_capacity)
        .collect();
    assert_eq!(capacities, vec![5, 5, 4]);

    // One of three seed tasks in the first project is complete.
    let website = project_id_by_name(&service, "Website Refresh");
    let website_project = service.projects().iter().find(|p| p.id == website).unwrap();
    assert_eq!(website_project.progress, 33);
    assert_eq!(website_project.status, ProjectStatus::InProgress);
}

#[test]
fn mutations_persist_across_reload() {
    let conn = open_db_in_memory().unwrap();
    let mut first = service(&conn);

    let added = first.add_project("Quarterly Audit").unwrap();
    first.add_task(added, "Collect reports", None).unwrap();

    let second = service(&conn);
    assert_eq!(second.projects().len(), 4);
    assert_eq!(second.tasks_for_project(added).len(), 1);
}

#[test]
fn completing_every_task_flips_the_project_to_completed() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);
    let website = project_id_by_name(&service, "Website Refresh");

    let open_tasks: Vec<_> = service
        .tasks_for_project(website)
        .into_iter()
        .filter(|task| !task.is_complete)
        .map(|task| task.id)
        .collect();
    assert_eq!(open_tasks.len(), 2);

    service.update_task_completion(open_tasks[0], true);
    let midway = service.projects().iter().find(|p| p.id == website).unwrap();
    assert_eq!(midway.progress, 67);

    service.update_task_completion(open_tasks[1], true);
    let done = service.projects().iter().find(|p| p.id == website).unwrap();
    assert_eq!(done.progress, 100);
    assert_eq!(done.status, ProjectStatus::Completed);
}

#[test]
fn manual_override_sets_progress_and_status_directly() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);
    let pipeline = project_id_by_name(&service, "Data Pipeline");

    service.update_project_progress(pipeline, 100);
    let project = service.projects().iter().find(|p| p.id == pipeline).unwrap();
    assert_eq!(project.progress, 100);
    assert_eq!(project.status, ProjectStatus::Completed);

    service.update_project_progress(pipeline, 250);
    let project = service.projects().iter().find(|p| p.id == pipeline).unwrap();
    assert_eq!(project.progress, 100);

    service.update_project_progress(pipeline, -5);
    let project = service.projects().iter().find(|p| p.id == pipeline).unwrap();
    assert_eq!(project.progress, 0);
    assert_eq!(project.status, ProjectStatus::InProgress);
}

#[test]
fn manual_override_is_swept_by_the_next_task_mutation_anywhere() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);
    let pipeline = project_id_by_name(&service, "Data Pipeline");
    let website = project_id_by_name(&service, "Website Refresh");

    service.update_project_progress(pipeline, 50);
    let overridden = service.projects().iter().find(|p| p.id == pipeline).unwrap();
    assert_eq!(overridden.progress, 50);

    // Toggling a task in a different project sweeps every project, so the
    // override reverts to the task-derived value.
    let website_task = service.tasks_for_project(website)[1].id;
    service.update_task_completion(website_task, true);

    let reverted = service.projects().iter().find(|p| p.id == pipeline).unwrap();
    assert_eq!(reverted.progress, 0);
}

#[test]
fn unknown_id_operations_are_noops() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);
    let before = service.state().clone();

    service.update_task_completion(absent_id(), true);
    service.update_project_progress(absent_id(), 50);
    service.update_team_member(absent_id(), "Nobody", 3);
    service.delete_task(absent_id());
    service.delete_project(absent_id());
    service.delete_team_member(absent_id());

    assert_eq!(service.state(), &before);
}

#[test]
fn add_task_requires_an_existing_project() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);
    let before = service.state().tasks.len();

    assert!(service.add_task(absent_id(), "Orphan", None).is_none());
    assert_eq!(service.state().tasks.len(), before);
}

#[test]
fn add_task_with_unknown_assignee_is_stored_unassigned() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);
    let pipeline = project_id_by_name(&service, "Data Pipeline");

    let task_id = service
        .add_task(pipeline, "Verify checkpoints", Some(absent_id()))
        .unwrap();

    let task = service
        .tasks_for_project(pipeline)
        .into_iter()
        .find(|task| task.id == task_id)
        .unwrap();
    assert_eq!(task.assigned_to_member_id, None);
}

#[test]
fn blank_names_are_rejected_as_noops_on_add() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);
    let before = service.state().clone();

    assert!(service.add_project("   ").is_none());
    assert!(service.add_team_member("\t", None).is_none());

    assert_eq!(service.state(), &before);
}

#[test]
fn update_team_member_trims_name_and_clamps_capacity() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);
    let member_id = service.state().team_members[0].id;

    service.update_team_member(member_id, "  Ava T.  ", 0);
    let member = service.state().team_members[0].clone();
    assert_eq!(member.name, "Ava T.");
    assert_eq!(member.max_capacity, 1);

    // A blank name keeps the existing one; the capacity still applies.
    service.update_team_member(member_id, "   ", 6);
    let member = service.state().team_members[0].clone();
    assert_eq!(member.name, "Ava T.");
    assert_eq!(member.max_capacity, 6);
}

#[test]
fn team_overview_reflects_task_mutations_immediately() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);
    let pipeline = project_id_by_name(&service, "Data Pipeline");

    let priya = service
        .state()
        .team_members
        .iter()
        .find(|member| member.name == "Priya Shah")
        .unwrap()
        .id;

    let before = service.team_overview();
    let priya_before = before.iter().find(|view| view.id == priya).unwrap();
    assert_eq!(priya_before.open_tasks, 2);
    assert_eq!(priya_before.capacity_pct, 50);
    assert_eq!(priya_before.risk, RiskTier::Normal);

    service
        .add_task(pipeline, "Schema review", Some(priya))
        .unwrap();

    let after = service.team_overview();
    let priya_after = after.iter().find(|view| view.id == priya).unwrap();
    assert_eq!(priya_after.open_tasks, 3);
    assert_eq!(priya_after.capacity_pct, 75);
    assert_eq!(priya_after.risk, RiskTier::Elevated);
}

#[test]
fn deleting_a_member_recomputes_every_affected_project() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);
    let website = project_id_by_name(&service, "Website Refresh");
    let mobile = project_id_by_name(&service, "Mobile Onboarding");

    // Priya holds one open task in each of the two projects.
    let priya = service
        .state()
        .team_members
        .iter()
        .find(|member| member.name == "Priya Shah")
        .unwrap()
        .id;

    service.delete_team_member(priya);

    assert_eq!(service.state().team_members.len(), 2);
    assert_eq!(service.tasks_for_project(website).len(), 2);
    assert_eq!(service.tasks_for_project(mobile).len(), 1);

    // Website: one complete out of two remaining tasks.
    let website_project = service.projects().iter().find(|p| p.id == website).unwrap();
    assert_eq!(website_project.progress, 50);
    let mobile_project = service.projects().iter().find(|p| p.id == mobile).unwrap();
    assert_eq!(mobile_project.progress, 0);
}
