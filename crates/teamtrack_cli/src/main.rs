//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `teamtrack_core` wiring end to
//!   end: seed, mutate, and print the derived views.
//! - Keep output deterministic for quick local sanity checks.

use std::error::Error;

use teamtrack_core::db::open_db_in_memory;
use teamtrack_core::{SqliteStateRepository, WorkloadService};

fn main() {
    if let Err(err) = run() {
        eprintln!("teamtrack: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    println!("teamtrack_core ping={}", teamtrack_core::ping());
    println!("teamtrack_core version={}", teamtrack_core::core_version());

    // In-memory store: the probe always starts from the seed dataset.
    let conn = open_db_in_memory()?;
    let repo = SqliteStateRepository::try_new(&conn)?;
    let mut service = WorkloadService::load(repo);

    print_summary(&service);

    // Drive one task-set mutation so the derived paths are exercised too.
    let first_project = service.projects().first().map(|project| project.id);
    if let Some(project_id) = first_project {
        if let Some(task) = service
            .tasks_for_project(project_id)
            .iter()
            .find(|task| !task.is_complete)
        {
            let task_id = task.id;
            service.update_task_completion(task_id, true);
            println!("completed one open task in the first seed project");
            print_summary(&service);
        }
    }

    Ok(())
}

fn print_summary<R: teamtrack_core::StateRepository>(service: &WorkloadService<R>) {
    for project in service.projects() {
        println!(
            "project name={:?} progress={} status={}",
            project.name,
            project.progress,
            project.status.label()
        );
    }
    for view in service.team_overview() {
        println!(
            "member name={:?} open={} capacity={} pct={} over={} risk={}",
            view.name,
            view.open_tasks,
            view.max_capacity,
            view.capacity_pct,
            view.over_capacity,
            view.risk.label()
        );
    }
}
