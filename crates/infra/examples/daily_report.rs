//! Example: Recording a day of work and exporting the status report
//!
//! Wires the performance service over an in-memory SQLite database, submits
//! entries as two performers, and prints the lead's view of the day.
//!
//! Run with:
//! ```bash
//! cargo run -p workpace-infra --example daily_report
//! ```
//!
//! Set `WORKPACE_DB_PATH` and `WORKPACE_DB_POOL_SIZE` to write to a file
//! instead.

use std::sync::Arc;

use anyhow::Context;
use chrono::Local;
use workpace_core::{MetricsEngine, PerformanceService};
use workpace_domain::{Config, GroupKey, RawEntryInput, Role, Viewer};
use workpace_infra::{config, init_logging, DbManager, SqliteEntryRepository, StaticIdentityProvider};

fn entry(performer: &str, title: &str, task_type: &str, completed: f64, hours: f64) -> RawEntryInput {
    RawEntryInput {
        performer_name: Some(performer.to_string()),
        title_name: Some(title.to_string()),
        task_type: Some(task_type.to_string()),
        completed_work: Some(completed),
        estimated_time: Some(hours),
        taken_time: Some(hours),
        date: Some(Local::now().date_naive().format("%Y-%m-%d").to_string()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let loaded = config::load_from_env().ok();
    let settings = loaded.clone().unwrap_or_default();
    init_logging(&settings.logging)?;

    let db = match loaded {
        Some(Config { database, .. }) => DbManager::from_config(&database)?,
        None => DbManager::in_memory()?,
    };
    db.run_migrations().context("applying schema")?;
    let db = Arc::new(db);

    let engine = Arc::new(MetricsEngine::new(Arc::new(settings.standards_catalog()?)));
    let service_for = |viewer: Viewer| {
        PerformanceService::new(
            Arc::clone(&engine),
            Arc::new(SqliteEntryRepository::new(Arc::clone(&db))),
            Arc::new(StaticIdentityProvider::new(viewer)),
        )
    };

    let asha = service_for(Viewer::new("u1", "acme", Role::Performer, "Asha"));
    let ben = service_for(Viewer::new("u2", "acme", Role::Performer, "Ben"));
    let lead = service_for(Viewer::new("lead", "acme", Role::Lead, "Dana"));

    asha.submit(&entry("Asha", "Journal of Testing, Vol. 2", "Prestyle", 450.0, 4.0)).await?;
    asha.submit(&entry("Asha", "Atlas of Rivers", "Ref Edit", 150.0, 4.0)).await?;
    ben.submit(&entry("Ben", "Field Guide", "Preedit", 160.0, 8.0)).await?;

    let today = Local::now().date_naive();
    let daily = lead.daily_summary(today).await?;
    println!("Team summary for {today}");
    println!(
        "  work {:.2}, hours {:.2}, weighted {:.2}% ({})",
        daily.total_work,
        daily.total_time,
        daily.weighted_achievement_percent,
        if daily.is_achieved { "achieved" } else { "not achieved" }
    );

    println!("\nBy performer");
    for (name, summary) in lead.grouped_summary(GroupKey::Performer).await? {
        println!("  {name}: {:.2}%", summary.weighted_achievement_percent);
    }

    println!("\nLeaderboard");
    for (position, ranking) in lead.leaderboard().await?.rankings.iter().enumerate() {
        println!(
            "  {}. {} {:.2}%",
            position + 1,
            ranking.performer_name,
            ranking.average_achievement_percent
        );
    }

    let report = lead.export_csv().await?;
    println!("\n{}\n{}", report.file_name, report.content);

    Ok(())
}
