//! Activity entry repository backed by SQLite
//!
//! Entries are written once with their metrics already computed, so rows are
//! never updated. Dates are stored as ISO `YYYY-MM-DD` text, which keeps
//! lexical order equal to calendar order.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use tokio::task;
use tracing::debug;
use uuid::Uuid;
use workpace_core::performance::EntryRepository;
use workpace_core::scope::EntryFilter;
use workpace_domain::{
    AchievementStatus, ActivityEntry, EntryMetrics, EntryOwnership, Result as DomainResult,
    ValidEntry, WorkpaceError,
};

use super::manager::{map_sql_error, DbManager};
use crate::errors::InfraError;

const SELECT_COLUMNS: &str = "SELECT id, entry_date, performer_name, title_name, task_type,
        completed_work, estimated_time, taken_time,
        time_achieved_percent, target_achieved_percent, status,
        owner_id, scope_id
 FROM activity_entries";

/// SQLite implementation of `EntryRepository`
pub struct SqliteEntryRepository {
    db: Arc<DbManager>,
}

impl SqliteEntryRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EntryRepository for SqliteEntryRepository {
    async fn insert(&self, entry: ActivityEntry) -> DomainResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            insert_entry(&conn, &entry).map_err(map_sql_error)?;
            debug!(entry_id = %entry.id(), "Entry row inserted");
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn get(&self, id: Uuid) -> DomainResult<Option<ActivityEntry>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Option<ActivityEntry>> {
            let conn = db.get_connection()?;
            conn.query_row(
                &format!("{SELECT_COLUMNS} WHERE id = ?1"),
                params![id.to_string()],
                map_entry_row,
            )
            .optional()
            .map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn delete(&self, id: Uuid) -> DomainResult<bool> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<bool> {
            let conn = db.get_connection()?;
            let affected = conn
                .execute("DELETE FROM activity_entries WHERE id = ?1", params![id.to_string()])
                .map_err(map_sql_error)?;
            Ok(affected > 0)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn list(&self, filter: &EntryFilter) -> DomainResult<Vec<ActivityEntry>> {
        let db = Arc::clone(&self.db);
        let filter = filter.clone();

        task::spawn_blocking(move || -> DomainResult<Vec<ActivityEntry>> {
            let conn = db.get_connection()?;
            query_entries(&conn, &filter).map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }
}

fn insert_entry(conn: &Connection, entry: &ActivityEntry) -> rusqlite::Result<usize> {
    conn.execute(
        "INSERT INTO activity_entries (
            id, entry_date, performer_name, title_name, task_type,
            completed_work, estimated_time, taken_time,
            time_achieved_percent, target_achieved_percent, status,
            owner_id, scope_id
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        params![
            entry.id().to_string(),
            entry.iso_date(),
            entry.performer_name(),
            entry.title_name(),
            entry.task_type(),
            entry.completed_work(),
            entry.estimated_time(),
            entry.taken_time(),
            entry.time_achieved_percent(),
            entry.target_achieved_percent(),
            entry.status().to_string(),
            entry.owner_id(),
            entry.scope_id(),
        ],
    )
}

fn query_entries(conn: &Connection, filter: &EntryFilter) -> rusqlite::Result<Vec<ActivityEntry>> {
    let mut clauses = Vec::new();
    let mut values = Vec::new();

    if let Some(owner_id) = &filter.owner_id {
        clauses.push("owner_id = ?");
        values.push(owner_id.clone());
    }
    if let Some(scope_id) = &filter.scope_id {
        clauses.push("scope_id = ?");
        values.push(scope_id.clone());
    }
    if let Some(date) = filter.date {
        clauses.push("entry_date = ?");
        values.push(date.format("%Y-%m-%d").to_string());
    }

    let mut sql = String::from(SELECT_COLUMNS);
    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }
    // rowid keeps same-day entries in insertion order
    sql.push_str(" ORDER BY entry_date ASC, rowid ASC");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(values.iter()), map_entry_row)?;
    rows.collect()
}

fn map_entry_row(row: &Row<'_>) -> rusqlite::Result<ActivityEntry> {
    let id: String = row.get(0)?;
    let date: String = row.get(1)?;
    let status: String = row.get(10)?;

    let id = Uuid::parse_str(&id).map_err(|e| conversion_error(0, e))?;
    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d").map_err(|e| conversion_error(1, e))?;
    let status = status.parse::<AchievementStatus>().map_err(|e| conversion_error(10, e))?;

    let valid = ValidEntry {
        date,
        performer_name: row.get(2)?,
        title_name: row.get(3)?,
        task_type: row.get(4)?,
        completed_work: row.get(5)?,
        estimated_time: row.get(6)?,
        taken_time: row.get(7)?,
    };
    let metrics = EntryMetrics {
        time_achieved_percent: row.get(8)?,
        target_achieved_percent: row.get(9)?,
        status,
    };
    let ownership = EntryOwnership { owner_id: row.get(11)?, scope_id: row.get(12)? };

    Ok(ActivityEntry::rehydrate(id, valid, metrics, ownership))
}

fn conversion_error<E>(column: usize, err: E) -> rusqlite::Error
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    rusqlite::Error::FromSqlConversionFailure(column, Type::Text, err.into())
}

fn map_join_error(err: task::JoinError) -> WorkpaceError {
    WorkpaceError::from(InfraError::from(err))
}
