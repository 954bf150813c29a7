//! Snapshot repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist and reload the `{projects, tasks, teamMembers}` record.
//! - Keep SQL and JSON payload details inside the persistence boundary.
//!
//! # Invariants
//! - One record, stored under [`STATE_KEY`]; saves replace it atomically.
//! - A corrupt payload surfaces as `InvalidPayload`, never a panic; the
//!   caller decides the fallback.

use crate::db::DbError;
use crate::model::member::TeamMember;
use crate::model::project::Project;
use crate::model::task::Task;
use crate::store::WorkloadState;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Well-known storage key for the single snapshot record.
pub const STATE_KEY: &str = "teamtrack_state";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for snapshot persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    MissingRequiredTable(&'static str),
    InvalidPayload(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing; run migrations first")
            }
            Self::InvalidPayload(detail) => {
                write!(f, "invalid persisted snapshot payload: {detail}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::MissingRequiredTable(_) => None,
            Self::InvalidPayload(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Partially-present snapshot record as read back from storage.
///
/// Fields absent from the stored payload deserialize to `None`; the service
/// layer substitutes the seed portion per field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSnapshot {
    pub projects: Option<Vec<Project>>,
    pub tasks: Option<Vec<Task>>,
    pub team_members: Option<Vec<TeamMember>>,
}

/// Repository interface for snapshot persistence.
pub trait StateRepository {
    /// Loads the stored snapshot, `None` when no record exists yet.
    fn load_state(&self) -> RepoResult<Option<StateSnapshot>>;

    /// Persists the full state, replacing any previous record.
    fn save_state(&self, state: &WorkloadState) -> RepoResult<()>;
}

/// SQLite-backed snapshot repository.
pub struct SqliteStateRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStateRepository<'conn> {
    /// Wraps a migrated connection, verifying the snapshot table exists.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let table_present: Option<String> = conn
            .query_row(
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'snapshots';",
                [],
                |row| row.get(0),
            )
            .optional()?;
        if table_present.is_none() {
            return Err(RepoError::MissingRequiredTable("snapshots"));
        }
        Ok(Self { conn })
    }
}

impl StateRepository for SqliteStateRepository<'_> {
    fn load_state(&self) -> RepoResult<Option<StateSnapshot>> {
        let payload: Option<String> = self
            .conn
            .query_row(
                "SELECT payload FROM snapshots WHERE key = ?1;",
                [STATE_KEY],
                |row| row.get(0),
            )
            .optional()?;

        match payload {
            Some(raw) => {
                let snapshot = serde_json::from_str(&raw)
                    .map_err(|err| RepoError::InvalidPayload(err.to_string()))?;
                Ok(Some(snapshot))
            }
            None => Ok(None),
        }
    }

    fn save_state(&self, state: &WorkloadState) -> RepoResult<()> {
        let payload = serde_json::to_string(state)
            .map_err(|err| RepoError::InvalidPayload(err.to_string()))?;

        self.conn.execute(
            "INSERT INTO snapshots (key, payload, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at;",
            params![STATE_KEY, payload],
        )?;

        Ok(())
    }
}
