//! Conversions from storage and runtime errors into domain errors.

use r2d2::Error as PoolError;
use rusqlite::ffi::ErrorCode;
use rusqlite::Error as SqlError;
use tokio::task::JoinError;
use workpace_domain::WorkpaceError;

/// SQLITE_CONSTRAINT_PRIMARYKEY and SQLITE_CONSTRAINT_UNIQUE.
const DUPLICATE_KEY_CODES: [i32; 2] = [1555, 2067];
/// SQLITE_CONSTRAINT_CHECK.
const CHECK_CONSTRAINT_CODE: i32 = 275;

/// Newtype that keeps storage error mapping on the infrastructure side.
#[derive(Debug)]
pub struct InfraError(pub WorkpaceError);

impl From<InfraError> for WorkpaceError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<WorkpaceError> for InfraError {
    fn from(value: WorkpaceError) -> Self {
        InfraError(value)
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        let mapped = match value {
            SqlError::SqliteFailure(err, message) => match err.code {
                ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked => {
                    WorkpaceError::Database("entry store is busy, retry the request".into())
                }
                ErrorCode::ConstraintViolation
                    if DUPLICATE_KEY_CODES.contains(&err.extended_code) =>
                {
                    WorkpaceError::Database("duplicate entry id".into())
                }
                ErrorCode::ConstraintViolation if err.extended_code == CHECK_CONSTRAINT_CODE => {
                    WorkpaceError::Database(format!(
                        "stored entry failed a column check: {}",
                        message.unwrap_or_default()
                    ))
                }
                _ => WorkpaceError::Database(format!(
                    "sqlite failure (code {}): {}",
                    err.extended_code,
                    message.unwrap_or_default()
                )),
            },
            SqlError::QueryReturnedNoRows => WorkpaceError::NotFound("entry".into()),
            SqlError::FromSqlConversionFailure(column, _, cause) => {
                WorkpaceError::Database(format!("unreadable value in column {column}: {cause}"))
            }
            other => WorkpaceError::Database(other.to_string()),
        };
        InfraError(mapped)
    }
}

impl From<PoolError> for InfraError {
    fn from(value: PoolError) -> Self {
        InfraError(WorkpaceError::Database(format!("connection pool unavailable: {value}")))
    }
}

impl From<JoinError> for InfraError {
    fn from(value: JoinError) -> Self {
        let mapped = if value.is_cancelled() {
            WorkpaceError::Internal("blocking database task was cancelled".into())
        } else {
            WorkpaceError::Internal(format!("blocking database task panicked: {value}"))
        };
        InfraError(mapped)
    }
}
