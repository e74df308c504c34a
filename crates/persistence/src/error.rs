//! Store error type.

use thiserror::Error;

/// PostgreSQL SQLSTATE codes that signal a constraint violation.
const UNIQUE_VIOLATION: &str = "23505";
const NOT_NULL_VIOLATION: &str = "23502";
const CHECK_VIOLATION: &str = "23514";

/// Errors returned by repositories.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Record not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            sqlx::Error::Database(db_err) => {
                let is_constraint = matches!(
                    db_err.code().as_deref(),
                    Some(UNIQUE_VIOLATION) | Some(NOT_NULL_VIOLATION) | Some(CHECK_VIOLATION)
                );
                if is_constraint {
                    let constraint = db_err
                        .constraint()
                        .map(str::to_string)
                        .unwrap_or_else(|| db_err.message().to_string());
                    StoreError::ConstraintViolation(constraint)
                } else {
                    StoreError::Database(sqlx::Error::Database(db_err))
                }
            }
            other => StoreError::Database(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err: StoreError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, StoreError::NotFound));
    }

    #[test]
    fn test_other_errors_map_to_database() {
        let err: StoreError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, StoreError::Database(_)));
        assert!(err.to_string().starts_with("Database error"));
    }

    #[test]
    fn test_display() {
        assert_eq!(StoreError::NotFound.to_string(), "Record not found");
        assert_eq!(
            StoreError::ConstraintViolation("uq_app_user_email".to_string()).to_string(),
            "Constraint violation: uq_app_user_email"
        );
    }
}
