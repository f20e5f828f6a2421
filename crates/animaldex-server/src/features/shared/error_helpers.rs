//! Database error handling utilities
//!
//! Helpers for recognising constraint violations raised by PostgreSQL when a
//! pre-check inside the transaction lost a race.
//!
//! # Examples
//!
//! ```rust,ignore
//! use animaldex_server::features::shared::error_helpers::map_unique_violation;
//!
//! sqlx::query(...)
//!     .execute(&mut *tx)
//!     .await
//!     .map_err(|e| map_unique_violation(e, CreateAnimalError::Duplicate(name), CreateAnimalError::Database))?;
//! ```

use sqlx::Error as SqlxError;

/// Kind of constraint a database error violated
#[derive(Debug)]
pub enum ConstraintViolation {
    UniqueViolation,
    ForeignKeyViolation,
    CheckViolation,
    /// No constraint violation - some other error occurred
    Other(SqlxError),
}

pub fn check_constraint_violation(error: SqlxError) -> ConstraintViolation {
    if let SqlxError::Database(ref db_err) = error {
        if db_err.is_unique_violation() {
            return ConstraintViolation::UniqueViolation;
        }
        if db_err.is_foreign_key_violation() {
            return ConstraintViolation::ForeignKeyViolation;
        }
        if db_err.is_check_violation() {
            return ConstraintViolation::CheckViolation;
        }
    }
    ConstraintViolation::Other(error)
}

pub fn is_unique_violation(error: &SqlxError) -> bool {
    matches!(error, SqlxError::Database(db_err) if db_err.is_unique_violation())
}

/// Replace a unique violation with `unique_error`, wrap anything else
pub fn map_unique_violation<E, F>(error: SqlxError, unique_error: E, default_wrapper: F) -> E
where
    F: FnOnce(SqlxError) -> E,
{
    if is_unique_violation(&error) {
        unique_error
    } else {
        default_wrapper(error)
    }
}
