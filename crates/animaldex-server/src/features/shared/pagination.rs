//! Shared offset pagination
//!
//! List endpoints take `skip` and `limit` query parameters. Validation runs
//! before any query is issued.
//!
//! # Examples
//!
//! ```rust,ignore
//! use animaldex_server::features::shared::pagination::Pagination;
//!
//! let page = Pagination::from_params(query.skip, query.limit)?;
//! sqlx::query_as::<_, AnimalRecord>(sql)
//!     .bind(page.limit)
//!     .bind(page.skip)
//! ```

use thiserror::Error;

/// Items returned when `limit` is not given
pub const DEFAULT_LIMIT: i64 = 20;

/// Largest accepted `limit`
pub const MAX_LIMIT: i64 = 100;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaginationError {
    #[error("skip must be greater than or equal to 0")]
    NegativeSkip,

    #[error("limit must be between 1 and 100")]
    LimitOutOfRange,
}

/// Validated `OFFSET`/`LIMIT` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub skip: i64,
    pub limit: i64,
}

impl Pagination {
    /// Validate raw parameters, applying the defaults (skip 0, limit 20)
    pub fn from_params(skip: Option<i64>, limit: Option<i64>) -> Result<Self, PaginationError> {
        Ok(Self {
            skip: validate_skip(skip)?,
            limit: validate_limit(limit.unwrap_or(DEFAULT_LIMIT))?,
        })
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Pagination whose limit may be absent, meaning "every remaining row"
///
/// Binding `limit: None` renders `LIMIT NULL`, which PostgreSQL treats as no
/// limit at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OptionalPagination {
    pub skip: i64,
    pub limit: Option<i64>,
}

impl OptionalPagination {
    pub fn from_params(skip: Option<i64>, limit: Option<i64>) -> Result<Self, PaginationError> {
        Ok(Self {
            skip: validate_skip(skip)?,
            limit: limit.map(validate_limit).transpose()?,
        })
    }
}

fn validate_skip(skip: Option<i64>) -> Result<i64, PaginationError> {
    match skip {
        Some(skip) if skip < 0 => Err(PaginationError::NegativeSkip),
        Some(skip) => Ok(skip),
        None => Ok(0),
    }
}

fn validate_limit(limit: i64) -> Result<i64, PaginationError> {
    if (1..=MAX_LIMIT).contains(&limit) {
        Ok(limit)
    } else {
        Err(PaginationError::LimitOutOfRange)
    }
}
