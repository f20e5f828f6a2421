//! Shared utilities and types for feature modules
//!
//! # Contents
//!
//! - **pagination**: `skip`/`limit` validation
//! - **validation**: required text, LIKE escaping, interaction strength
//! - **error_helpers**: Database constraint violation handling
//! - **test_helpers**: Test fixtures and utilities (test-only)

pub mod error_helpers;
pub mod pagination;
pub mod validation;

#[cfg(test)]
pub mod test_helpers;

// Re-export commonly used types
pub use pagination::{OptionalPagination, Pagination, PaginationError};
pub use validation::{search_pattern, validate_required_text, TextValidationError};
