//! List conservation efforts
//!
//! `search` matches the title or the organization name. `active` narrows to
//! running (or finished) campaigns. Without `limit` every match is returned.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::features::conservation_efforts::types::ConservationEffortSummary;
use crate::features::shared::{search_pattern, OptionalPagination, PaginationError};
use crate::models::{ConservationEffortRecord, CONSERVATION_EFFORT_COLUMNS};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListConservationEffortsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

#[derive(Debug, thiserror::Error)]
pub enum ListConservationEffortsError {
    #[error("{0}")]
    Pagination(#[from] PaginationError),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ListConservationEffortsQuery {
    pub fn validate(&self) -> Result<OptionalPagination, ListConservationEffortsError> {
        Ok(OptionalPagination::from_params(self.skip, self.limit)?)
    }
}

#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: PgPool,
    query: ListConservationEffortsQuery,
) -> Result<Vec<ConservationEffortSummary>, ListConservationEffortsError> {
    let page = query.validate()?;
    let pattern = search_pattern(query.search.as_deref());

    let sql = format!(
        r#"
        SELECT {CONSERVATION_EFFORT_COLUMNS}
        FROM conservation_efforts
        WHERE ($1::TEXT IS NULL OR title ILIKE $1 OR organization_name ILIKE $1)
          AND ($2::BOOLEAN IS NULL OR is_active = $2)
        ORDER BY id
        LIMIT $3
        OFFSET $4
        "#
    );

    let records = sqlx::query_as::<_, ConservationEffortRecord>(&sql)
        .bind(pattern)
        .bind(query.active)
        .bind(page.limit)
        .bind(page.skip)
        .fetch_all(&pool)
        .await?;

    Ok(records.into_iter().map(ConservationEffortSummary::from).collect())
}
