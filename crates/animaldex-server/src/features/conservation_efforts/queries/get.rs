use sqlx::{PgExecutor, PgPool};

use crate::features::conservation_efforts::types::ConservationEffortDetail;
use crate::models::{ConservationEffortRecord, CONSERVATION_EFFORT_COLUMNS};

#[derive(Debug, Clone, Copy)]
pub struct GetConservationEffortQuery {
    pub id: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum GetConservationEffortError {
    #[error("Conservation effort {0} not found")]
    NotFound(i64),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub(crate) async fn exists<'e, E>(executor: E, id: i64) -> sqlx::Result<bool>
where
    E: PgExecutor<'e>,
{
    sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM conservation_efforts WHERE id = $1)")
        .bind(id)
        .fetch_one(executor)
        .await
}

#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: PgPool,
    query: GetConservationEffortQuery,
) -> Result<ConservationEffortDetail, GetConservationEffortError> {
    let sql = format!("SELECT {CONSERVATION_EFFORT_COLUMNS} FROM conservation_efforts WHERE id = $1");
    let record = sqlx::query_as::<_, ConservationEffortRecord>(&sql)
        .bind(query.id)
        .fetch_optional(&pool)
        .await?
        .ok_or(GetConservationEffortError::NotFound(query.id))?;

    Ok(record.into())
}
