use sqlx::{PgExecutor, PgPool};

use crate::features::animals::types::AnimalDetail;
use crate::models::{AnimalRecord, ANIMAL_COLUMNS};

#[derive(Debug, Clone, Copy)]
pub struct GetAnimalQuery {
    pub id: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum GetAnimalError {
    #[error("Animal {0} not found")]
    NotFound(i64),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub(crate) async fn find_by_id<'e, E>(executor: E, id: i64) -> sqlx::Result<Option<AnimalRecord>>
where
    E: PgExecutor<'e>,
{
    let sql = format!("SELECT {ANIMAL_COLUMNS} FROM animals WHERE id = $1");
    sqlx::query_as::<_, AnimalRecord>(&sql)
        .bind(id)
        .fetch_optional(executor)
        .await
}

pub(crate) async fn exists<'e, E>(executor: E, id: i64) -> sqlx::Result<bool>
where
    E: PgExecutor<'e>,
{
    sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM animals WHERE id = $1)")
        .bind(id)
        .fetch_one(executor)
        .await
}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: PgPool, query: GetAnimalQuery) -> Result<AnimalDetail, GetAnimalError> {
    let record = find_by_id(&pool, query.id)
        .await?
        .ok_or(GetAnimalError::NotFound(query.id))?;

    Ok(record.into())
}
