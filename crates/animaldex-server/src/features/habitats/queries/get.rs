use sqlx::{PgExecutor, PgPool};

use crate::features::habitats::types::HabitatDetail;
use crate::models::{HabitatRecord, HABITAT_COLUMNS};

#[derive(Debug, Clone, Copy)]
pub struct GetHabitatQuery {
    pub id: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum GetHabitatError {
    #[error("Habitat {0} not found")]
    NotFound(i64),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub(crate) async fn exists<'e, E>(executor: E, id: i64) -> sqlx::Result<bool>
where
    E: PgExecutor<'e>,
{
    sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM habitats WHERE id = $1)")
        .bind(id)
        .fetch_one(executor)
        .await
}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: PgPool, query: GetHabitatQuery) -> Result<HabitatDetail, GetHabitatError> {
    let sql = format!("SELECT {HABITAT_COLUMNS} FROM habitats WHERE id = $1");
    let record = sqlx::query_as::<_, HabitatRecord>(&sql)
        .bind(query.id)
        .fetch_optional(&pool)
        .await?
        .ok_or(GetHabitatError::NotFound(query.id))?;

    Ok(record.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::TestHabitat;

    #[sqlx::test(migrations = "../../migrations")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn test_handle_returns_full_habitat(pool: PgPool) {
        let reef = TestHabitat::new("Coral Reef").with_climate("Tropical").insert(&pool).await.unwrap();

        let detail = handle(pool, GetHabitatQuery { id: reef.id }).await.unwrap();
        assert_eq!(detail.name, "Coral Reef");
        assert!(detail.geography.is_none());
        assert!(detail.key_characteristics.is_empty());
    }

    #[sqlx::test(migrations = "../../migrations")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn test_handle_missing_habitat(pool: PgPool) {
        let result = handle(pool, GetHabitatQuery { id: 3 }).await;
        assert!(matches!(result, Err(GetHabitatError::NotFound(3))));
    }
}
