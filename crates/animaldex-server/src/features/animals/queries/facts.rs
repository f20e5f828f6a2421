use sqlx::PgPool;

#[derive(Debug, Clone, Copy)]
pub struct GetAnimalFactsQuery {
    pub id: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum GetAnimalFactsError {
    #[error("Animal {0} not found")]
    NotFound(i64),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Fun facts of one animal; an animal without facts yields an empty list
#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: PgPool,
    query: GetAnimalFactsQuery,
) -> Result<Vec<String>, GetAnimalFactsError> {
    let facts: Option<Option<Vec<String>>> =
        sqlx::query_scalar("SELECT fun_facts FROM animals WHERE id = $1")
            .bind(query.id)
            .fetch_optional(&pool)
            .await?;

    match facts {
        Some(facts) => Ok(facts.unwrap_or_default()),
        None => Err(GetAnimalFactsError::NotFound(query.id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::TestAnimal;

    #[sqlx::test(migrations = "../../migrations")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn test_handle_returns_facts_in_order(pool: PgPool) {
        let bee = TestAnimal::new("Honeybee", "Apis mellifera")
            .with_fun_facts(&["Waggle dance", "60,000 bees per colony"])
            .insert(&pool)
            .await
            .unwrap();

        let facts = handle(pool, GetAnimalFactsQuery { id: bee.id }).await.unwrap();
        assert_eq!(facts, vec!["Waggle dance", "60,000 bees per colony"]);
    }

    #[sqlx::test(migrations = "../../migrations")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn test_handle_no_facts_is_empty(pool: PgPool) {
        let polyp = TestAnimal::new("Coral Polyp", "Anthozoa").insert(&pool).await.unwrap();

        let facts = handle(pool, GetAnimalFactsQuery { id: polyp.id }).await.unwrap();
        assert!(facts.is_empty());
    }

    #[sqlx::test(migrations = "../../migrations")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn test_handle_missing_animal(pool: PgPool) {
        let result = handle(pool, GetAnimalFactsQuery { id: 404 }).await;
        assert!(matches!(result, Err(GetAnimalFactsError::NotFound(404))));
    }
}
