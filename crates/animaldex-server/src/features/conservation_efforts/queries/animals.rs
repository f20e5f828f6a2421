//! Animals a conservation effort protects

use sqlx::PgPool;

use super::get::exists;
use crate::features::animals::types::AnimalSummary;
use crate::models::AnimalRecord;

#[derive(Debug, Clone, Copy)]
pub struct ConservationEffortAnimalsQuery {
    pub conservation_effort_id: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum ConservationEffortAnimalsError {
    #[error("Conservation effort {0} not found")]
    NotFound(i64),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: PgPool,
    query: ConservationEffortAnimalsQuery,
) -> Result<Vec<AnimalSummary>, ConservationEffortAnimalsError> {
    let effort_id = query.conservation_effort_id;
    if !exists(&pool, effort_id).await? {
        return Err(ConservationEffortAnimalsError::NotFound(effort_id));
    }

    let records = sqlx::query_as::<_, AnimalRecord>(
        r#"
        SELECT a.*
        FROM animals a
        JOIN animal_conservation_efforts ace ON ace.animal_id = a.id
        WHERE ace.conservation_effort_id = $1
        ORDER BY a.id
        "#,
    )
    .bind(effort_id)
    .fetch_all(&pool)
    .await?;

    Ok(records.into_iter().map(AnimalSummary::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::{link_animal_effort, TestAnimal, TestConservationEffort};

    #[sqlx::test(migrations = "../../migrations")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn test_handle_lists_protected_animals(pool: PgPool) {
        let reef = TestConservationEffort::new("Coral Reef Restoration Project")
            .insert(&pool)
            .await
            .unwrap();
        let clownfish = TestAnimal::new("Clownfish", "Amphiprioninae").insert(&pool).await.unwrap();
        TestAnimal::new("Gray Wolf", "Canis lupus").insert(&pool).await.unwrap();
        link_animal_effort(&pool, clownfish.id, reef.id).await.unwrap();

        let animals = handle(
            pool,
            ConservationEffortAnimalsQuery {
                conservation_effort_id: reef.id,
            },
        )
        .await
        .unwrap();
        assert_eq!(animals.len(), 1);
        assert_eq!(animals[0].name, "Clownfish");
    }

    #[sqlx::test(migrations = "../../migrations")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn test_handle_missing_effort(pool: PgPool) {
        let result = handle(
            pool,
            ConservationEffortAnimalsQuery {
                conservation_effort_id: 5,
            },
        )
        .await;
        assert!(matches!(result, Err(ConservationEffortAnimalsError::NotFound(5))));
    }
}
