//! Rows linked to one animal through join tables or interactions
//!
//! Each query fails with `NotFound` when the animal itself is missing, so an
//! empty list always means "exists but has no links".

use sqlx::PgPool;

use super::get::exists;
use crate::features::conservation_efforts::types::ConservationEffortSummary;
use crate::features::ecosystem_interactions::types::EcosystemInteraction;
use crate::features::habitats::types::HabitatSummary;
use crate::models::{ConservationEffortRecord, EcosystemInteractionRecord, HabitatRecord};

#[derive(Debug, Clone, Copy)]
pub struct AnimalRelationsQuery {
    pub animal_id: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum AnimalRelationsError {
    #[error("Animal {0} not found")]
    NotFound(i64),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

async fn ensure_animal(pool: &PgPool, animal_id: i64) -> Result<(), AnimalRelationsError> {
    if exists(pool, animal_id).await? {
        Ok(())
    } else {
        Err(AnimalRelationsError::NotFound(animal_id))
    }
}

#[tracing::instrument(skip(pool))]
pub async fn habitats(
    pool: PgPool,
    query: AnimalRelationsQuery,
) -> Result<Vec<HabitatSummary>, AnimalRelationsError> {
    ensure_animal(&pool, query.animal_id).await?;

    let records = sqlx::query_as::<_, HabitatRecord>(
        r#"
        SELECT h.*
        FROM habitats h
        JOIN animal_habitats ah ON ah.habitat_id = h.id
        WHERE ah.animal_id = $1
        ORDER BY h.id
        "#,
    )
    .bind(query.animal_id)
    .fetch_all(&pool)
    .await?;

    Ok(records.into_iter().map(HabitatSummary::from).collect())
}

#[tracing::instrument(skip(pool))]
pub async fn conservation_efforts(
    pool: PgPool,
    query: AnimalRelationsQuery,
) -> Result<Vec<ConservationEffortSummary>, AnimalRelationsError> {
    ensure_animal(&pool, query.animal_id).await?;

    let records = sqlx::query_as::<_, ConservationEffortRecord>(
        r#"
        SELECT ce.*
        FROM conservation_efforts ce
        JOIN animal_conservation_efforts ace ON ace.conservation_effort_id = ce.id
        WHERE ace.animal_id = $1
        ORDER BY ce.id
        "#,
    )
    .bind(query.animal_id)
    .fetch_all(&pool)
    .await?;

    Ok(records.into_iter().map(ConservationEffortSummary::from).collect())
}

/// Interactions where the animal is either the predator or the prey
#[tracing::instrument(skip(pool))]
pub async fn interactions(
    pool: PgPool,
    query: AnimalRelationsQuery,
) -> Result<Vec<EcosystemInteraction>, AnimalRelationsError> {
    ensure_animal(&pool, query.animal_id).await?;

    let records = sqlx::query_as::<_, EcosystemInteractionRecord>(
        r#"
        SELECT *
        FROM ecosystem_interactions
        WHERE predator_id = $1 OR prey_id = $1
        ORDER BY id
        "#,
    )
    .bind(query.animal_id)
    .fetch_all(&pool)
    .await?;

    Ok(records.into_iter().map(EcosystemInteraction::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::{
        link_animal_effort, link_animal_habitat, TestAnimal, TestConservationEffort, TestHabitat,
    };

    #[sqlx::test(migrations = "../../migrations")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn test_habitats_follow_join_table(pool: PgPool) {
        let bear = TestAnimal::new("Polar Bear", "Ursus maritimus").insert(&pool).await.unwrap();
        let tundra = TestHabitat::new("Arctic Tundra").insert(&pool).await.unwrap();
        TestHabitat::new("Savanna").insert(&pool).await.unwrap();
        link_animal_habitat(&pool, bear.id, tundra.id).await.unwrap();

        let found = habitats(pool, AnimalRelationsQuery { animal_id: bear.id }).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Arctic Tundra");
    }

    #[sqlx::test(migrations = "../../migrations")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn test_conservation_efforts_follow_join_table(pool: PgPool) {
        let wolf = TestAnimal::new("Gray Wolf", "Canis lupus").insert(&pool).await.unwrap();
        let effort = TestConservationEffort::new("Yellowstone Wolf Reintroduction")
            .insert(&pool)
            .await
            .unwrap();
        link_animal_effort(&pool, wolf.id, effort.id).await.unwrap();

        let found = conservation_efforts(pool, AnimalRelationsQuery { animal_id: wolf.id })
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, effort.id);
    }

    #[sqlx::test(migrations = "../../migrations")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn test_missing_animal_is_not_found(pool: PgPool) {
        let result = interactions(pool, AnimalRelationsQuery { animal_id: 12345 }).await;
        assert!(matches!(result, Err(AnimalRelationsError::NotFound(12345))));
    }
}
