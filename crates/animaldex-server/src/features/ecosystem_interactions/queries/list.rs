//! List ecosystem interactions
//!
//! `animal_id` matches either side of the interaction.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::features::ecosystem_interactions::types::EcosystemInteraction;
use crate::features::shared::{Pagination, PaginationError};
use crate::models::{EcosystemInteractionRecord, InteractionType, ECOSYSTEM_INTERACTION_COLUMNS};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListInteractionsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animal_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub habitat_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interaction_type: Option<InteractionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
}

#[derive(Debug, thiserror::Error)]
pub enum ListInteractionsError {
    #[error("{0}")]
    Pagination(#[from] PaginationError),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ListInteractionsQuery {
    pub fn validate(&self) -> Result<Pagination, ListInteractionsError> {
        Ok(Pagination::from_params(self.skip, self.limit)?)
    }
}

#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: PgPool,
    query: ListInteractionsQuery,
) -> Result<Vec<EcosystemInteraction>, ListInteractionsError> {
    let page = query.validate()?;

    let sql = format!(
        r#"
        SELECT {ECOSYSTEM_INTERACTION_COLUMNS}
        FROM ecosystem_interactions
        WHERE ($1::BIGINT IS NULL OR predator_id = $1 OR prey_id = $1)
          AND ($2::BIGINT IS NULL OR habitat_id = $2)
          AND ($3::TEXT IS NULL OR interaction_type = $3)
          AND ($4::BOOLEAN IS NULL OR is_verified = $4)
        ORDER BY id
        LIMIT $5
        OFFSET $6
        "#
    );

    let records = sqlx::query_as::<_, EcosystemInteractionRecord>(&sql)
        .bind(query.animal_id)
        .bind(query.habitat_id)
        .bind(query.interaction_type)
        .bind(query.verified)
        .bind(page.limit)
        .bind(page.skip)
        .fetch_all(&pool)
        .await?;

    Ok(records.into_iter().map(EcosystemInteraction::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::{TestAnimal, TestHabitat};

    async fn insert_interaction(
        pool: &PgPool,
        predator_id: Option<i64>,
        prey_id: Option<i64>,
        interaction_type: InteractionType,
        habitat_id: i64,
    ) -> i64 {
        sqlx::query_scalar(
            r#"
            INSERT INTO ecosystem_interactions (predator_id, prey_id, interaction_type, habitat_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(predator_id)
        .bind(prey_id)
        .bind(interaction_type)
        .bind(habitat_id)
        .fetch_one(pool)
        .await
        .unwrap()
    }

    #[test]
    fn test_validation_uses_default_limit() {
        assert_eq!(ListInteractionsQuery::default().validate().unwrap().limit, 20);
    }

    #[sqlx::test(migrations = "../../migrations")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn test_handle_filters(pool: PgPool) {
        let reef = TestHabitat::new("Coral Reef").insert(&pool).await.unwrap();
        let forest = TestHabitat::new("Temperate Forest").insert(&pool).await.unwrap();
        let clownfish = TestAnimal::new("Clownfish", "Amphiprioninae").insert(&pool).await.unwrap();
        let coral = TestAnimal::new("Coral Polyp", "Anthozoa").insert(&pool).await.unwrap();
        let wolf = TestAnimal::new("Gray Wolf", "Canis lupus").insert(&pool).await.unwrap();

        insert_interaction(
            &pool,
            Some(clownfish.id),
            Some(coral.id),
            InteractionType::Mutualism,
            reef.id,
        )
        .await;
        insert_interaction(&pool, Some(wolf.id), None, InteractionType::Competition, forest.id).await;

        let for_coral = handle(
            pool.clone(),
            ListInteractionsQuery {
                animal_id: Some(coral.id),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(for_coral.len(), 1);
        assert_eq!(for_coral[0].interaction_type, InteractionType::Mutualism);

        let in_forest = handle(
            pool.clone(),
            ListInteractionsQuery {
                habitat_id: Some(forest.id),
                interaction_type: Some(InteractionType::Competition),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(in_forest.len(), 1);
        assert_eq!(in_forest[0].predator_id, Some(wolf.id));

        let verified = handle(
            pool,
            ListInteractionsQuery {
                verified: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert!(verified.is_empty());
    }
}
