//! List animals with search, status filter and offset pagination

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::features::animals::types::AnimalSummary;
use crate::features::shared::{search_pattern, Pagination, PaginationError};
use crate::models::{AnimalRecord, ConservationStatus, ANIMAL_COLUMNS};

/// Query string of `GET /api/animals/`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListAnimalsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    /// Case-insensitive substring of the display or scientific name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conservation_status: Option<ConservationStatus>,
}

#[derive(Debug, thiserror::Error)]
pub enum ListAnimalsError {
    #[error("{0}")]
    Pagination(#[from] PaginationError),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ListAnimalsQuery {
    pub fn validate(&self) -> Result<Pagination, ListAnimalsError> {
        Ok(Pagination::from_params(self.skip, self.limit)?)
    }
}

#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: PgPool,
    query: ListAnimalsQuery,
) -> Result<Vec<AnimalSummary>, ListAnimalsError> {
    let page = query.validate()?;
    let pattern = search_pattern(query.search.as_deref());

    let sql = format!(
        r#"
        SELECT {ANIMAL_COLUMNS}
        FROM animals
        WHERE ($1::TEXT IS NULL OR name ILIKE $1 OR scientific_name ILIKE $1)
          AND ($2::TEXT IS NULL OR conservation_status = $2)
        ORDER BY id
        LIMIT $3
        OFFSET $4
        "#
    );

    let records = sqlx::query_as::<_, AnimalRecord>(&sql)
        .bind(pattern)
        .bind(query.conservation_status)
        .bind(page.limit)
        .bind(page.skip)
        .fetch_all(&pool)
        .await?;

    tracing::debug!(count = records.len(), "Animals listed");

    Ok(records.into_iter().map(AnimalSummary::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::TestAnimal;

    #[test]
    fn test_validation_defaults() {
        let page = ListAnimalsQuery::default().validate().unwrap();
        assert_eq!(page.skip, 0);
        assert_eq!(page.limit, 20);
    }

    #[test]
    fn test_validation_rejects_limit_above_max() {
        let query = ListAnimalsQuery {
            limit: Some(101),
            ..Default::default()
        };
        assert!(matches!(
            query.validate(),
            Err(ListAnimalsError::Pagination(PaginationError::LimitOutOfRange))
        ));
    }

    #[test]
    fn test_validation_rejects_negative_skip() {
        let query = ListAnimalsQuery {
            skip: Some(-5),
            ..Default::default()
        };
        assert!(matches!(
            query.validate(),
            Err(ListAnimalsError::Pagination(PaginationError::NegativeSkip))
        ));
    }

    #[sqlx::test(migrations = "../../migrations")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn test_handle_search_matches_either_name(pool: PgPool) {
        TestAnimal::new("Arctic Fox", "Vulpes lagopus").insert(&pool).await.unwrap();
        TestAnimal::new("Gray Wolf", "Canis lupus").insert(&pool).await.unwrap();
        TestAnimal::new("Red Fox", "Vulpes vulpes").insert(&pool).await.unwrap();

        let by_name = handle(
            pool.clone(),
            ListAnimalsQuery {
                search: Some("FOX".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(by_name.len(), 2);

        let by_scientific = handle(
            pool.clone(),
            ListAnimalsQuery {
                search: Some("lupus".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(by_scientific.len(), 1);
        assert_eq!(by_scientific[0].name, "Gray Wolf");
    }

    #[sqlx::test(migrations = "../../migrations")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn test_handle_search_treats_wildcards_literally(pool: PgPool) {
        TestAnimal::new("Arctic Fox", "Vulpes lagopus").insert(&pool).await.unwrap();

        let results = handle(
            pool,
            ListAnimalsQuery {
                search: Some("%".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert!(results.is_empty());
    }

    #[sqlx::test(migrations = "../../migrations")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn test_handle_pagination_window_is_stable(pool: PgPool) {
        for i in 0..7 {
            TestAnimal::new(&format!("Animal {i}"), &format!("Species {i}"))
                .insert(&pool)
                .await
                .unwrap();
        }

        let first = handle(
            pool.clone(),
            ListAnimalsQuery {
                skip: Some(0),
                limit: Some(3),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        let second = handle(
            pool.clone(),
            ListAnimalsQuery {
                skip: Some(3),
                limit: Some(3),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        let tail = handle(
            pool,
            ListAnimalsQuery {
                skip: Some(6),
                limit: Some(3),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(first.len(), 3);
        assert_eq!(second.len(), 3);
        assert_eq!(tail.len(), 1);
        assert!(first.last().unwrap().id < second[0].id);
    }

    #[sqlx::test(migrations = "../../migrations")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn test_handle_filters_combine(pool: PgPool) {
        TestAnimal::new("Sea Turtle", "Chelonioidea")
            .with_status(ConservationStatus::Endangered)
            .insert(&pool)
            .await
            .unwrap();
        TestAnimal::new("Turtle Dove", "Streptopelia turtur")
            .with_status(ConservationStatus::Vulnerable)
            .insert(&pool)
            .await
            .unwrap();

        let results = handle(
            pool,
            ListAnimalsQuery {
                search: Some("turtle".to_string()),
                conservation_status: Some(ConservationStatus::Endangered),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].scientific_name, "Chelonioidea");
    }
}
