//! List habitats
//!
//! Without `limit` every matching habitat is returned.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::features::habitats::types::HabitatSummary;
use crate::features::shared::{search_pattern, OptionalPagination, PaginationError};
use crate::models::{HabitatRecord, HABITAT_COLUMNS};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListHabitatsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    /// Case-insensitive substring of the habitat name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ListHabitatsError {
    #[error("{0}")]
    Pagination(#[from] PaginationError),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ListHabitatsQuery {
    pub fn validate(&self) -> Result<OptionalPagination, ListHabitatsError> {
        Ok(OptionalPagination::from_params(self.skip, self.limit)?)
    }
}

#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: PgPool,
    query: ListHabitatsQuery,
) -> Result<Vec<HabitatSummary>, ListHabitatsError> {
    let page = query.validate()?;
    let pattern = search_pattern(query.search.as_deref());

    let sql = format!(
        r#"
        SELECT {HABITAT_COLUMNS}
        FROM habitats
        WHERE ($1::TEXT IS NULL OR name ILIKE $1)
        ORDER BY id
        LIMIT $2
        OFFSET $3
        "#
    );

    let records = sqlx::query_as::<_, HabitatRecord>(&sql)
        .bind(pattern)
        .bind(page.limit)
        .bind(page.skip)
        .fetch_all(&pool)
        .await?;

    Ok(records.into_iter().map(HabitatSummary::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::TestHabitat;

    #[test]
    fn test_validation_allows_missing_limit() {
        let page = ListHabitatsQuery::default().validate().unwrap();
        assert_eq!(page.limit, None);
        assert_eq!(page.skip, 0);
    }

    #[test]
    fn test_validation_rejects_zero_limit() {
        let query = ListHabitatsQuery {
            limit: Some(0),
            ..Default::default()
        };
        assert!(matches!(query.validate(), Err(ListHabitatsError::Pagination(_))));
    }

    #[sqlx::test(migrations = "../../migrations")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn test_handle_returns_everything_without_limit(pool: PgPool) {
        for name in ["Arctic Tundra", "Coral Reef", "Savanna", "Temperate Forest", "Rainforest"] {
            TestHabitat::new(name).insert(&pool).await.unwrap();
        }

        let all = handle(pool.clone(), ListHabitatsQuery::default()).await.unwrap();
        assert_eq!(all.len(), 5);
        assert_eq!(all[0].name, "Arctic Tundra");

        let windowed = handle(
            pool,
            ListHabitatsQuery {
                skip: Some(1),
                limit: Some(2),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        let names: Vec<_> = windowed.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, ["Coral Reef", "Savanna"]);
    }

    #[sqlx::test(migrations = "../../migrations")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn test_handle_search_on_name(pool: PgPool) {
        TestHabitat::new("Coral Reef").with_climate("Tropical").insert(&pool).await.unwrap();
        TestHabitat::new("Savanna").insert(&pool).await.unwrap();

        let found = handle(
            pool,
            ListHabitatsQuery {
                search: Some("reef".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].climate.as_deref(), Some("Tropical"));
    }
}
