//! Animals living in a habitat, through `animal_habitats`

use sqlx::PgPool;

use super::get::exists;
use crate::features::animals::types::AnimalSummary;
use crate::models::AnimalRecord;

#[derive(Debug, Clone, Copy)]
pub struct HabitatAnimalsQuery {
    pub habitat_id: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum HabitatAnimalsError {
    #[error("Habitat {0} not found")]
    NotFound(i64),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: PgPool,
    query: HabitatAnimalsQuery,
) -> Result<Vec<AnimalSummary>, HabitatAnimalsError> {
    if !exists(&pool, query.habitat_id).await? {
        return Err(HabitatAnimalsError::NotFound(query.habitat_id));
    }

    let records = sqlx::query_as::<_, AnimalRecord>(
        r#"
        SELECT a.*
        FROM animals a
        JOIN animal_habitats ah ON ah.animal_id = a.id
        WHERE ah.habitat_id = $1
        ORDER BY a.id
        "#,
    )
    .bind(query.habitat_id)
    .fetch_all(&pool)
    .await?;

    Ok(records.into_iter().map(AnimalSummary::from).collect())
}
