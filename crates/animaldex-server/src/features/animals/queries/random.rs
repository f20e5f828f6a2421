//! Uniformly random animal for the "animal of the day" card

use rand::Rng;
use sqlx::PgPool;

use crate::features::animals::types::AnimalDetail;
use crate::models::{AnimalRecord, ANIMAL_COLUMNS};

#[derive(Debug, thiserror::Error)]
pub enum RandomAnimalError {
    #[error("No animals found")]
    Empty,
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Pick an offset in `0..count`, or `None` for an empty table
fn pick_offset<R: Rng + ?Sized>(rng: &mut R, count: i64) -> Option<i64> {
    (count > 0).then(|| rng.gen_range(0..count))
}

/// Counts the rows then reads the one at a random offset.
///
/// Rows deleted between the two statements can make the second read miss;
/// that surfaces as [`RandomAnimalError::Empty`] rather than a stale row.
#[tracing::instrument(skip(pool))]
pub async fn handle(pool: PgPool) -> Result<AnimalDetail, RandomAnimalError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM animals")
        .fetch_one(&pool)
        .await?;

    let offset = pick_offset(&mut rand::thread_rng(), count).ok_or(RandomAnimalError::Empty)?;

    let sql = format!("SELECT {ANIMAL_COLUMNS} FROM animals ORDER BY id LIMIT 1 OFFSET $1");
    let record = sqlx::query_as::<_, AnimalRecord>(&sql)
        .bind(offset)
        .fetch_optional(&pool)
        .await?
        .ok_or(RandomAnimalError::Empty)?;

    tracing::debug!(animal_id = record.id, offset, "Random animal selected");

    Ok(record.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::TestAnimal;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    #[test]
    fn test_pick_offset_empty_table() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pick_offset(&mut rng, 0), None);
    }

    #[test]
    fn test_pick_offset_covers_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let seen: HashSet<i64> = (0..500).filter_map(|_| pick_offset(&mut rng, 4)).collect();
        assert_eq!(seen, HashSet::from([0, 1, 2, 3]));
    }

    #[sqlx::test(migrations = "../../migrations")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn test_handle_empty_table(pool: PgPool) {
        assert!(matches!(handle(pool).await, Err(RandomAnimalError::Empty)));
    }

    #[sqlx::test(migrations = "../../migrations")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn test_handle_returns_existing_animal(pool: PgPool) {
        let panda = TestAnimal::new("Giant Panda", "Ailuropoda melanoleuca")
            .insert(&pool)
            .await
            .unwrap();

        let detail = handle(pool).await.unwrap();
        assert_eq!(detail.id, panda.id);
    }
}
