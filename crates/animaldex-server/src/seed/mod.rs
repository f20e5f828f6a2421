//! Idempotent reference data seeding
//!
//! [`seed_database`] fills an empty catalog with the rows in [`fixtures`].
//! Any existing animal means the database has been seeded (or curated by
//! hand) and nothing is written.

pub mod fixtures;

use std::collections::HashMap;

use sqlx::{PgConnection, PgPool};
use thiserror::Error;

use fixtures::{ANIMALS, ANIMAL_CONSERVATION_EFFORTS, ANIMAL_HABITATS, CONSERVATION_EFFORTS, HABITATS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded {
        habitats: usize,
        animals: usize,
        conservation_efforts: usize,
    },
    Skipped { existing_animals: i64 },
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Fixture link references unknown row '{0}'")]
    UnknownFixture(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Advisory lock held for the whole seeding transaction
const SEED_LOCK_KEY: i64 = 0x616e_696d_616c;

#[tracing::instrument(skip(pool))]
pub async fn seed_database(pool: &PgPool) -> Result<SeedOutcome, SeedError> {
    let mut tx = pool.begin().await?;

    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(SEED_LOCK_KEY)
        .execute(&mut *tx)
        .await?;

    let existing_animals: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM animals")
        .fetch_one(&mut *tx)
        .await?;
    if existing_animals > 0 {
        tracing::info!(existing_animals, "Database already has animals, skipping seed");
        return Ok(SeedOutcome::Skipped { existing_animals });
    }

    let habitat_ids = insert_habitats(&mut *tx).await?;
    let animal_ids = insert_animals(&mut *tx).await?;
    let effort_ids = insert_conservation_efforts(&mut *tx).await?;

    for &(animal, habitat) in ANIMAL_HABITATS {
        sqlx::query("INSERT INTO animal_habitats (animal_id, habitat_id) VALUES ($1, $2)")
            .bind(lookup(&animal_ids, animal)?)
            .bind(lookup(&habitat_ids, habitat)?)
            .execute(&mut *tx)
            .await?;
    }

    for &(animal, effort) in ANIMAL_CONSERVATION_EFFORTS {
        sqlx::query(
            "INSERT INTO animal_conservation_efforts (animal_id, conservation_effort_id) VALUES ($1, $2)",
        )
        .bind(lookup(&animal_ids, animal)?)
        .bind(lookup(&effort_ids, effort)?)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    let outcome = SeedOutcome::Seeded {
        habitats: habitat_ids.len(),
        animals: animal_ids.len(),
        conservation_efforts: effort_ids.len(),
    };
    tracing::info!(?outcome, "Database seeding completed");

    Ok(outcome)
}

fn lookup(ids: &HashMap<&'static str, i64>, key: &'static str) -> Result<i64, SeedError> {
    ids.get(key).copied().ok_or(SeedError::UnknownFixture(key))
}

async fn insert_habitats(conn: &mut PgConnection) -> Result<HashMap<&'static str, i64>, SeedError> {
    let mut ids = HashMap::with_capacity(HABITATS.len());
    for habitat in HABITATS {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO habitats (name, description, climate, geography, key_characteristics)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(habitat.name)
        .bind(habitat.description)
        .bind(habitat.climate)
        .bind(habitat.geography)
        .bind(habitat.key_characteristics)
        .fetch_one(&mut *conn)
        .await?;
        ids.insert(habitat.name, id);
    }
    tracing::debug!(count = ids.len(), "Seeded habitats");
    Ok(ids)
}

async fn insert_animals(conn: &mut PgConnection) -> Result<HashMap<&'static str, i64>, SeedError> {
    let mut ids = HashMap::with_capacity(ANIMALS.len());
    for animal in ANIMALS {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO animals (
                name, scientific_name, common_names, conservation_status,
                description, fun_facts, diet, lifespan, image_urls
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id
            "#,
        )
        .bind(animal.name)
        .bind(animal.scientific_name)
        .bind(animal.common_names)
        .bind(animal.conservation_status)
        .bind(animal.description)
        .bind(animal.fun_facts)
        .bind(animal.diet)
        .bind(animal.lifespan)
        .bind(animal.image_urls)
        .fetch_one(&mut *conn)
        .await?;
        ids.insert(animal.scientific_name, id);
    }
    tracing::debug!(count = ids.len(), "Seeded animals");
    Ok(ids)
}

async fn insert_conservation_efforts(
    conn: &mut PgConnection,
) -> Result<HashMap<&'static str, i64>, SeedError> {
    let mut ids = HashMap::with_capacity(CONSERVATION_EFFORTS.len());
    for effort in CONSERVATION_EFFORTS {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO conservation_efforts (
                title, description, organization_name, website_url, location,
                conservation_problem, current_status, petition_url, is_active
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id
            "#,
        )
        .bind(effort.title)
        .bind(effort.description)
        .bind(effort.organization_name)
        .bind(effort.website_url)
        .bind(effort.location)
        .bind(effort.conservation_problem)
        .bind(effort.current_status)
        .bind(effort.petition_url)
        .bind(effort.is_active)
        .fetch_one(&mut *conn)
        .await?;
        ids.insert(effort.title, id);
    }
    tracing::debug!(count = ids.len(), "Seeded conservation efforts");
    Ok(ids)
}
