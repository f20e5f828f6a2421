//! Create animal command
//!
//! The scientific name is the natural key. A pre-check inside the transaction
//! turns the common duplicate case into a clean `Duplicate` error; the unique
//! constraint on `animals.scientific_name` settles concurrent inserts.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::features::animals::types::AnimalDetail;
use crate::features::shared::error_helpers::map_unique_violation;
use crate::features::shared::{validate_required_text, TextValidationError};
use crate::models::{AnimalRecord, ConservationStatus, ANIMAL_COLUMNS};

/// Longest accepted display or scientific name
pub const MAX_NAME_LENGTH: usize = 200;

/// Body of `POST /api/animals/`
///
/// # Examples
///
/// ```rust,ignore
/// let command = CreateAnimalCommand {
///     name: "Arctic Fox".to_string(),
///     scientific_name: "Vulpes lagopus".to_string(),
///     conservation_status: Some(ConservationStatus::LeastConcern),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateAnimalCommand {
    pub name: String,
    pub scientific_name: String,
    #[serde(default)]
    pub common_names: Vec<String>,
    #[serde(default)]
    pub conservation_status: Option<ConservationStatus>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub fun_facts: Vec<String>,
    #[serde(default)]
    pub diet: Option<String>,
    #[serde(default)]
    pub lifespan: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateAnimalError {
    #[error("{0}")]
    Validation(#[from] TextValidationError),

    #[error("Animal with scientific name '{0}' already exists")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl CreateAnimalCommand {
    pub fn validate(&self) -> Result<(), CreateAnimalError> {
        validate_required_text("name", &self.name, MAX_NAME_LENGTH)?;
        validate_required_text("scientific_name", &self.scientific_name, MAX_NAME_LENGTH)?;
        Ok(())
    }
}

#[tracing::instrument(
    skip(pool, command),
    fields(scientific_name = %command.scientific_name)
)]
pub async fn handle(
    pool: PgPool,
    command: CreateAnimalCommand,
) -> Result<AnimalDetail, CreateAnimalError> {
    command.validate()?;

    let name = command.name.trim().to_string();
    let scientific_name = command.scientific_name.trim().to_string();

    let mut tx = pool.begin().await?;

    let taken: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM animals WHERE scientific_name = $1)")
            .bind(&scientific_name)
            .fetch_one(&mut *tx)
            .await?;
    if taken {
        return Err(CreateAnimalError::Duplicate(scientific_name));
    }

    let sql = format!(
        r#"
        INSERT INTO animals (
            name, scientific_name, common_names, conservation_status,
            description, fun_facts, diet, lifespan
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING {ANIMAL_COLUMNS}
        "#
    );

    let record = sqlx::query_as::<_, AnimalRecord>(&sql)
        .bind(&name)
        .bind(&scientific_name)
        .bind(&command.common_names)
        .bind(command.conservation_status)
        .bind(&command.description)
        .bind(&command.fun_facts)
        .bind(&command.diet)
        .bind(&command.lifespan)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            map_unique_violation(
                e,
                CreateAnimalError::Duplicate(scientific_name.clone()),
                CreateAnimalError::Database,
            )
        })?;

    tx.commit().await?;

    tracing::info!(animal_id = record.id, "Animal created");

    Ok(record.into())
}
