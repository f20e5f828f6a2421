//! Partial update of an animal
//!
//! Absent fields keep their stored value. Clearing an optional column is not
//! expressible through this command.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use super::create::MAX_NAME_LENGTH;
use crate::features::animals::types::AnimalDetail;
use crate::features::shared::error_helpers::map_unique_violation;
use crate::features::shared::{validate_required_text, TextValidationError};
use crate::models::{AnimalRecord, ConservationStatus, ANIMAL_COLUMNS};

/// Body of `PATCH /api/animals/:id`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAnimalCommand {
    /// Taken from the path, never from the body
    #[serde(skip)]
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scientific_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_names: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conservation_status: Option<ConservationStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fun_facts: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifespan: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateAnimalError {
    #[error("At least one field must be provided")]
    NoFieldsToUpdate,

    #[error("{0}")]
    Validation(#[from] TextValidationError),

    #[error("Animal {0} not found")]
    NotFound(i64),

    #[error("Animal with scientific name '{0}' already exists")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl UpdateAnimalCommand {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.scientific_name.is_none()
            && self.common_names.is_none()
            && self.conservation_status.is_none()
            && self.description.is_none()
            && self.fun_facts.is_none()
            && self.diet.is_none()
            && self.lifespan.is_none()
    }

    pub fn validate(&self) -> Result<(), UpdateAnimalError> {
        if self.is_empty() {
            return Err(UpdateAnimalError::NoFieldsToUpdate);
        }
        if let Some(ref name) = self.name {
            validate_required_text("name", name, MAX_NAME_LENGTH)?;
        }
        if let Some(ref scientific_name) = self.scientific_name {
            validate_required_text("scientific_name", scientific_name, MAX_NAME_LENGTH)?;
        }
        Ok(())
    }
}

#[tracing::instrument(skip(pool, command), fields(animal_id = command.id))]
pub async fn handle(
    pool: PgPool,
    command: UpdateAnimalCommand,
) -> Result<AnimalDetail, UpdateAnimalError> {
    command.validate()?;

    let name = command.name.as_deref().map(str::trim);
    let scientific_name = command.scientific_name.as_deref().map(str::trim);

    let mut tx = pool.begin().await?;

    if let Some(scientific_name) = scientific_name {
        let taken: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM animals WHERE scientific_name = $1 AND id <> $2)",
        )
        .bind(scientific_name)
        .bind(command.id)
        .fetch_one(&mut *tx)
        .await?;
        if taken {
            return Err(UpdateAnimalError::Duplicate(scientific_name.to_string()));
        }
    }

    let sql = format!(
        r#"
        UPDATE animals SET
            name = COALESCE($2, name),
            scientific_name = COALESCE($3, scientific_name),
            common_names = COALESCE($4, common_names),
            conservation_status = COALESCE($5, conservation_status),
            description = COALESCE($6, description),
            fun_facts = COALESCE($7, fun_facts),
            diet = COALESCE($8, diet),
            lifespan = COALESCE($9, lifespan),
            last_updated = NOW()
        WHERE id = $1
        RETURNING {ANIMAL_COLUMNS}
        "#
    );

    let record = sqlx::query_as::<_, AnimalRecord>(&sql)
        .bind(command.id)
        .bind(name)
        .bind(scientific_name)
        .bind(&command.common_names)
        .bind(command.conservation_status)
        .bind(&command.description)
        .bind(&command.fun_facts)
        .bind(&command.diet)
        .bind(&command.lifespan)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            map_unique_violation(
                e,
                UpdateAnimalError::Duplicate(scientific_name.unwrap_or_default().to_string()),
                UpdateAnimalError::Database,
            )
        })?
        .ok_or(UpdateAnimalError::NotFound(command.id))?;

    tx.commit().await?;

    tracing::info!(animal_id = record.id, "Animal updated");

    Ok(record.into())
}
