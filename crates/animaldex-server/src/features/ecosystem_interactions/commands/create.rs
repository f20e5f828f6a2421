//! Record an ecosystem interaction between animals in a habitat
//!
//! Every referenced row is looked up inside the transaction so the client
//! learns which reference is wrong. The foreign keys still settle races with
//! concurrent deletes.

use serde::{Deserialize, Serialize};
use sqlx::{PgConnection, PgPool};

use crate::features::animals::queries::get::exists as animal_exists;
use crate::features::ecosystem_interactions::types::EcosystemInteraction;
use crate::features::habitats::queries::get::exists as habitat_exists;
use crate::features::shared::error_helpers::{check_constraint_violation, ConstraintViolation};
use crate::features::shared::validation::{is_valid_strength, MIN_STRENGTH};
use crate::models::{EcosystemInteractionRecord, InteractionType, ECOSYSTEM_INTERACTION_COLUMNS};

fn default_strength() -> i32 {
    MIN_STRENGTH
}

/// Body of `POST /api/ecosystem-interactions/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInteractionCommand {
    #[serde(default)]
    pub predator_id: Option<i64>,
    #[serde(default)]
    pub prey_id: Option<i64>,
    pub interaction_type: InteractionType,
    pub habitat_id: i64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_strength")]
    pub strength: i32,
    #[serde(default)]
    pub created_by_id: Option<i64>,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateInteractionError {
    #[error("strength must be between 1 and 5")]
    StrengthOutOfRange,

    #[error("At least one of predator_id or prey_id is required")]
    MissingAnimal,

    #[error("predator_id and prey_id must refer to different animals")]
    SameAnimal,

    #[error("{field} {id} does not exist")]
    InvalidReference { field: &'static str, id: i64 },

    #[error("Interaction references a row that no longer exists")]
    ReferenceRemoved,

    #[error("Interaction violates a data constraint")]
    ConstraintViolation,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl CreateInteractionCommand {
    pub fn validate(&self) -> Result<(), CreateInteractionError> {
        if !is_valid_strength(self.strength) {
            return Err(CreateInteractionError::StrengthOutOfRange);
        }
        match (self.predator_id, self.prey_id) {
            (None, None) => Err(CreateInteractionError::MissingAnimal),
            (Some(predator), Some(prey)) if predator == prey => Err(CreateInteractionError::SameAnimal),
            _ => Ok(()),
        }
    }
}

async fn user_exists(conn: &mut PgConnection, id: i64) -> sqlx::Result<bool> {
    sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
        .bind(id)
        .fetch_one(conn)
        .await
}

async fn check_references(
    conn: &mut PgConnection,
    command: &CreateInteractionCommand,
) -> Result<(), CreateInteractionError> {
    for (field, id) in [("predator_id", command.predator_id), ("prey_id", command.prey_id)] {
        if let Some(id) = id {
            if !animal_exists(&mut *conn, id).await? {
                return Err(CreateInteractionError::InvalidReference { field, id });
            }
        }
    }

    if !habitat_exists(&mut *conn, command.habitat_id).await? {
        return Err(CreateInteractionError::InvalidReference {
            field: "habitat_id",
            id: command.habitat_id,
        });
    }

    if let Some(id) = command.created_by_id {
        if !user_exists(&mut *conn, id).await? {
            return Err(CreateInteractionError::InvalidReference {
                field: "created_by_id",
                id,
            });
        }
    }

    Ok(())
}

#[tracing::instrument(skip(pool, command), fields(habitat_id = command.habitat_id))]
pub async fn handle(
    pool: PgPool,
    command: CreateInteractionCommand,
) -> Result<EcosystemInteraction, CreateInteractionError> {
    command.validate()?;

    let mut tx = pool.begin().await?;

    check_references(&mut *tx, &command).await?;

    let sql = format!(
        r#"
        INSERT INTO ecosystem_interactions (
            predator_id, prey_id, interaction_type, habitat_id,
            description, strength, created_by_id, is_verified
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, FALSE)
        RETURNING {ECOSYSTEM_INTERACTION_COLUMNS}
        "#
    );

    let record = sqlx::query_as::<_, EcosystemInteractionRecord>(&sql)
        .bind(command.predator_id)
        .bind(command.prey_id)
        .bind(command.interaction_type)
        .bind(command.habitat_id)
        .bind(&command.description)
        .bind(command.strength)
        .bind(command.created_by_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match check_constraint_violation(e) {
            ConstraintViolation::ForeignKeyViolation => CreateInteractionError::ReferenceRemoved,
            ConstraintViolation::CheckViolation | ConstraintViolation::UniqueViolation => {
                CreateInteractionError::ConstraintViolation
            }
            ConstraintViolation::Other(e) => CreateInteractionError::Database(e),
        })?;

    tx.commit().await?;

    tracing::info!(
        interaction_id = record.id,
        interaction_type = %record.interaction_type,
        "Ecosystem interaction created"
    );

    Ok(record.into())
}
