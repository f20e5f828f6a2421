//! Ecosystem interaction API routes
//!
//! - `GET /api/ecosystem-interactions/` - List (`skip`, `limit`, `animal_id`,
//!   `habitat_id`, `interaction_type`, `verified`)
//! - `POST /api/ecosystem-interactions/` - Record an interaction

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use sqlx::PgPool;

use super::{
    commands::{self, CreateInteractionCommand, CreateInteractionError},
    queries::{self, ListInteractionsError, ListInteractionsQuery},
};
use crate::error::{AppError, AppResult};

pub fn ecosystem_interactions_routes() -> Router<PgPool> {
    Router::new().route("/", get(list_interactions).post(create_interaction))
}

#[tracing::instrument(skip(pool, body))]
async fn create_interaction(
    State(pool): State<PgPool>,
    body: Result<Json<CreateInteractionCommand>, JsonRejection>,
) -> AppResult<Response> {
    let Json(command) = body?;
    let interaction = commands::create::handle(pool, command).await?;
    Ok((StatusCode::CREATED, Json(interaction)).into_response())
}

#[tracing::instrument(skip(pool, query))]
async fn list_interactions(
    State(pool): State<PgPool>,
    query: Result<Query<ListInteractionsQuery>, QueryRejection>,
) -> AppResult<Response> {
    let Query(query) = query?;
    let interactions = queries::list::handle(pool, query).await?;
    Ok(Json(interactions).into_response())
}

impl From<CreateInteractionError> for AppError {
    fn from(err: CreateInteractionError) -> Self {
        match err {
            e @ (CreateInteractionError::StrengthOutOfRange
            | CreateInteractionError::MissingAnimal
            | CreateInteractionError::SameAnimal
            | CreateInteractionError::ConstraintViolation) => AppError::Validation(e.to_string()),
            e @ (CreateInteractionError::InvalidReference { .. }
            | CreateInteractionError::ReferenceRemoved) => AppError::InvalidReference(e.to_string()),
            CreateInteractionError::Database(e) => AppError::Database(e),
        }
    }
}

impl From<ListInteractionsError> for AppError {
    fn from(err: ListInteractionsError) -> Self {
        match err {
            ListInteractionsError::Pagination(e) => AppError::Validation(e.to_string()),
            ListInteractionsError::Database(e) => AppError::Database(e),
        }
    }
}
