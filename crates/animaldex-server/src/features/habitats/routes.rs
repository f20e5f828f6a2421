//! Habitat API routes
//!
//! - `GET /api/habitats/` - List habitats (`skip`, `limit`, `search`)
//! - `GET /api/habitats/:id` - Full habitat
//! - `GET /api/habitats/:id/animals` - Animals living there

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use sqlx::PgPool;

use super::queries::{
    self, GetHabitatError, GetHabitatQuery, HabitatAnimalsError, HabitatAnimalsQuery,
    ListHabitatsError, ListHabitatsQuery,
};
use crate::error::{AppError, AppResult};

pub fn habitats_routes() -> Router<PgPool> {
    Router::new()
        .route("/", get(list_habitats))
        .route("/:id", get(get_habitat))
        .route("/:id/animals", get(list_habitat_animals))
}

#[tracing::instrument(skip(pool, query))]
async fn list_habitats(
    State(pool): State<PgPool>,
    query: Result<Query<ListHabitatsQuery>, QueryRejection>,
) -> AppResult<Response> {
    let Query(query) = query?;
    let habitats = queries::list::handle(pool, query).await?;
    Ok(Json(habitats).into_response())
}

#[tracing::instrument(skip(pool, id))]
async fn get_habitat(
    State(pool): State<PgPool>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Response> {
    let Path(id) = id?;
    let habitat = queries::get::handle(pool, GetHabitatQuery { id }).await?;
    Ok(Json(habitat).into_response())
}

#[tracing::instrument(skip(pool, id))]
async fn list_habitat_animals(
    State(pool): State<PgPool>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Response> {
    let Path(habitat_id) = id?;
    let animals = queries::animals::handle(pool, HabitatAnimalsQuery { habitat_id }).await?;
    Ok(Json(animals).into_response())
}

impl From<ListHabitatsError> for AppError {
    fn from(err: ListHabitatsError) -> Self {
        match err {
            ListHabitatsError::Pagination(e) => AppError::Validation(e.to_string()),
            ListHabitatsError::Database(e) => AppError::Database(e),
        }
    }
}

impl From<GetHabitatError> for AppError {
    fn from(err: GetHabitatError) -> Self {
        match err {
            e @ GetHabitatError::NotFound(_) => AppError::NotFound(e.to_string()),
            GetHabitatError::Database(e) => AppError::Database(e),
        }
    }
}

impl From<HabitatAnimalsError> for AppError {
    fn from(err: HabitatAnimalsError) -> Self {
        match err {
            e @ HabitatAnimalsError::NotFound(_) => AppError::NotFound(e.to_string()),
            HabitatAnimalsError::Database(e) => AppError::Database(e),
        }
    }
}
