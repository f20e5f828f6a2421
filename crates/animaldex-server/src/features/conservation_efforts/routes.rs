//! Conservation effort API routes
//!
//! - `GET /api/conservation-efforts/` - List (`skip`, `limit`, `search`, `active`)
//! - `GET /api/conservation-efforts/:id` - Full effort
//! - `GET /api/conservation-efforts/:id/animals` - Animals it protects

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
    self, ConservationEffortAnimalsError, ConservationEffortAnimalsQuery,
    GetConservationEffortError, GetConservationEffortQuery, ListConservationEffortsError,
    ListConservationEffortsQuery,
};
use crate::error::{AppError, AppResult};

pub fn conservation_efforts_routes() -> Router<PgPool> {
    Router::new()
        .route("/", get(list_conservation_efforts))
        .route("/:id", get(get_conservation_effort))
        .route("/:id/animals", get(list_conservation_effort_animals))
}

#[tracing::instrument(skip(pool, query))]
async fn list_conservation_efforts(
    State(pool): State<PgPool>,
    query: Result<Query<ListConservationEffortsQuery>, QueryRejection>,
) -> AppResult<Response> {
    let Query(query) = query?;
    let efforts = queries::list::handle(pool, query).await?;
    Ok(Json(efforts).into_response())
}

#[tracing::instrument(skip(pool, id))]
async fn get_conservation_effort(
    State(pool): State<PgPool>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Response> {
    let Path(id) = id?;
    let effort = queries::get::handle(pool, GetConservationEffortQuery { id }).await?;
    Ok(Json(effort).into_response())
}

#[tracing::instrument(skip(pool, id))]
async fn list_conservation_effort_animals(
    State(pool): State<PgPool>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Response> {
    let Path(conservation_effort_id) = id?;
    let animals = queries::animals::handle(
        pool,
        ConservationEffortAnimalsQuery {
            conservation_effort_id,
        },
    )
    .await?;
    Ok(Json(animals).into_response())
}

impl From<ListConservationEffortsError> for AppError {
    fn from(err: ListConservationEffortsError) -> Self {
        match err {
            ListConservationEffortsError::Pagination(e) => AppError::Validation(e.to_string()),
            ListConservationEffortsError::Database(e) => AppError::Database(e),
        }
    }
}

impl From<GetConservationEffortError> for AppError {
    fn from(err: GetConservationEffortError) -> Self {
        match err {
            e @ GetConservationEffortError::NotFound(_) => AppError::NotFound(e.to_string()),
            GetConservationEffortError::Database(e) => AppError::Database(e),
        }
    }
}

impl From<ConservationEffortAnimalsError> for AppError {
    fn from(err: ConservationEffortAnimalsError) -> Self {
        match err {
            e @ ConservationEffortAnimalsError::NotFound(_) => AppError::NotFound(e.to_string()),
            ConservationEffortAnimalsError::Database(e) => AppError::Database(e),
        }
    }
}
