//! Animal API routes
//!
//! # Route Structure
//!
//! - `GET /api/animals/` - List animals (`skip`, `limit`, `search`, `conservation_status`)
//! - `POST /api/animals/` - Create an animal
//! - `GET /api/animals/random` - Random animal
//! - `GET /api/animals/:id` - Full animal
//! - `PATCH /api/animals/:id` - Partial update
//! - `GET /api/animals/:id/facts` - Fun facts
//! - `GET /api/animals/:id/habitats` - Habitats the animal lives in
//! - `GET /api/animals/:id/conservation-efforts` - Efforts protecting the animal
//! - `GET /api/animals/:id/interactions` - Interactions as predator or prey

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use sqlx::PgPool;

use super::{
    commands::{self, CreateAnimalCommand, CreateAnimalError, UpdateAnimalCommand, UpdateAnimalError},
    queries::{
        self, AnimalRelationsError, AnimalRelationsQuery, GetAnimalError, GetAnimalFactsError,
        GetAnimalFactsQuery, GetAnimalQuery, ListAnimalsError, ListAnimalsQuery, RandomAnimalError,
    },
};
use crate::error::{AppError, AppResult};

// ============================================================================
// Router Configuration
// ============================================================================

pub fn animals_routes() -> Router<PgPool> {
    Router::new()
        .route("/", get(list_animals).post(create_animal))
        .route("/random", get(random_animal))
        .route("/:id", get(get_animal).patch(update_animal))
        .route("/:id/facts", get(get_animal_facts))
        .route("/:id/habitats", get(list_animal_habitats))
        .route("/:id/conservation-efforts", get(list_animal_conservation_efforts))
        .route("/:id/interactions", get(list_animal_interactions))
}

// ============================================================================
// Command Handlers (Write Operations)
// ============================================================================

/// `201 Created` with the full animal
///
/// A scientific name that is already taken answers `409 Conflict` with code
/// `CONFLICT`, never `400`, so clients can tell it apart from malformed input.
#[tracing::instrument(skip(pool, body))]
async fn create_animal(
    State(pool): State<PgPool>,
    body: Result<Json<CreateAnimalCommand>, JsonRejection>,
) -> AppResult<Response> {
    let Json(command) = body?;
    let animal = commands::create::handle(pool, command).await?;

    tracing::info!(animal_id = animal.id, "Animal created via API");

    Ok((StatusCode::CREATED, Json(animal)).into_response())
}

#[tracing::instrument(skip(pool, id, body))]
async fn update_animal(
    State(pool): State<PgPool>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<UpdateAnimalCommand>, JsonRejection>,
) -> AppResult<Response> {
    let Path(id) = id?;
    let Json(mut command) = body?;
    command.id = id;

    let animal = commands::update::handle(pool, command).await?;

    Ok((StatusCode::OK, Json(animal)).into_response())
}

// ============================================================================
// Query Handlers (Read Operations)
// ============================================================================

#[tracing::instrument(skip(pool, query))]
async fn list_animals(
    State(pool): State<PgPool>,
    query: Result<Query<ListAnimalsQuery>, QueryRejection>,
) -> AppResult<Response> {
    let Query(query) = query?;
    let animals = queries::list::handle(pool, query).await?;
    Ok(Json(animals).into_response())
}

#[tracing::instrument(skip(pool))]
async fn random_animal(State(pool): State<PgPool>) -> AppResult<Response> {
    let animal = queries::random::handle(pool).await?;
    Ok(Json(animal).into_response())
}

#[tracing::instrument(skip(pool, id))]
async fn get_animal(
    State(pool): State<PgPool>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Response> {
    let Path(id) = id?;
    let animal = queries::get::handle(pool, GetAnimalQuery { id }).await?;
    Ok(Json(animal).into_response())
}

#[tracing::instrument(skip(pool, id))]
async fn get_animal_facts(
    State(pool): State<PgPool>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Response> {
    let Path(id) = id?;
    let facts = queries::facts::handle(pool, GetAnimalFactsQuery { id }).await?;
    Ok(Json(facts).into_response())
}

#[tracing::instrument(skip(pool, id))]
async fn list_animal_habitats(
    State(pool): State<PgPool>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Response> {
    let Path(animal_id) = id?;
    let habitats = queries::related::habitats(pool, AnimalRelationsQuery { animal_id }).await?;
    Ok(Json(habitats).into_response())
}

#[tracing::instrument(skip(pool, id))]
async fn list_animal_conservation_efforts(
    State(pool): State<PgPool>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Response> {
    let Path(animal_id) = id?;
    let efforts =
        queries::related::conservation_efforts(pool, AnimalRelationsQuery { animal_id }).await?;
    Ok(Json(efforts).into_response())
}

#[tracing::instrument(skip(pool, id))]
async fn list_animal_interactions(
    State(pool): State<PgPool>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Response> {
    let Path(animal_id) = id?;
    let interactions =
        queries::related::interactions(pool, AnimalRelationsQuery { animal_id }).await?;
    Ok(Json(interactions).into_response())
}

// ============================================================================
// Error Handling
// ============================================================================

impl From<CreateAnimalError> for AppError {
    fn from(err: CreateAnimalError) -> Self {
        match err {
            CreateAnimalError::Validation(e) => AppError::Validation(e.to_string()),
            e @ CreateAnimalError::Duplicate(_) => AppError::Conflict(e.to_string()),
            CreateAnimalError::Database(e) => AppError::Database(e),
        }
    }
}

impl From<UpdateAnimalError> for AppError {
    fn from(err: UpdateAnimalError) -> Self {
        match err {
            e @ UpdateAnimalError::NoFieldsToUpdate => AppError::Validation(e.to_string()),
            UpdateAnimalError::Validation(e) => AppError::Validation(e.to_string()),
            e @ UpdateAnimalError::NotFound(_) => AppError::NotFound(e.to_string()),
            e @ UpdateAnimalError::Duplicate(_) => AppError::Conflict(e.to_string()),
            UpdateAnimalError::Database(e) => AppError::Database(e),
        }
    }
}

impl From<ListAnimalsError> for AppError {
    fn from(err: ListAnimalsError) -> Self {
        match err {
            ListAnimalsError::Pagination(e) => AppError::Validation(e.to_string()),
            ListAnimalsError::Database(e) => AppError::Database(e),
        }
    }
}

impl From<GetAnimalError> for AppError {
    fn from(err: GetAnimalError) -> Self {
        match err {
            e @ GetAnimalError::NotFound(_) => AppError::NotFound(e.to_string()),
            GetAnimalError::Database(e) => AppError::Database(e),
        }
    }
}

impl From<GetAnimalFactsError> for AppError {
    fn from(err: GetAnimalFactsError) -> Self {
        match err {
            e @ GetAnimalFactsError::NotFound(_) => AppError::NotFound(e.to_string()),
            GetAnimalFactsError::Database(e) => AppError::Database(e),
        }
    }
}

impl From<RandomAnimalError> for AppError {
    fn from(err: RandomAnimalError) -> Self {
        match err {
            e @ RandomAnimalError::Empty => AppError::NotFound(e.to_string()),
            RandomAnimalError::Database(e) => AppError::Database(e),
        }
    }
}

impl From<AnimalRelationsError> for AppError {
    fn from(err: AnimalRelationsError) -> Self {
        match err {
            e @ AnimalRelationsError::NotFound(_) => AppError::NotFound(e.to_string()),
            AnimalRelationsError::Database(e) => AppError::Database(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::PaginationError;

    #[test]
    fn test_duplicate_maps_to_conflict() {
        let err = AppError::from(CreateAnimalError::Duplicate("Vulpes lagopus".to_string()));
        assert_eq!(err.status(), StatusCode::CONFLICT);
        assert!(err.to_string().contains("Vulpes lagopus"));
    }

    #[test]
    fn test_pagination_maps_to_validation() {
        let err = AppError::from(ListAnimalsError::Pagination(PaginationError::LimitOutOfRange));
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_empty_table_maps_to_not_found() {
        let err = AppError::from(RandomAnimalError::Empty);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }
}
