//! Feature modules implementing the AnimalDex API
//!
//! Each feature is a vertical slice with its own commands, queries and routes.
//!
//! # Features
//!
//! - **animals**: Catalog listing, search, random pick, facts, create and update
//! - **habitats**: Habitat listing and the animals living in each habitat
//! - **conservation_efforts**: Conservation campaigns and the animals they protect
//! - **ecosystem_interactions**: Predator/prey and other relationships
//! - **users**: Learner accounts and activity (shapes only)
//! - **quizzes**: Quizzes and attempts (shapes only)
//!
//! # Architecture
//!
//! Each feature module follows the structure:
//! - `commands/` - Write operations, each in its own transaction
//! - `queries/` - Read operations
//! - `routes.rs` - HTTP route definitions and error mapping
//! - `types.rs` - Response shapes
//!
//! Every command and query is a plain `handle(pool, input)` function with its
//! own `thiserror` error enum.

pub mod animals;
pub mod conservation_efforts;
pub mod ecosystem_interactions;
pub mod habitats;
pub mod quizzes;
pub mod shared;
pub mod users;

use axum::Router;
use sqlx::PgPool;

/// Creates the API router with all feature routes mounted
///
/// - `/api/animals`
/// - `/api/habitats`
/// - `/api/conservation-efforts`
/// - `/api/ecosystem-interactions`
pub fn router(db: PgPool) -> Router<()> {
    Router::new()
        .nest("/api/animals", animals::animals_routes().with_state(db.clone()))
        .nest("/api/habitats", habitats::habitats_routes().with_state(db.clone()))
        .nest(
            "/api/conservation-efforts",
            conservation_efforts::conservation_efforts_routes().with_state(db.clone()),
        )
        .nest(
            "/api/ecosystem-interactions",
            ecosystem_interactions::ecosystem_interactions_routes().with_state(db),
        )
}
