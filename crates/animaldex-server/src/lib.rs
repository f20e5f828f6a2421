//! AnimalDex Server Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! HTTP API serving an educational catalog of animals, habitats,
//! conservation efforts and the ecosystem interactions between animals.
//!
//! # Overview
//!
//! - **API Endpoints**: list, search, filter and create operations under `/api`
//! - **Database**: PostgreSQL through SQLx, schema in the workspace `migrations/`
//! - **Seeding**: idempotent reference fixture for empty databases
//! - **Configuration**: environment-driven, see [`config::Config::load`]
//! - **Middleware**: CORS, request tracing and response compression
//!
//! # Architecture
//!
//! Every feature is a vertical slice split into **commands** (writes, each
//! inside its own transaction) and **queries** (reads). Each operation owns a
//! request type, a response shape, a `thiserror` error enum and a standalone
//! `handle` function; `routes.rs` wires those handlers into axum.
//!
//! # Example
//!
//! ```no_run
//! use animaldex_server::{api, config::Config, db};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     let pool = db::create_pool(&config.database).await?;
//!     db::run_migrations(&pool).await?;
//!     api::serve(config, pool).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod features;
pub mod middleware;
pub mod models;
pub mod seed;

pub use error::{AppError, AppResult};
