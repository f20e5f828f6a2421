//! AnimalDex Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared infrastructure for the AnimalDex workspace members.
//!
//! # Overview
//!
//! - **Logging**: `tracing` subscriber setup driven by environment variables
//! - **Environment**: typed parsing of environment variables
//! - **Errors**: error types shared by the common utilities
//!
//! # Example
//!
//! ```no_run
//! use animaldex_common::logging::{init_logging, LogConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = LogConfig::from_env()?;
//!     let _guard = init_logging(&config)?;
//!     tracing::info!("AnimalDex started");
//!     Ok(())
//! }
//! ```

pub mod env;
pub mod error;
pub mod logging;

pub use error::{CommonError, Result};
