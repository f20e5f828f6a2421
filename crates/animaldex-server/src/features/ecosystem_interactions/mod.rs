pub mod commands;
pub mod queries;
pub mod routes;
pub mod types;

pub use commands::{CreateInteractionCommand, CreateInteractionError};
pub use queries::{ListInteractionsError, ListInteractionsQuery};
pub use routes::ecosystem_interactions_routes;
pub use types::EcosystemInteraction;
