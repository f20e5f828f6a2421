pub mod create;

pub use create::{CreateInteractionCommand, CreateInteractionError};
