pub mod create;
pub mod update;

pub use create::{CreateAnimalCommand, CreateAnimalError};
pub use update::{UpdateAnimalCommand, UpdateAnimalError};
