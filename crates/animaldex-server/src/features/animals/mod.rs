pub mod commands;
pub mod queries;
pub mod routes;
pub mod types;

pub use commands::{CreateAnimalCommand, CreateAnimalError, UpdateAnimalCommand, UpdateAnimalError};
pub use queries::{
    AnimalRelationsError, AnimalRelationsQuery, GetAnimalError, GetAnimalFactsError,
    GetAnimalFactsQuery, GetAnimalQuery, ListAnimalsError, ListAnimalsQuery, RandomAnimalError,
};
pub use routes::animals_routes;
pub use types::{AnimalDetail, AnimalSummary};
