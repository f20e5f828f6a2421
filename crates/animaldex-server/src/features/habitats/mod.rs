pub mod queries;
pub mod routes;
pub mod types;

pub use queries::{
    GetHabitatError, GetHabitatQuery, HabitatAnimalsError, HabitatAnimalsQuery, ListHabitatsError,
    ListHabitatsQuery,
};
pub use routes::habitats_routes;
pub use types::{HabitatDetail, HabitatSummary};
