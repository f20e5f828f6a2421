pub mod animals;
pub mod get;
pub mod list;

pub use animals::{HabitatAnimalsError, HabitatAnimalsQuery};
pub use get::{GetHabitatError, GetHabitatQuery};
pub use list::{ListHabitatsError, ListHabitatsQuery};
