pub mod animals;
pub mod get;
pub mod list;

pub use animals::{ConservationEffortAnimalsError, ConservationEffortAnimalsQuery};
pub use get::{GetConservationEffortError, GetConservationEffortQuery};
pub use list::{ListConservationEffortsError, ListConservationEffortsQuery};
