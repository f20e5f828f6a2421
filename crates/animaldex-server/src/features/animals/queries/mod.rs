pub mod facts;
pub mod get;
pub mod list;
pub mod random;
pub mod related;

pub use facts::{GetAnimalFactsError, GetAnimalFactsQuery};
pub use get::{GetAnimalError, GetAnimalQuery};
pub use list::{ListAnimalsError, ListAnimalsQuery};
pub use random::RandomAnimalError;
pub use related::{AnimalRelationsError, AnimalRelationsQuery};
