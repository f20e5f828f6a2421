pub mod queries;
pub mod routes;
pub mod types;

pub use queries::{
    ConservationEffortAnimalsError, ConservationEffortAnimalsQuery, GetConservationEffortError,
    GetConservationEffortQuery, ListConservationEffortsError, ListConservationEffortsQuery,
};
pub use routes::conservation_efforts_routes;
pub use types::{ConservationEffortDetail, ConservationEffortSummary};
