//! Learner accounts, progress counters, conservation actions and discoveries
//!
//! Shapes only; no learner endpoints are mounted.

pub mod types;

pub use types::{
    AnimalDiscovery, ConservationActionDetail, ConservationActionSummary, UserDetail,
    UserProgressDetail, UserProgressSummary, UserSummary,
};
