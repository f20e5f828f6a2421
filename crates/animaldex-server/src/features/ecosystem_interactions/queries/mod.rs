pub mod list;

pub use list::{ListInteractionsError, ListInteractionsQuery};
