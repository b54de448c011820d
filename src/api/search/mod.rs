pub mod query;
pub mod types;

pub use query::search;
pub use types::{SearchParams, SearchResponse};
