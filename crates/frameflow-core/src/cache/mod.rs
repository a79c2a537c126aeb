//! Cache de resultados por fingerprint, en capa sobre los `Creator`.

pub mod materialize;
pub mod store;

pub use materialize::{materialize, Materialized};
pub use store::{InMemoryResultCache, ResultCache};
