//! Request extractors for path ids and query-string values.

pub mod id;
pub mod query;

pub use id::RecordId;
pub use query::QueryValues;
