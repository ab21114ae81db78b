//! SQL text for the character queries: identifiers come from constants or the sort safelist only.

mod builder;
pub use builder::*;
