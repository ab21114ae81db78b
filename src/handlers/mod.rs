//! HTTP handlers for characters and the episode placeholder.

pub mod characters;
pub mod episodes;
