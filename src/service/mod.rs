//! Validation, listing filters and the repositories behind the handlers.

mod characters;
mod episodes;
mod filters;
mod validation;
pub use characters::{CharacterQuery, CharacterRepo};
pub use episodes::EpisodeRepo;
pub use filters::*;
pub use validation::{permitted_value, FieldErrors, Validator};
