//! Domain records and request DTOs.

pub mod character;
pub mod episode;

pub use character::{validate_character, Character, CharacterPatch, NewCharacter, MAX_AGE};
pub use episode::Episode;

/// Database identifier type for every table.
pub type DbId = i64;

/// Timestamp type for `created_at` / `updated_at` columns.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
