//! Character record, create/update DTOs and business validation.

use crate::model::{DbId, Timestamp};
use crate::service::Validator;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const MAX_AGE: i32 = 10_000;

/// A row from the `characters` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: DbId,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub status: String,
    pub nation: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Create payload. Missing fields fall back to empty values so validation can name them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewCharacter {
    /// Accepted for compatibility with clients that echo records back; never stored.
    pub id: Option<DbId>,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub status: String,
    pub nation: String,
}

impl NewCharacter {
    /// Unsaved record; id and timestamps are assigned on insert.
    pub fn into_character(self) -> Character {
        Character {
            id: 0,
            name: self.name,
            age: self.age,
            gender: self.gender,
            status: self.status,
            nation: self.nation,
            created_at: Timestamp::default(),
            updated_at: Timestamp::default(),
        }
    }
}

/// Partial update. `None` keeps the stored value; `Some("")` overwrites it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterPatch {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub status: Option<String>,
    pub nation: Option<String>,
    /// Version the client last saw. When absent the version just read is used.
    pub updated_at: Option<Timestamp>,
}

impl CharacterPatch {
    pub fn apply(self, character: &mut Character) {
        if let Some(name) = self.name {
            character.name = name;
        }
        if let Some(age) = self.age {
            character.age = age;
        }
        if let Some(gender) = self.gender {
            character.gender = gender;
        }
        if let Some(status) = self.status {
            character.status = status;
        }
        if let Some(nation) = self.nation {
            character.nation = nation;
        }
    }
}

pub fn validate_character(v: &mut Validator, character: &Character) {
    v.check(!character.name.is_empty(), "name", "must be provided");
    v.check(character.age <= MAX_AGE, "age", "must not be more than 10000");
    v.check(!character.gender.is_empty(), "gender", "must be provided");
    v.check(!character.status.is_empty(), "status", "must be provided");
    v.check(!character.nation.is_empty(), "nation", "must be provided");
}
