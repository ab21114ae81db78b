//! Builds the parameterized statements used by the character repository.

use crate::service::Filters;

pub const CHARACTERS_TABLE: &str = "characters";

/// Column list shared by every statement that returns a full row.
pub const CHARACTER_COLUMNS: &str =
    "id, name, age, gender, status, nation, created_at, updated_at";

/// Paged listing with a window count over the filtered set.
///
/// Binds: `$1` name (empty matches all), `$2` minimum age (0 matches all),
/// `$3` limit, `$4` offset. Returns `None` when the sort key is not in the
/// safelist, so no unchecked text is ever interpolated.
pub fn select_character_page(filters: &Filters) -> Option<String> {
    let column = filters.sort_column()?;
    let direction = filters.sort_direction().as_sql();
    Some(format!(
        "SELECT count(*) OVER() AS total_records, {CHARACTER_COLUMNS} \
         FROM {CHARACTERS_TABLE} \
         WHERE ($1 = '' OR LOWER(name) = LOWER($1)) \
         AND ($2 = 0 OR age >= $2) \
         ORDER BY {column} {direction}, id ASC \
         LIMIT $3 OFFSET $4"
    ))
}

pub fn select_character_by_id() -> String {
    format!("SELECT {CHARACTER_COLUMNS} FROM {CHARACTERS_TABLE} WHERE id = $1")
}

pub fn insert_character() -> String {
    format!(
        "INSERT INTO {CHARACTERS_TABLE} (name, age, gender, status, nation) \
         VALUES ($1, $2, $3, $4, $5) \
         RETURNING id, created_at, updated_at"
    )
}

/// Guarded by `updated_at = $7`. The new version is at least one microsecond
/// past the old one so it moves forward even inside a single clock tick.
pub fn update_character() -> String {
    format!(
        "UPDATE {CHARACTERS_TABLE} \
         SET name = $1, age = $2, gender = $3, status = $4, nation = $5, \
             updated_at = GREATEST(NOW(), updated_at + INTERVAL '1 microsecond') \
         WHERE id = $6 AND updated_at = $7 \
         RETURNING updated_at"
    )
}

pub fn character_exists() -> String {
    format!("SELECT EXISTS(SELECT 1 FROM {CHARACTERS_TABLE} WHERE id = $1)")
}

pub fn delete_character() -> String {
    format!("DELETE FROM {CHARACTERS_TABLE} WHERE id = $1")
}
