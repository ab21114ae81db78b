//! Character persistence against PostgreSQL.

use crate::error::StoreError;
use crate::model::{Character, DbId, Timestamp};
use crate::service::filters::{calculate_metadata, Filters, Metadata};
use crate::sql::{
    character_exists, delete_character, insert_character, select_character_by_id,
    select_character_page, update_character,
};
use sqlx::{FromRow, PgPool};
use std::future::Future;
use std::time::Duration;

/// Predicates for one listing request. An empty `name` and a zero `age` match everything.
#[derive(Debug, Clone)]
pub struct CharacterQuery {
    pub name: String,
    /// Inclusive lower bound on age.
    pub age: i32,
    pub filters: Filters,
}

#[derive(FromRow)]
struct CharacterPageRow {
    total_records: i64,
    #[sqlx(flatten)]
    character: Character,
}

/// CRUD over the `characters` table. Every call is bounded by `timeout`.
#[derive(Clone)]
pub struct CharacterRepo {
    pool: PgPool,
    timeout: Duration,
}

impl CharacterRepo {
    pub fn new(pool: PgPool, timeout: Duration) -> Self {
        CharacterRepo { pool, timeout }
    }

    /// One page of matching characters plus pagination metadata.
    pub async fn list(&self, query: &CharacterQuery) -> Result<(Vec<Character>, Metadata), StoreError> {
        let filters = &query.filters;
        let sql = select_character_page(filters)
            .ok_or_else(|| StoreError::UnsafeSort(filters.sort.clone()))?;
        tracing::debug!(sql = %sql, name = %query.name, age = query.age, "query");
        let rows = self
            .bounded(
                "list characters",
                None,
                sqlx::query_as::<_, CharacterPageRow>(&sql)
                    .bind(&query.name)
                    .bind(query.age)
                    .bind(filters.limit())
                    .bind(filters.offset())
                    .fetch_all(&self.pool),
            )
            .await?;
        let total = rows.first().map(|r| r.total_records).unwrap_or(0);
        let metadata = calculate_metadata(total, filters.page, filters.page_size);
        Ok((rows.into_iter().map(|r| r.character).collect(), metadata))
    }

    pub async fn get(&self, id: DbId) -> Result<Character, StoreError> {
        if id < 1 {
            return Err(StoreError::RecordNotFound);
        }
        let sql = select_character_by_id();
        tracing::debug!(sql = %sql, id, "query");
        self.bounded(
            "get character",
            Some(id),
            sqlx::query_as::<_, Character>(&sql)
                .bind(id)
                .fetch_optional(&self.pool),
        )
        .await?
        .ok_or(StoreError::RecordNotFound)
    }

    /// Inserts `character` and writes the assigned id and timestamps back into it.
    pub async fn insert(&self, character: &mut Character) -> Result<(), StoreError> {
        let sql = insert_character();
        tracing::debug!(sql = %sql, name = %character.name, "query");
        let (id, created_at, updated_at): (DbId, Timestamp, Timestamp) = self
            .bounded(
                "insert character",
                None,
                sqlx::query_as(&sql)
                    .bind(&character.name)
                    .bind(character.age)
                    .bind(&character.gender)
                    .bind(&character.status)
                    .bind(&character.nation)
                    .fetch_one(&self.pool),
            )
            .await?;
        character.id = id;
        character.created_at = created_at;
        character.updated_at = updated_at;
        Ok(())
    }

    /// Overwrites the stored row only if its `updated_at` still equals `expected_version`.
    /// On success the new `updated_at` is written back into `character`.
    pub async fn update(
        &self,
        character: &mut Character,
        expected_version: Timestamp,
    ) -> Result<(), StoreError> {
        let id = character.id;
        if id < 1 {
            return Err(StoreError::RecordNotFound);
        }
        let sql = update_character();
        tracing::debug!(sql = %sql, id, expected_version = %expected_version, "query");
        let updated_at: Option<Timestamp> = self
            .bounded(
                "update character",
                Some(id),
                sqlx::query_scalar(&sql)
                    .bind(&character.name)
                    .bind(character.age)
                    .bind(&character.gender)
                    .bind(&character.status)
                    .bind(&character.nation)
                    .bind(id)
                    .bind(expected_version)
                    .fetch_optional(&self.pool),
            )
            .await?;
        match updated_at {
            Some(ts) => {
                character.updated_at = ts;
                Ok(())
            }
            None => {
                let sql = character_exists();
                let exists: bool = self
                    .bounded(
                        "update character",
                        Some(id),
                        sqlx::query_scalar(&sql).bind(id).fetch_one(&self.pool),
                    )
                    .await?;
                if exists {
                    Err(StoreError::EditConflict)
                } else {
                    Err(StoreError::RecordNotFound)
                }
            }
        }
    }

    pub async fn delete(&self, id: DbId) -> Result<(), StoreError> {
        if id < 1 {
            return Err(StoreError::RecordNotFound);
        }
        let sql = delete_character();
        tracing::debug!(sql = %sql, id, "query");
        let result = self
            .bounded(
                "delete character",
                Some(id),
                sqlx::query(&sql).bind(id).execute(&self.pool),
            )
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::RecordNotFound);
        }
        Ok(())
    }

    async fn bounded<T, F>(
        &self,
        operation: &'static str,
        id: Option<DbId>,
        fut: F,
    ) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(source)) => Err(StoreError::Query {
                operation,
                id,
                source,
            }),
            Err(_) => Err(StoreError::Timeout {
                operation,
                after: self.timeout,
            }),
        }
    }
}
