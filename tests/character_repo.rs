//! Repository tests against a real database.
//!
//! `#[sqlx::test]` creates a fresh database per test from `DATABASE_URL`
//! and applies `migrations/` before the test body runs.

mod common;

use atla::service::{CHARACTER_SORT_SAFELIST, Filters};
use atla::{CharacterQuery, StoreError};
use common::{new_character, repo};
use sqlx::PgPool;
use std::collections::HashSet;

fn query(name: &str, age: i32, page: i64, page_size: i64, sort: &str) -> CharacterQuery {
    CharacterQuery {
        name: name.to_string(),
        age,
        filters: Filters {
            page,
            page_size,
            sort: sort.to_string(),
            ..Filters::new(CHARACTER_SORT_SAFELIST)
        },
    }
}

// ---------------------------------------------------------------------------
// Insert / get
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn insert_assigns_id_and_timestamps(pool: PgPool) {
    let repo = repo(pool);
    let mut aang = new_character("Aang", 12);
    repo.insert(&mut aang).await.unwrap();

    assert!(aang.id > 0);
    assert!(aang.created_at.timestamp() > 0);
    assert_eq!(aang.created_at, aang.updated_at);

    let fetched = repo.get(aang.id).await.unwrap();
    assert_eq!(fetched, aang);
}

#[sqlx::test]
async fn get_missing_is_record_not_found(pool: PgPool) {
    let repo = repo(pool);
    assert!(matches!(repo.get(424242).await, Err(StoreError::RecordNotFound)));
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn update_advances_version(pool: PgPool) {
    let repo = repo(pool);
    let mut c = new_character("Zuko", 16);
    repo.insert(&mut c).await.unwrap();
    let before = c.updated_at;

    c.age = 17;
    repo.update(&mut c, before).await.unwrap();
    assert!(c.updated_at > before);

    let stored = repo.get(c.id).await.unwrap();
    assert_eq!(stored.age, 17);
    assert_eq!(stored.updated_at, c.updated_at);
}

#[sqlx::test]
async fn stale_version_is_edit_conflict_and_leaves_row_unchanged(pool: PgPool) {
    let repo = repo(pool);
    let mut c = new_character("Azula", 14);
    repo.insert(&mut c).await.unwrap();
    let stale = c.updated_at;

    let mut first = c.clone();
    first.status = "imprisoned".into();
    repo.update(&mut first, stale).await.unwrap();

    let mut second = c.clone();
    second.status = "ruler".into();
    let err = repo.update(&mut second, stale).await.unwrap_err();
    assert!(matches!(err, StoreError::EditConflict));

    let stored = repo.get(c.id).await.unwrap();
    assert_eq!(stored, first);
}

#[sqlx::test]
async fn update_of_missing_row_is_not_found(pool: PgPool) {
    let repo = repo(pool);
    let mut ghost = new_character("Roku", 70);
    ghost.id = 9999;
    let version = ghost.updated_at;
    assert!(matches!(
        repo.update(&mut ghost, version).await,
        Err(StoreError::RecordNotFound)
    ));
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn delete_twice_reports_not_found(pool: PgPool) {
    let repo = repo(pool);
    let mut c = new_character("Jet", 16);
    repo.insert(&mut c).await.unwrap();

    repo.delete(c.id).await.unwrap();
    assert!(matches!(repo.delete(c.id).await, Err(StoreError::RecordNotFound)));
    assert!(matches!(repo.get(c.id).await, Err(StoreError::RecordNotFound)));
    assert!(matches!(repo.delete(123456).await, Err(StoreError::RecordNotFound)));
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn age_filter_is_inclusive_lower_bound(pool: PgPool) {
    let repo = repo(pool);
    repo.insert(&mut new_character("Aang", 12)).await.unwrap();
    repo.insert(&mut new_character("Zuko", 16)).await.unwrap();

    let (rows, meta) = repo.list(&query("", 13, 1, 20, "id")).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Zuko");
    assert_eq!(meta.total_records, 1);

    let (rows, _) = repo.list(&query("", 16, 1, 20, "id")).await.unwrap();
    assert_eq!(rows.len(), 1);
}

#[sqlx::test]
async fn name_filter_is_case_insensitive_exact_match(pool: PgPool) {
    let repo = repo(pool);
    repo.insert(&mut new_character("Toph", 12)).await.unwrap();
    repo.insert(&mut new_character("Tophie", 12)).await.unwrap();

    let (rows, _) = repo.list(&query("tOPH", 0, 1, 20, "id")).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Toph");
}

#[sqlx::test]
async fn total_counts_filtered_set_not_whole_table(pool: PgPool) {
    let repo = repo(pool);
    for age in [10, 20, 30, 40, 50] {
        repo.insert(&mut new_character("Sokka", age)).await.unwrap();
    }
    repo.insert(&mut new_character("Katara", 14)).await.unwrap();

    let (rows, meta) = repo.list(&query("sokka", 25, 1, 2, "age")).await.unwrap();
    assert_eq!(rows.iter().map(|c| c.age).collect::<Vec<_>>(), vec![30, 40]);
    assert_eq!(meta.total_records, 3);
    assert_eq!(meta.last_page, 2);
    assert_eq!(meta.current_page, 1);
}

#[sqlx::test]
async fn descending_sort(pool: PgPool) {
    let repo = repo(pool);
    for (name, age) in [("Aang", 12), ("Iroh", 60), ("Zuko", 16)] {
        repo.insert(&mut new_character(name, age)).await.unwrap();
    }
    let (rows, _) = repo.list(&query("", 0, 1, 20, "-age")).await.unwrap();
    let names: Vec<_> = rows.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Iroh", "Zuko", "Aang"]);
}

#[sqlx::test]
async fn pages_cover_every_row_once_despite_duplicate_sort_values(pool: PgPool) {
    let repo = repo(pool);
    let n = 7;
    for i in 0..n {
        // Only two distinct names, so the id tie-break decides the order.
        let name = if i % 2 == 0 { "Suki" } else { "Mai" };
        repo.insert(&mut new_character(name, 20)).await.unwrap();
    }

    let page_size = 3;
    let (_, meta) = repo.list(&query("", 0, 1, page_size, "name")).await.unwrap();
    assert_eq!(meta.last_page, 3);

    let mut seen = Vec::new();
    for page in 1..=meta.last_page {
        let (rows, _) = repo.list(&query("", 0, page, page_size, "name")).await.unwrap();
        seen.extend(rows.into_iter().map(|c| c.id));
    }
    assert_eq!(seen.len(), n);
    assert_eq!(seen.iter().collect::<HashSet<_>>().len(), n);
}

#[sqlx::test]
async fn empty_result_has_zero_metadata(pool: PgPool) {
    let repo = repo(pool);
    let (rows, meta) = repo.list(&query("Nobody", 0, 1, 20, "id")).await.unwrap();
    assert!(rows.is_empty());
    assert_eq!(meta, atla::Metadata::default());
}
