//! Episode storage. Every operation reports `NotImplemented` until the table is wired up.

use crate::error::StoreError;
use crate::model::{DbId, Episode};

#[derive(Debug, Clone, Copy, Default)]
pub struct EpisodeRepo;

impl EpisodeRepo {
    pub async fn list(&self) -> Result<Vec<Episode>, StoreError> {
        Err(StoreError::NotImplemented)
    }

    pub async fn get(&self, _id: DbId) -> Result<Episode, StoreError> {
        Err(StoreError::NotImplemented)
    }

    pub async fn insert(&self, _episode: &mut Episode) -> Result<(), StoreError> {
        Err(StoreError::NotImplemented)
    }

    pub async fn update(&self, _episode: &mut Episode) -> Result<(), StoreError> {
        Err(StoreError::NotImplemented)
    }

    pub async fn delete(&self, _id: DbId) -> Result<(), StoreError> {
        Err(StoreError::NotImplemented)
    }
}
