use async_trait::async_trait;
use models::category::{self, Category};
use tokio::sync::RwLock;
use tracing::debug;

use crate::errors::ServiceError;

/// Storage boundary for categories. Implementations own the collection.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Snapshot of every category in insertion order.
    async fn list(&self) -> Vec<Category>;
    async fn get(&self, id: i64) -> Option<Category>;
    /// Stores `candidate`, assigning the next positive id when its id is 0.
    /// Fails with `Validation` when no id is left to assign.
    async fn insert(&self, candidate: Category) -> Result<Category, ServiceError>;
    /// Replaces the whole record whose id matches `candidate.id`.
    async fn update(&self, candidate: Category) -> Result<Category, ServiceError>;
    /// Removes the record and returns its id.
    async fn delete(&self, id: i64) -> Result<i64, ServiceError>;
}

/// Process-local repository. One lock guards the whole list so id
/// assignment and append happen in the same critical section.
///
/// A non-zero id supplied on insert is stored without a collision check.
#[derive(Debug, Default)]
pub struct InMemoryCategoryRepository {
    inner: RwLock<Vec<Category>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self { Self::default() }

    pub fn with_categories(categories: Vec<Category>) -> Self {
        Self { inner: RwLock::new(categories) }
    }

    /// Repository pre-filled with the built-in seed set.
    pub fn with_defaults() -> Self {
        Self::with_categories(category::default_categories())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn list(&self) -> Vec<Category> {
        self.inner.read().await.clone()
    }

    async fn get(&self, id: i64) -> Option<Category> {
        let list = self.inner.read().await;
        list.iter().find(|c| c.id == id).cloned()
    }

    async fn insert(&self, candidate: Category) -> Result<Category, ServiceError> {
        let mut list = self.inner.write().await;
        let stored = if candidate.id == 0 {
            let id = category::next_id(&list).ok_or_else(ServiceError::ids_exhausted)?;
            candidate.with_id(id)
        } else {
            candidate
        };
        list.push(stored.clone());
        debug!(id = stored.id, total = list.len(), "category inserted");
        Ok(stored)
    }

    async fn update(&self, candidate: Category) -> Result<Category, ServiceError> {
        let mut list = self.inner.write().await;
        let slot = list
            .iter_mut()
            .find(|c| c.id == candidate.id)
            .ok_or_else(ServiceError::category_not_found)?;
        *slot = candidate.clone();
        debug!(id = candidate.id, "category updated");
        Ok(candidate)
    }

    async fn delete(&self, id: i64) -> Result<i64, ServiceError> {
        let mut list = self.inner.write().await;
        let pos = list
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(ServiceError::category_not_found)?;
        let removed = list.remove(pos);
        debug!(id = removed.id, total = list.len(), "category deleted");
        Ok(removed.id)
    }
}
