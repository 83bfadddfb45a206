use std::sync::Arc;

use async_trait::async_trait;
use models::Category;
use tracing::{info, instrument};

use crate::categories::repository::CategoryRepository;
use crate::errors::ServiceError;

/// Use-case boundary the HTTP layer depends on.
#[async_trait]
pub trait CategoryService: Send + Sync {
    async fn list(&self) -> Vec<Category>;
    /// Id 0 is never a valid lookup and always answers not-found.
    async fn get(&self, id: i64) -> Result<Category, ServiceError>;
    async fn insert(&self, candidate: Category) -> Result<Category, ServiceError>;
    async fn update(&self, candidate: Category) -> Result<Category, ServiceError>;
    async fn delete(&self, id: i64) -> Result<i64, ServiceError>;
}

/// Turns the repository's optional lookups into explicit not-found errors.
/// Holds no state besides the repository.
pub struct CategoriesService<R: CategoryRepository> {
    repo: Arc<R>,
}

impl<R: CategoryRepository> CategoriesService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }
}

#[async_trait]
impl<R: CategoryRepository> CategoryService for CategoriesService<R> {
    async fn list(&self) -> Vec<Category> {
        self.repo.list().await
    }

    async fn get(&self, id: i64) -> Result<Category, ServiceError> {
        if id == 0 {
            return Err(ServiceError::category_not_found());
        }
        self.repo.get(id).await.ok_or_else(ServiceError::category_not_found)
    }

    #[instrument(skip(self, candidate), fields(requested_id = candidate.id))]
    async fn insert(&self, candidate: Category) -> Result<Category, ServiceError> {
        let stored = self.repo.insert(candidate).await?;
        info!(id = stored.id, "category created");
        Ok(stored)
    }

    async fn update(&self, candidate: Category) -> Result<Category, ServiceError> {
        self.repo.update(candidate).await
    }

    async fn delete(&self, id: i64) -> Result<i64, ServiceError> {
        self.repo.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::repository::InMemoryCategoryRepository;

    fn service() -> CategoriesService<InMemoryCategoryRepository> {
        CategoriesService::new(Arc::new(InMemoryCategoryRepository::with_defaults()))
    }

    #[tokio::test]
    async fn get_existing() {
        let svc = service();
        let c = svc.get(3).await.unwrap();
        assert_eq!(c, Category::new(3, "Handphone", "Kategori Handphone"));
    }

    #[tokio::test]
    async fn get_absent_and_zero_are_not_found() {
        let svc = service();
        for id in [0, 99, -1] {
            let err = svc.get(id).await.unwrap_err();
            assert_eq!(err.to_string(), "kategori tidak ditemukan");
        }
    }

    #[tokio::test]
    async fn insert_then_get_round_trips() {
        let svc = service();
        let stored = svc.insert(Category::new(0, "Books", "All books")).await.unwrap();
        assert_eq!(stored.id, 4);
        assert_eq!(svc.get(stored.id).await.unwrap(), stored);
    }

    #[tokio::test]
    async fn insert_accepts_anything() {
        let svc = service();
        let stored = svc.insert(Category::new(-3, "", "")).await.unwrap();
        assert_eq!(stored.id, -3);
    }

    #[tokio::test]
    async fn get_zero_is_not_found_even_if_stored() {
        let repo = InMemoryCategoryRepository::with_categories(vec![Category::new(0, "Legacy", "")]);
        let svc = CategoriesService::new(Arc::new(repo));
        assert_eq!(svc.get(0).await, Err(ServiceError::category_not_found()));
    }

    #[tokio::test]
    async fn auto_id_on_negative_only_store_is_positive() {
        let svc = CategoriesService::new(Arc::new(InMemoryCategoryRepository::new()));
        svc.insert(Category::new(-1, "Neg", "")).await.unwrap();
        let stored = svc.insert(Category::new(0, "auto", "")).await.unwrap();
        assert_eq!(stored.id, 1);
        assert_eq!(svc.get(1).await, Ok(stored));
        assert!(svc.get(0).await.is_err());
    }

    #[tokio::test]
    async fn auto_id_after_max_is_a_validation_error() {
        let svc = service();
        svc.insert(Category::new(i64::MAX, "Top", "")).await.unwrap();
        let err = svc.insert(Category::new(0, "auto", "")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(svc.list().await.len(), 4);
    }

    #[tokio::test]
    async fn update_and_delete_propagate_not_found() {
        let svc = service();
        assert_eq!(
            svc.update(Category::new(50, "x", "")).await,
            Err(ServiceError::category_not_found())
        );
        assert_eq!(svc.delete(50).await, Err(ServiceError::category_not_found()));
        assert_eq!(svc.list().await.len(), 3);
    }

    #[tokio::test]
    async fn delete_returns_id() {
        let svc = service();
        assert_eq!(svc.delete(1).await, Ok(1));
        assert!(svc.get(1).await.is_err());
    }

    #[tokio::test]
    async fn usable_as_trait_object() {
        let svc: Arc<dyn CategoryService> = Arc::new(service());
        assert_eq!(svc.list().await, svc.list().await);
    }
}
