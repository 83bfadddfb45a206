pub mod repository;
pub mod service;

pub use repository::{CategoryRepository, InMemoryCategoryRepository};
pub use service::{CategoriesService, CategoryService};
