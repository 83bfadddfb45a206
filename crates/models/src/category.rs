use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A category record. `id == 0` means "not yet assigned".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Category {
    pub fn new(id: i64, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self { id, name: name.into(), description: description.into() }
    }

    /// Same record carrying a different id.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }
}

/// Largest id in `records`, 0 when empty.
pub fn max_id(records: &[Category]) -> i64 {
    records.iter().map(|c| c.id).max().unwrap_or(0)
}

/// Id for the next auto-assigned record: one past the largest positive id,
/// 1 when none exist. `None` once `i64::MAX` is taken.
pub fn next_id(records: &[Category]) -> Option<i64> {
    max_id(records).max(0).checked_add(1)
}

/// Categories a fresh deployment starts with.
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new(1, "Elektronik", "Kategori Elektronik"),
        Category::new(2, "Komputer", " Kategori Komputer"),
        Category::new(3, "Handphone", "Kategori Handphone"),
    ]
}
