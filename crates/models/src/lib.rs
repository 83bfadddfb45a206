//! Entities shared by the service and HTTP layers.

pub mod category;
pub mod health;

pub use category::Category;
pub use health::HealthResponse;
