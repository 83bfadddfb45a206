use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identity and liveness of the service itself. Never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub name: String,
    pub is_healthy: bool,
}
