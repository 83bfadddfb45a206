use models::HealthResponse;

pub const DEFAULT_SERVICE_NAME: &str = "Categories API";

pub trait HealthCheck: Send + Sync {
    fn status(&self) -> HealthResponse;
}

/// Reports a fixed healthy status; there is no backing probe.
#[derive(Debug, Clone)]
pub struct HealthCheckService {
    name: String,
}

impl HealthCheckService {
    pub fn new(name: impl Into<String>) -> Self { Self { name: name.into() } }
}

impl Default for HealthCheckService {
    fn default() -> Self { Self::new(DEFAULT_SERVICE_NAME) }
}

impl HealthCheck for HealthCheckService {
    fn status(&self) -> HealthResponse {
        HealthResponse { name: self.name.clone(), is_healthy: true }
    }
}
