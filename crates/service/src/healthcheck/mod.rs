pub mod service;

pub use service::{HealthCheck, HealthCheckService};
