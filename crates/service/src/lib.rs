//! Service layer for the categories API.
//! - `categories`: repository trait + in-memory store, and the service wrapping it.
//! - `healthcheck`: the static health payload.

pub mod errors;
pub mod categories;
pub mod healthcheck;
