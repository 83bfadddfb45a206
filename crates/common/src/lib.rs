//! Pieces shared by every layer of the categories API: the response
//! envelope, its codes and messages, and tracing setup.

pub mod types;
pub mod utils;

pub use types::{codes, messages, ApiResponse};
