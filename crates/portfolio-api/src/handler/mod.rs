//! HTTP handlers
//!
//! - `routes`: router construction and the two route handlers
//! - `error`: mapping of validation and store failures to responses
//!
//! Every response body is JSON. Failure bodies are `{"message": ...}` with a
//! fixed, generic message; details only go to the log.

pub mod error;
pub mod routes;

pub use error::ApiError;
pub use routes::{build_app, create_router, get_portfolio, submit_contact, AppState};
