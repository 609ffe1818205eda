//! HTTP surface for the task lifecycle.
//!
//! The router exposes the task service over JSON. Every failure is rendered
//! as `{"error": ..., "errors": [...]}` with the status code chosen in
//! [`error`]. Malformed bodies, unknown routes, and panics are normalized to
//! the same shape.

pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod state;

pub use dto::{ErrorBody, MessageResponse, StatusChangeRequest};
pub use error::{ApiError, Operation};
pub use extract::JsonBody;
pub use routes::router;
pub use state::AppState;
