//! Taskboard: a small task tracker.
//!
//! Tasks move between three statuses (active, completed, deleted) with a
//! soft-delete trash and a permanent purge. The crate contains both ends of
//! the system: an HTTP server backed by `PostgreSQL` or memory, and a client
//! that keeps the task list, form, and list view state for a front end.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, memory, HTTP)
//!
//! # Modules
//!
//! - [`task`]: Task domain, repository port, storage adapters, and lifecycle service
//! - [`api`]: axum router exposing the lifecycle over JSON
//! - [`client`]: Task manager, form, and list view driven through the API
//! - [`config`]: Environment-driven server configuration
//! - [`telemetry`]: Tracing subscriber setup

pub mod api;
pub mod client;
pub mod config;
pub mod task;
pub mod telemetry;
