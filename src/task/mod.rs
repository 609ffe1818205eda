//! Task lifecycle management.
//!
//! Tasks are created active, can be completed and reactivated, moved to the
//! trash and restored, and finally removed for good. The module follows
//! hexagonal architecture:
//!
//! - Domain types and validation in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
