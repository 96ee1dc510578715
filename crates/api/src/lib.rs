//! Site API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! seeding) so integration tests and both binaries can share them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod router;
pub mod routes;
pub mod seed;
pub mod state;
pub mod telemetry;
