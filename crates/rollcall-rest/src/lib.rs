//! # Rollcall REST
//!
//! REST API layer using Axum for Rollcall. Provides the `users` resource
//! endpoints with JSON/XML content negotiation, plus health checks and
//! OpenAPI documentation.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
