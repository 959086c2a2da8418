//! # Rollcall Core
//!
//! Core types, error definitions, and validation helpers for the Rollcall
//! user-directory service. This crate provides the foundational abstractions
//! used across all layers.

pub mod domain;
pub mod error;
pub mod id;
pub mod pagination;
pub mod result;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use pagination::*;
pub use result::*;
pub use validation::*;
