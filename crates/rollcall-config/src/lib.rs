//! # Rollcall Config
//!
//! Layered configuration loading for Rollcall.

pub mod app_config;
pub mod loader;

pub use app_config::*;
pub use loader::*;
