//! # Rollcall Service
//!
//! Business logic service layer for Rollcall: wire DTOs, entity mappers,
//! patch application, and the user service.

pub mod dto;
pub mod mappers;
pub mod r#impl;
pub mod user_service;

pub use dto::*;
pub use r#impl::UserServiceImpl;
pub use user_service::*;
