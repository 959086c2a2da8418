//! Wire DTOs.

pub mod patch;
pub mod user_dto;

pub use patch::*;
pub use user_dto::*;
