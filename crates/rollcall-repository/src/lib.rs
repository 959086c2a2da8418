//! # Rollcall Repository
//!
//! Entity store layer for Rollcall.
//!
//! ```text
//! Service
//!   ↓  Arc<dyn UserRepository>   (store interface)
//! InMemoryUserRepository          (keyed map + insertion-order index)
//! ```

pub mod memory;
pub mod traits;

pub use memory::InMemoryUserRepository;
pub use traits::*;
