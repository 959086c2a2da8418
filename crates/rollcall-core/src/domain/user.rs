//! User entity.

use crate::UserId;
use serde::{Deserialize, Serialize};

/// Canonical stored representation of a user.
///
/// The identifier is assigned at construction and never changes afterwards;
/// profile fields are replaced wholesale by update and upsert operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEntity {
    /// Unique identifier for the user.
    pub id: UserId,

    /// Login name. Non-empty and alphanumeric when present.
    pub login: Option<String>,

    /// User's first name.
    pub first_name: Option<String>,

    /// User's last name.
    pub last_name: Option<String>,
}

impl UserEntity {
    /// Creates a new user with a freshly generated identifier.
    #[must_use]
    pub fn new(
        login: Option<String>,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Self {
        Self::with_id(UserId::new(), login, first_name, last_name)
    }

    /// Creates a user under an explicit identifier (upsert-insert path).
    #[must_use]
    pub const fn with_id(
        id: UserId,
        login: Option<String>,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Self {
        Self {
            id,
            login,
            first_name,
            last_name,
        }
    }

    /// Replaces all profile fields, preserving the identifier.
    pub fn set_profile(
        &mut self,
        login: Option<String>,
        first_name: Option<String>,
        last_name: Option<String>,
    ) {
        self.login = login;
        self.first_name = first_name;
        self.last_name = last_name;
    }
}
