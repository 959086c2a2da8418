//! Repository trait definitions.

use async_trait::async_trait;
use rollcall_core::{Page, PageRequest, RollcallResult, UserEntity, UserId};

/// User entity store.
///
/// Mutating operations against the same identifier are serialized by
/// implementations; reads may proceed concurrently with unrelated-key
/// mutations.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by ID.
    async fn find_by_id(&self, id: UserId) -> RollcallResult<Option<UserEntity>>;

    /// Stores a new user under its identifier.
    ///
    /// Fails with a conflict if the identifier is already present.
    async fn insert(&self, user: &UserEntity) -> RollcallResult<UserEntity>;

    /// Replaces the stored user with a matching identifier.
    ///
    /// Fails with not-found if the identifier is absent.
    async fn update(&self, user: &UserEntity) -> RollcallResult<UserEntity>;

    /// Replaces the user if the identifier exists, otherwise inserts it.
    ///
    /// The boolean is true when the insert path was taken.
    async fn upsert(&self, user: &UserEntity) -> RollcallResult<(UserEntity, bool)>;

    /// Removes the user, returning false when the identifier was absent.
    async fn delete(&self, id: UserId) -> RollcallResult<bool>;

    /// Returns a page of users in insertion order.
    ///
    /// Past the end of the collection the page is empty.
    async fn find_page(&self, page: PageRequest) -> RollcallResult<Page<UserEntity>>;

    /// Counts all users.
    async fn count(&self) -> RollcallResult<u64>;
}
