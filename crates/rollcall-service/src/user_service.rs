//! User service trait definition.

use crate::dto::{CreateUserRequest, PatchOperation, UpsertUserRequest, UserResponse};
use async_trait::async_trait;
use rollcall_core::{Page, PageRequest, RollcallResult, UserId};

/// User service.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Creates a new user and returns its wire representation.
    async fn create_user(&self, request: CreateUserRequest) -> RollcallResult<UserResponse>;

    /// Gets a user by ID.
    async fn get_user(&self, id: UserId) -> RollcallResult<UserResponse>;

    /// Lists users in insertion order with pagination.
    async fn list_users(&self, page: PageRequest) -> RollcallResult<Page<UserResponse>>;

    /// Fully replaces the user under the given id, inserting when absent.
    ///
    /// The boolean is true when the insert path was taken.
    async fn upsert_user(
        &self,
        id: UserId,
        request: UpsertUserRequest,
    ) -> RollcallResult<(UserResponse, bool)>;

    /// Applies a patch document to the user under the given id.
    ///
    /// The patched snapshot is re-validated before anything is persisted.
    async fn patch_user(&self, id: UserId, operations: Vec<PatchOperation>) -> RollcallResult<()>;

    /// Deletes a user.
    async fn delete_user(&self, id: UserId) -> RollcallResult<()>;
}
