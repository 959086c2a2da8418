//! User service implementation.

use crate::dto::{
    apply_patch, CreateUserRequest, PatchOperation, UpsertUserRequest, UserResponse,
};
use crate::mappers::to_response_page;
use crate::user_service::UserService;
use async_trait::async_trait;
use rollcall_core::{
    Page, PageRequest, RollcallError, RollcallResult, UserEntity, UserId, ValidateExt,
};
use rollcall_repository::UserRepository;
use std::sync::Arc;
use tracing::{debug, info};

/// User service over a pluggable entity store.
pub struct UserServiceImpl<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserServiceImpl<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: UserRepository + 'static> UserService for UserServiceImpl<R> {
    async fn create_user(&self, request: CreateUserRequest) -> RollcallResult<UserResponse> {
        debug!("Creating user: {:?}", request.login);

        request.validate_request()?;

        let user = UserEntity::from(request);
        let saved = self.repository.insert(&user).await?;

        info!("User created: {}", saved.id);
        Ok(UserResponse::from(saved))
    }

    async fn get_user(&self, id: UserId) -> RollcallResult<UserResponse> {
        debug!("Getting user: {}", id);

        let user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| RollcallError::not_found("User", id))?;

        Ok(UserResponse::from(user))
    }

    async fn list_users(&self, page: PageRequest) -> RollcallResult<Page<UserResponse>> {
        debug!(
            "Listing users, page: {}, size: {}",
            page.page_number, page.page_size
        );

        let users = self.repository.find_page(page).await?;
        Ok(to_response_page(users))
    }

    async fn upsert_user(
        &self,
        id: UserId,
        request: UpsertUserRequest,
    ) -> RollcallResult<(UserResponse, bool)> {
        debug!("Upserting user: {}", id);

        request.validate_request()?;

        // Full replacement of all mapped fields, so the replace path builds
        // the same entity as the insert path.
        let user = request.into_entity(id);
        let (stored, inserted) = self.repository.upsert(&user).await?;

        if inserted {
            info!("User inserted via upsert: {}", id);
        } else {
            info!("User replaced via upsert: {}", id);
        }
        Ok((UserResponse::from(stored), inserted))
    }

    async fn patch_user(&self, id: UserId, operations: Vec<PatchOperation>) -> RollcallResult<()> {
        debug!("Patching user: {} ({} operations)", id, operations.len());

        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| RollcallError::not_found("User", id))?;

        // Stage onto a snapshot of the update shape; the stored entity is
        // only touched once the patched snapshot validates as a whole.
        let mut snapshot = UpsertUserRequest::from(&user);
        apply_patch(&mut snapshot, &operations)?;
        snapshot.validate_request()?;

        snapshot.merge_into(&mut user);
        self.repository.update(&user).await?;

        info!("User patched: {}", id);
        Ok(())
    }

    async fn delete_user(&self, id: UserId) -> RollcallResult<()> {
        debug!("Deleting user: {}", id);

        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(RollcallError::not_found("User", id));
        }

        info!("User deleted: {}", id);
        Ok(())
    }
}

impl<R: UserRepository> std::fmt::Debug for UserServiceImpl<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceImpl").finish_non_exhaustive()
    }
}
