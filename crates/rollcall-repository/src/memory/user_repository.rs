//! `InMemoryUserRepository` — keyed in-memory user store.

use crate::traits::UserRepository;
use async_trait::async_trait;
use parking_lot::RwLock;
use rollcall_core::{Page, PageRequest, RollcallError, RollcallResult, UserEntity, UserId};
use std::collections::HashMap;
use tracing::debug;

/// Keyed map plus an insertion-order index.
///
/// The index gives `find_page` a deterministic, stable ordering; both
/// structures are kept consistent under the same write lock.
#[derive(Default)]
struct Store {
    users: HashMap<UserId, UserEntity>,
    order: Vec<UserId>,
}

/// In-memory [`UserRepository`] backed by a `parking_lot::RwLock`.
///
/// The whole-store lock serializes mutations; lookups and paging take the
/// read lock and run concurrently. Nothing is persisted across restarts.
#[derive(Default)]
pub struct InMemoryUserRepository {
    store: RwLock<Store>,
}

impl InMemoryUserRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with the given users.
    #[must_use]
    pub fn with_users(users: Vec<UserEntity>) -> Self {
        let repo = Self::new();
        {
            let mut store = repo.store.write();
            for user in users {
                store.order.push(user.id);
                store.users.insert(user.id, user);
            }
        }
        repo
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> RollcallResult<Option<UserEntity>> {
        Ok(self.store.read().users.get(&id).cloned())
    }

    async fn insert(&self, user: &UserEntity) -> RollcallResult<UserEntity> {
        debug!("Store: insert user {}", user.id);

        let mut store = self.store.write();
        if store.users.contains_key(&user.id) {
            return Err(RollcallError::conflict(format!(
                "user {} already exists",
                user.id
            )));
        }

        store.order.push(user.id);
        store.users.insert(user.id, user.clone());
        Ok(user.clone())
    }

    async fn update(&self, user: &UserEntity) -> RollcallResult<UserEntity> {
        debug!("Store: update user {}", user.id);

        let mut store = self.store.write();
        if !store.users.contains_key(&user.id) {
            return Err(RollcallError::not_found("User", user.id));
        }

        store.users.insert(user.id, user.clone());
        Ok(user.clone())
    }

    async fn upsert(&self, user: &UserEntity) -> RollcallResult<(UserEntity, bool)> {
        debug!("Store: upsert user {}", user.id);

        let mut store = self.store.write();
        let inserted = !store.users.contains_key(&user.id);
        if inserted {
            store.order.push(user.id);
        }
        store.users.insert(user.id, user.clone());
        Ok((user.clone(), inserted))
    }

    async fn delete(&self, id: UserId) -> RollcallResult<bool> {
        debug!("Store: delete user {}", id);

        let mut store = self.store.write();
        let removed = store.users.remove(&id).is_some();
        if removed {
            store.order.retain(|stored| *stored != id);
        }
        Ok(removed)
    }

    async fn find_page(&self, page: PageRequest) -> RollcallResult<Page<UserEntity>> {
        let store = self.store.read();
        let total = store.order.len() as u64;

        let start = page.offset();
        let end = std::cmp::min(start + page.limit(), store.order.len());
        let content = if start < store.order.len() {
            store.order[start..end]
                .iter()
                .filter_map(|id| store.users.get(id).cloned())
                .collect()
        } else {
            Vec::new()
        };

        Ok(Page::new(content, page.page_number, page.page_size, total))
    }

    async fn count(&self) -> RollcallResult<u64> {
        Ok(self.store.read().users.len() as u64)
    }
}

impl std::fmt::Debug for InMemoryUserRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryUserRepository")
            .field("len", &self.store.read().users.len())
            .finish()
    }
}
