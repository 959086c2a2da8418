//! Entity-DTO mappers.
//!
//! Pure transformations between the stored entity and the wire shapes.
//! Nothing here validates; mapping never fails on well-formed input.

use crate::dto::{CreateUserRequest, UpsertUserRequest, UserResponse};
use rollcall_core::{Page, UserEntity, UserId};

/// Computes the wire full name: last name first, missing parts empty.
fn full_name(entity: &UserEntity) -> String {
    format!(
        "{} {}",
        entity.last_name.as_deref().unwrap_or_default(),
        entity.first_name.as_deref().unwrap_or_default()
    )
}

impl From<&UserEntity> for UserResponse {
    fn from(entity: &UserEntity) -> Self {
        Self {
            id: entity.id,
            full_name: full_name(entity),
        }
    }
}

impl From<UserEntity> for UserResponse {
    fn from(entity: UserEntity) -> Self {
        Self::from(&entity)
    }
}

impl From<CreateUserRequest> for UserEntity {
    fn from(request: CreateUserRequest) -> Self {
        Self::new(request.login, request.first_name, request.last_name)
    }
}

/// Materializes the update-shape snapshot of an entity (patch staging).
impl From<&UserEntity> for UpsertUserRequest {
    fn from(entity: &UserEntity) -> Self {
        Self {
            login: entity.login.clone(),
            first_name: entity.first_name.clone(),
            last_name: entity.last_name.clone(),
        }
    }
}

impl UpsertUserRequest {
    /// Builds an entity under an explicit identifier (upsert path).
    #[must_use]
    pub fn into_entity(self, id: UserId) -> UserEntity {
        UserEntity::with_id(id, self.login, self.first_name, self.last_name)
    }

    /// Overwrites all mapped fields on the target, preserving its id.
    pub fn merge_into(self, entity: &mut UserEntity) {
        entity.set_profile(self.login, self.first_name, self.last_name);
    }
}

/// Converts a page of entities to a page of response DTOs.
#[must_use]
pub fn to_response_page(page: Page<UserEntity>) -> Page<UserResponse> {
    page.map(|entity| UserResponse::from(&entity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_is_last_name_first() {
        let entity = UserEntity::new(
            Some("abc123".to_string()),
            Some("Ann".to_string()),
            Some("Lee".to_string()),
        );

        let response = UserResponse::from(&entity);
        assert_eq!(response.full_name, "Lee Ann");
        assert_eq!(response.id, entity.id);
    }

    #[test]
    fn test_full_name_missing_parts_render_empty() {
        let only_first = UserEntity::new(None, Some("Ann".to_string()), None);
        assert_eq!(UserResponse::from(&only_first).full_name, " Ann");

        let only_last = UserEntity::new(None, None, Some("Lee".to_string()));
        assert_eq!(UserResponse::from(&only_last).full_name, "Lee ");

        let neither = UserEntity::new(None, None, None);
        assert_eq!(UserResponse::from(&neither).full_name, " ");
    }

    #[test]
    fn test_create_request_maps_without_identifier_input() {
        let request = CreateUserRequest {
            login: Some("abc123".to_string()),
            first_name: Some("Ann".to_string()),
            last_name: Some("Lee".to_string()),
        };

        let entity = UserEntity::from(request);
        assert_eq!(entity.login, Some("abc123".to_string()));
        assert_eq!(entity.first_name, Some("Ann".to_string()));
        assert_eq!(entity.last_name, Some("Lee".to_string()));
    }

    #[test]
    fn test_snapshot_round_trips_fields() {
        let entity = UserEntity::new(
            Some("abc123".to_string()),
            Some("Ann".to_string()),
            Some("Lee".to_string()),
        );

        let snapshot = UpsertUserRequest::from(&entity);
        assert_eq!(snapshot.login, entity.login);
        assert_eq!(snapshot.first_name, entity.first_name);
        assert_eq!(snapshot.last_name, entity.last_name);
    }

    #[test]
    fn test_merge_preserves_identifier() {
        let mut entity = UserEntity::new(
            Some("abc123".to_string()),
            Some("Ann".to_string()),
            Some("Lee".to_string()),
        );
        let id = entity.id;

        let update = UpsertUserRequest {
            login: Some("xyz789".to_string()),
            first_name: None,
            last_name: Some("Leigh".to_string()),
        };
        update.merge_into(&mut entity);

        assert_eq!(entity.id, id);
        assert_eq!(entity.login, Some("xyz789".to_string()));
        assert_eq!(entity.first_name, None);
        assert_eq!(entity.last_name, Some("Leigh".to_string()));
    }

    #[test]
    fn test_into_entity_uses_given_identifier() {
        let id = UserId::new();
        let request = UpsertUserRequest {
            login: Some("abc123".to_string()),
            first_name: None,
            last_name: None,
        };

        let entity = request.into_entity(id);
        assert_eq!(entity.id, id);
    }

    #[test]
    fn test_to_response_page_keeps_info() {
        let entities = vec![
            UserEntity::new(Some("a1".to_string()), Some("Ann".to_string()), Some("Lee".to_string())),
            UserEntity::new(Some("b2".to_string()), Some("Bob".to_string()), Some("Ray".to_string())),
        ];
        let page = Page::new(entities, 1, 10, 2);

        let responses = to_response_page(page);
        assert_eq!(responses.len(), 2);
        assert_eq!(responses.content[0].full_name, "Lee Ann");
        assert_eq!(responses.total_count(), 2);
    }
}
