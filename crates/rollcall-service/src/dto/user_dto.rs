//! User-related DTOs.

use rollcall_core::{rules::valid_login, UserId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request to create a new user. Never carries an identifier.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(required(message = "login is required"), custom(function = valid_login))]
    pub login: Option<String>,

    pub first_name: Option<String>,

    pub last_name: Option<String>,
}

/// Request body for full update/upsert of a user.
///
/// All mapped fields replace the target's fields wholesale; the login is
/// optional on this path but must still be well-formed when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertUserRequest {
    #[validate(custom(function = valid_login))]
    pub login: Option<String>,

    pub first_name: Option<String>,

    pub last_name: Option<String>,
}

/// User response DTO.
///
/// The wire shape is deliberately decoupled from storage: only the
/// identifier and a computed full name are exposed.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[schema(value_type = String, format = Uuid)]
    pub id: UserId,
    pub full_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollcall_core::ValidateExt;

    #[test]
    fn test_create_request_valid() {
        let request = CreateUserRequest {
            login: Some("abc123".to_string()),
            first_name: Some("Ann".to_string()),
            last_name: Some("Lee".to_string()),
        };

        assert!(request.validate_request().is_ok());
    }

    #[test]
    fn test_create_request_missing_login() {
        let request = CreateUserRequest {
            login: None,
            first_name: Some("Ann".to_string()),
            last_name: None,
        };

        assert!(request.validate_request().is_err());
    }

    #[test]
    fn test_create_request_non_alphanumeric_login() {
        let request = CreateUserRequest {
            login: Some("ann-lee!".to_string()),
            first_name: None,
            last_name: None,
        };

        let err = request.validate_request().unwrap_err();
        match err {
            rollcall_core::RollcallError::Unprocessable(errors) => {
                assert_eq!(errors.0.get("login").unwrap()[0], "invalid login");
            }
            other => panic!("expected Unprocessable, got {:?}", other),
        }
    }

    #[test]
    fn test_upsert_request_login_optional() {
        let request = UpsertUserRequest {
            login: None,
            first_name: Some("Ann".to_string()),
            last_name: Some("Lee".to_string()),
        };

        assert!(request.validate_request().is_ok());
    }

    #[test]
    fn test_upsert_request_login_validated_when_present() {
        let request = UpsertUserRequest {
            login: Some("bad login".to_string()),
            first_name: None,
            last_name: None,
        };

        assert!(request.validate_request().is_err());
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let response = UserResponse {
            id: UserId::parse("550e8400-e29b-41d4-a716-446655440000").unwrap(),
            full_name: "Lee Ann".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["id"], "550e8400-e29b-41d4-a716-446655440000");
        assert_eq!(json["fullName"], "Lee Ann");
    }

    #[test]
    fn test_create_request_deserializes_camel_case() {
        let json = r#"{"login":"abc123","firstName":"Ann","lastName":"Lee"}"#;
        let request: CreateUserRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.login, Some("abc123".to_string()));
        assert_eq!(request.first_name, Some("Ann".to_string()));
        assert_eq!(request.last_name, Some("Lee".to_string()));
    }
}
