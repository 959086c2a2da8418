//! OpenAPI documentation configuration.

use crate::controllers::health_controller::HealthResponse;
use rollcall_core::{ErrorResponse, FieldErrors};
use rollcall_service::{
    CreateUserRequest, PatchOp, PatchOperation, UpsertUserRequest, UserResponse,
};
use utoipa::OpenApi;

/// OpenAPI documentation for the Rollcall API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Rollcall API",
        version = "1.0.0",
        description = "RESTful user-directory API with JSON/XML content negotiation",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // User endpoints
        crate::controllers::user_controller::list_users,
        crate::controllers::user_controller::create_user,
        crate::controllers::user_controller::get_user,
        crate::controllers::user_controller::upsert_user,
        crate::controllers::user_controller::patch_user,
        crate::controllers::user_controller::delete_user,
        // Health endpoints
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            ErrorResponse,
            FieldErrors,
            CreateUserRequest,
            UpsertUserRequest,
            UserResponse,
            PatchOp,
            PatchOperation,
            HealthResponse,
        )
    ),
    tags(
        (name = "users", description = "User management endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;
