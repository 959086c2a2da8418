//! Users resource controller.

use crate::{
    extractors::{PaginationMeta, PaginationQuery, ResponseFormat, X_PAGINATION},
    responses::{negotiated, no_content, AppError},
    state::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use rollcall_core::{RollcallError, UserId};
use rollcall_service::{CreateUserRequest, PatchOperation, UpsertUserRequest, UserResponse};
use serde::Serialize;
use tracing::debug;

/// Path under which the users resource is served.
const USERS_PATH: &str = "/api/v1/users";

/// Creates the users router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route(
            "/:id",
            get(get_user)
                .put(upsert_user)
                .patch(patch_user)
                .delete(delete_user),
        )
}

/// XML envelope for the list endpoint; JSON serves a bare array.
#[derive(Serialize)]
struct UserCollection<'a> {
    user: &'a [UserResponse],
}

/// List users with pagination metadata.
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    params(
        ("pageNumber" = Option<i64>, Query, description = "1-indexed page number, default 1"),
        ("pageSize" = Option<i64>, Query, description = "Page size, default 10, max 20")
    ),
    responses(
        (status = 200, description = "Page of users with X-Pagination header", body = [UserResponse]),
        (status = 400, description = "Out-of-range paging parameters"),
        (status = 406, description = "Unacceptable requested format")
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    format: ResponseFormat,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Response, AppError> {
    debug!("List users request");

    let page_request = pagination.into_page_request()?;
    let page = state.user_service.list_users(page_request).await?;

    let meta = PaginationMeta::new(USERS_PATH, &page.info);
    let header_value = meta.header_value()?;

    let mut response = match format {
        ResponseFormat::Json => negotiated(format, StatusCode::OK, "users", &page.content),
        ResponseFormat::Xml => negotiated(
            format,
            StatusCode::OK,
            "users",
            &UserCollection {
                user: &page.content,
            },
        ),
    };
    response
        .headers_mut()
        .insert(HeaderName::from_static(X_PAGINATION), header_value);

    Ok(response)
}

/// Create a new user.
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created; Location points at it, body is the new id"),
        (status = 400, description = "Null or malformed body"),
        (status = 422, description = "Validation failure with field errors"),
        (status = 406, description = "Unacceptable requested format")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    format: ResponseFormat,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = body.map_err(bad_body)?;
    debug!("Create user request: {:?}", request.login);

    let response = state.user_service.create_user(request).await?;

    created_at(format, response.id)
}

/// Get a user by ID.
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "The user", body = UserResponse),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "Unknown identifier, empty body"),
        (status = 406, description = "Unacceptable requested format")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    format: ResponseFormat,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    debug!("Get user request: {}", id);

    let user_id = parse_user_id(&id)?;
    let response = state.user_service.get_user(user_id).await?;

    Ok(negotiated(format, StatusCode::OK, "user", &response))
}

/// Fully update a user, inserting when the identifier is unknown.
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User identifier")),
    request_body = UpsertUserRequest,
    responses(
        (status = 201, description = "Inserted; body is the new id"),
        (status = 204, description = "Replaced, no body"),
        (status = 400, description = "Null body or malformed identifier"),
        (status = 422, description = "Validation failure with field errors"),
        (status = 406, description = "Unacceptable requested format")
    )
)]
pub async fn upsert_user(
    State(state): State<AppState>,
    format: ResponseFormat,
    Path(id): Path<String>,
    body: Result<Json<UpsertUserRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    debug!("Upsert user request: {}", id);

    let user_id = parse_user_id(&id)?;
    let Json(request) = body.map_err(bad_body)?;

    let (response, inserted) = state.user_service.upsert_user(user_id, request).await?;

    if inserted {
        created_at(format, response.id)
    } else {
        Ok(no_content().into_response())
    }
}

/// Partially update a user with a patch document.
#[utoipa::path(
    patch,
    path = "/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User identifier")),
    request_body = [PatchOperation],
    responses(
        (status = 204, description = "Patched, no body"),
        (status = 400, description = "Null patch document or malformed identifier"),
        (status = 404, description = "Unknown identifier, empty body"),
        (status = 422, description = "Patched document fails validation")
    )
)]
pub async fn patch_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Vec<PatchOperation>>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    debug!("Patch user request: {}", id);

    let user_id = parse_user_id(&id)?;
    let Json(operations) = body.map_err(bad_body)?;

    state.user_service.patch_user(user_id, operations).await?;

    Ok(no_content())
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 204, description = "Deleted, no body"),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "Unknown identifier, empty body")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    debug!("Delete user request: {}", id);

    let user_id = parse_user_id(&id)?;
    state.user_service.delete_user(user_id).await?;

    Ok(no_content())
}

/// Builds a 201 response: `Location` header plus the new id as the body.
fn created_at(format: ResponseFormat, id: UserId) -> Result<Response, AppError> {
    let location = format!("{}/{}", USERS_PATH, id);
    let location = HeaderValue::from_str(&location)
        .map_err(|e| AppError(RollcallError::internal(format!("invalid location: {}", e))))?;

    let mut response = negotiated(format, StatusCode::CREATED, "id", &id);
    response.headers_mut().insert(header::LOCATION, location);
    Ok(response)
}

/// Helper to parse a user ID from a path parameter.
fn parse_user_id(id: &str) -> Result<UserId, AppError> {
    UserId::parse(id)
        .map_err(|_| AppError(RollcallError::bad_request(format!("invalid user id: {}", id))))
}

/// Maps a missing or unparseable body to a bad request.
fn bad_body(rejection: JsonRejection) -> AppError {
    AppError(RollcallError::bad_request(rejection.body_text()))
}
