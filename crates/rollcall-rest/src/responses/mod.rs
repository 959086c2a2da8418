//! API response types and content-negotiated rendering.

use crate::extractors::ResponseFormat;
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use rollcall_core::{ErrorResponse, RollcallError};
use serde::Serialize;

/// Application error type for Axum.
#[derive(Debug)]
pub struct AppError(pub RollcallError);

impl From<RollcallError> for AppError {
    fn from(err: RollcallError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Unknown-identifier responses carry no body.
        if matches!(self.0, RollcallError::NotFound { .. }) {
            return status.into_response();
        }

        let body = Json(ErrorResponse::from_error(&self.0));
        (status, body).into_response()
    }
}

/// Helper to create a no content (204) response.
pub fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Renders a value in the negotiated representation.
///
/// JSON ignores `root`; the XML document is wrapped in a `root` element.
pub fn negotiated<T: Serialize>(
    format: ResponseFormat,
    status: StatusCode,
    root: &str,
    value: &T,
) -> Response {
    match format {
        ResponseFormat::Json => (status, Json(value)).into_response(),
        ResponseFormat::Xml => match quick_xml::se::to_string_with_root(root, value) {
            Ok(body) => (
                status,
                [(header::CONTENT_TYPE, "application/xml")],
                body,
            )
                .into_response(),
            Err(err) => AppError(RollcallError::internal(format!(
                "XML serialization error: {}",
                err
            )))
            .into_response(),
        },
    }
}
