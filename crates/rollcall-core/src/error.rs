//! Unified error types for all layers of the application.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{self, Debug, Display};
use thiserror::Error;

/// Aggregated field-level validation failures, keyed by wire field name.
///
/// All rule violations for a request are collected here before the request
/// is rejected; a response never reports a partial subset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FieldErrors(pub BTreeMap<String, Vec<String>>);

impl FieldErrors {
    /// Creates an empty set of field errors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message against a field.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Returns true if no errors have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Creates a set containing a single field error.
    #[must_use]
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(field, message);
        errors
    }
}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|(field, messages)| format!("{}: {}", field, messages.join(", ")))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{}", joined)
    }
}

/// Unified error type for all layers of Rollcall.
#[derive(Error, Debug)]
pub enum RollcallError {
    /// Malformed request: missing body, unparseable payload, or
    /// out-of-range paging parameters.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Resource not found
    #[error("Resource not found: {resource} with id {id}")]
    NotFound { resource: &'static str, id: String },

    /// Business-rule or structural validation failure
    #[error("Validation failed: {0}")]
    Unprocessable(FieldErrors),

    /// Conflict error (duplicate identifier on insert)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RollcallError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest(_) => 400,
            Self::NotFound { .. } => 404,
            Self::Unprocessable(_) => 422,
            Self::Conflict(_) => 409,
            Self::Internal(_) | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Unprocessable(_) => "UNPROCESSABLE_ENTITY",
            Self::Conflict(_) => "CONFLICT",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a bad request error.
    #[must_use]
    pub fn bad_request<T: Into<String>>(message: T) -> Self {
        Self::BadRequest(message.into())
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource: &'static str, id: T) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    /// Creates an unprocessable error from aggregated field errors.
    #[must_use]
    pub fn unprocessable(errors: FieldErrors) -> Self {
        Self::Unprocessable(errors)
    }

    /// Creates a conflict error.
    #[must_use]
    pub fn conflict<T: Into<String>>(message: T) -> Self {
        Self::Conflict(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }
}

impl From<serde_json::Error> for RollcallError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Serializable error response for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field-level validation errors, present on 422 responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl ErrorResponse {
    /// Creates a new error response from a `RollcallError`.
    #[must_use]
    pub fn from_error(error: &RollcallError) -> Self {
        let errors = match error {
            RollcallError::Unprocessable(field_errors) => Some(field_errors.clone()),
            _ => None,
        };

        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
            errors,
        }
    }
}

impl From<&RollcallError> for ErrorResponse {
    fn from(error: &RollcallError) -> Self {
        Self::from_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(RollcallError::bad_request("no body").status_code(), 400);
        assert_eq!(RollcallError::not_found("User", 1).status_code(), 404);
        assert_eq!(
            RollcallError::unprocessable(FieldErrors::single("login", "invalid login"))
                .status_code(),
            422
        );
        assert_eq!(RollcallError::conflict("duplicate").status_code(), 409);
        assert_eq!(RollcallError::internal("oops").status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(RollcallError::bad_request("x").error_code(), "BAD_REQUEST");
        assert_eq!(RollcallError::not_found("User", 1).error_code(), "NOT_FOUND");
        assert_eq!(
            RollcallError::unprocessable(FieldErrors::new()).error_code(),
            "UNPROCESSABLE_ENTITY"
        );
        assert_eq!(RollcallError::conflict("dup").error_code(), "CONFLICT");
        assert_eq!(RollcallError::internal("err").error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_field_errors_aggregate() {
        let mut errors = FieldErrors::new();
        errors.push("login", "invalid login");
        errors.push("login", "login is required");
        errors.push("firstName", "too long");

        assert!(!errors.is_empty());
        assert_eq!(errors.0.get("login").unwrap().len(), 2);
        assert_eq!(errors.0.get("firstName").unwrap().len(), 1);
    }

    #[test]
    fn test_field_errors_display() {
        let errors = FieldErrors::single("login", "invalid login");
        assert_eq!(errors.to_string(), "login: invalid login");
    }

    #[test]
    fn test_field_errors_serialize_as_map() {
        let errors = FieldErrors::single("login", "invalid login");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["login"][0], "invalid login");
    }

    #[test]
    fn test_error_response_from_error() {
        let err = RollcallError::not_found("User", 1);
        let response = ErrorResponse::from_error(&err);
        assert_eq!(response.code, "NOT_FOUND");
        assert!(!response.message.is_empty());
        assert!(response.errors.is_none());
    }

    #[test]
    fn test_error_response_carries_field_errors() {
        let err = RollcallError::unprocessable(FieldErrors::single("login", "invalid login"));
        let response = ErrorResponse::from_error(&err);
        assert_eq!(response.code, "UNPROCESSABLE_ENTITY");
        let errors = response.errors.unwrap();
        assert_eq!(errors.0.get("login").unwrap()[0], "invalid login");
    }
}
