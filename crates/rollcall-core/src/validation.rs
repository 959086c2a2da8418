//! Validation utilities.

use crate::{FieldErrors, RollcallError};
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct, aggregating every rule violation into a single
    /// unprocessable error.
    fn validate_request(&self) -> Result<(), RollcallError> {
        self.validate()
            .map_err(|e| RollcallError::Unprocessable(validation_errors_to_field_errors(&e)))
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` into the field→messages map used
/// on 422 responses. Field names are reported in wire casing (camelCase).
#[must_use]
pub fn validation_errors_to_field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut field_errors = FieldErrors::new();

    for (field, errs) in errors.field_errors() {
        for err in errs {
            let message = err
                .message
                .as_ref()
                .map_or_else(|| err.code.to_string(), |m| m.to_string());
            field_errors.push(wire_field_name(&field), message);
        }
    }

    field_errors
}

/// Converts a snake_case struct field identifier to its camelCase wire name.
fn wire_field_name(field: &str) -> String {
    let mut result = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            result.extend(c.to_uppercase());
            upper_next = false;
        } else {
            result.push(c);
        }
    }
    result
}

/// Common validation functions.
pub mod rules {
    use validator::ValidationError;

    /// Validates a login: non-empty, every character a letter or digit.
    pub fn valid_login(login: &str) -> Result<(), ValidationError> {
        if login.is_empty() || !login.chars().all(char::is_alphanumeric) {
            let mut err = ValidationError::new("invalid_login");
            err.message = Some("invalid login".into());
            return Err(err);
        }
        Ok(())
    }
}
