//! Patch operations for partial updates.
//!
//! A patch document is an ordered list of field-replacement operations
//! applied to an [`UpsertUserRequest`] snapshot of the target. The snapshot
//! is validated as a whole before anything is persisted, so a failing
//! document never leaves a partially-applied entity behind.

use crate::dto::UpsertUserRequest;
use rollcall_core::{FieldErrors, RollcallError, RollcallResult};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Supported patch operation kinds. Only field replacement is exercised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PatchOp {
    Replace,
}

/// A single field-level mutation targeting the update shape.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PatchOperation {
    pub op: PatchOp,
    /// Field pointer, e.g. `/login`, `/firstName`, `/lastName`.
    pub path: String,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub value: serde_json::Value,
}

impl PatchOperation {
    /// Interprets the operation value as an optional string field value.
    fn string_value(&self) -> Result<Option<String>, String> {
        match &self.value {
            serde_json::Value::Null => Ok(None),
            serde_json::Value::String(s) => Ok(Some(s.clone())),
            other => Err(format!("expected a string value, got {}", other)),
        }
    }
}

/// Applies patch operations to an update-shape snapshot.
///
/// Problems are aggregated per path and reported together; the snapshot may
/// be partially mutated on failure, which is fine because callers discard
/// it without persisting.
pub fn apply_patch(
    snapshot: &mut UpsertUserRequest,
    operations: &[PatchOperation],
) -> RollcallResult<()> {
    let mut errors = FieldErrors::new();

    for operation in operations {
        let field = operation.path.trim_start_matches('/');
        match field {
            "login" | "firstName" | "lastName" => match operation.string_value() {
                Ok(value) => match field {
                    "login" => snapshot.login = value,
                    "firstName" => snapshot.first_name = value,
                    _ => snapshot.last_name = value,
                },
                Err(message) => errors.push(field, message),
            },
            _ => errors.push(operation.path.clone(), "unsupported path".to_string()),
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(RollcallError::Unprocessable(errors))
    }
}
