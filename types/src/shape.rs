//! Field-presence checks for raw JSON responses.
//!
//! The suite treats the remote API as a black box: besides the typed models,
//! it asserts that responses carry the expected top-level fields without
//! caring about their values. These checks operate on `serde_json::Value`
//! and report every missing field at once.

use serde_json::Value;
use thiserror::Error;

/// Fields every post resource must carry.
pub const POST_FIELDS: [&str; 4] = ["id", "title", "body", "userId"];

/// Fields every user resource must carry.
pub const USER_FIELDS: [&str; 4] = ["id", "name", "username", "email"];

/// A response body was missing one or more required fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required field(s): {}", .missing.join(", "))]
pub struct ShapeError {
    pub missing: Vec<&'static str>,
}

/// Checks that `value` is an object carrying all of `fields`.
///
/// A non-object value reports every field as missing.
pub fn require_fields(value: &Value, fields: &[&'static str]) -> Result<(), ShapeError> {
    let missing: Vec<&'static str> = fields
        .iter()
        .copied()
        .filter(|field| value.get(field).is_none())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ShapeError { missing })
    }
}

/// Checks that `value` has the shape of a post resource.
pub fn check_post_shape(value: &Value) -> Result<(), ShapeError> {
    require_fields(value, &POST_FIELDS)
}

/// Checks that `value` has the shape of a user resource.
pub fn check_user_shape(value: &Value) -> Result<(), ShapeError> {
    require_fields(value, &USER_FIELDS)
}
