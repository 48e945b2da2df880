//! Domain types for the posts/users API exercised by the probe suite.
//!
//! This crate contains pure data types with no IO and no async. The wire
//! format follows the remote service's camelCase convention (`userId`);
//! unknown response fields are ignored on deserialization so the suite stays
//! robust against additive API changes.

mod shape;
pub use shape::{POST_FIELDS, ShapeError, USER_FIELDS, check_post_shape, check_user_shape, require_fields};

use serde::{Deserialize, Serialize};

/// A post resource as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
    pub user_id: u64,
}

impl Post {
    /// Whether this post carries the same content as `draft`.
    ///
    /// The id is deliberately not compared: it is assigned by the server.
    #[must_use]
    pub fn matches_draft(&self, draft: &NewPost) -> bool {
        self.title == draft.title && self.body == draft.body && self.user_id == draft.user_id
    }
}

/// Payload for creating a post. The server assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub user_id: u64,
}

/// Partial-update payload for a post. Absent fields are left untouched
/// by the server, so `None` fields are omitted from the request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl PostPatch {
    #[must_use]
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            body: None,
        }
    }

    #[must_use]
    pub fn body(body: impl Into<String>) -> Self {
        Self {
            title: None,
            body: Some(body.into()),
        }
    }
}

/// The subset of a user resource the suite asserts on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
}
