use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque token for the state of a comment thread.
///
/// Forwarded verbatim on the next list call; the client never interprets
/// or compares version values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Version(String);

impl Version {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The changes of a comment thread since a version.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentsDto {
    pub created_comments: Vec<CommentDto>,
    pub updated_comments: Vec<CommentDto>,
    pub deleted_comments: Vec<String>,
    pub version: Version,
}

impl CommentsDto {
    /// The empty delta of a thread that has not moved past `version`.
    pub(crate) fn unchanged(version: Version) -> Self {
        Self {
            created_comments: Vec::new(),
            updated_comments: Vec::new(),
            deleted_comments: Vec::new(),
            version,
        }
    }
}

/// One comment of a thread. Comments are immutable value objects on the
/// client; created and updated ones come back from the server.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentDto {
    pub id: String,
    #[serde(rename = "time")]
    pub created_at: DateTime<Utc>,
    pub text: String,
    #[serde(rename = "user")]
    pub author_id: String,
}
