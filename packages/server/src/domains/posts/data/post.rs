use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domains::posts::models::Post;

/// Body of `POST /post`. A client-supplied `no` is accepted and ignored;
/// storage assigns the real one.
#[derive(Debug, Clone, Deserialize)]
pub struct PostWriteRequest {
    #[serde(default)]
    pub no: Option<i32>,
    pub title: String,
    pub content: String,
}

/// Body of `PATCH /post/{no}`.
///
/// An absent field is the "leave unchanged" marker; it is never coerced to
/// an empty string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostPatchRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// List item shape; omits `content` to keep pages small.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummaryData {
    pub no: i32,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

impl From<Post> for PostSummaryData {
    fn from(post: Post) -> Self {
        Self {
            no: post.no,
            title: post.title,
            created_at: post.created_at,
        }
    }
}

/// Full detail shape returned by point lookups and patches.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetailData {
    pub no: i32,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<Post> for PostDetailData {
    fn from(post: Post) -> Self {
        Self {
            no: post.no,
            title: post.title,
            content: post.content,
            created_at: post.created_at,
        }
    }
}
