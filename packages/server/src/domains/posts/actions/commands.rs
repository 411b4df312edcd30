//! Post command actions
//!
//! One function per write use case. The storage handle is passed in
//! explicitly; there is no shared state between requests.

use anyhow::Result;
use sqlx::PgPool;
use tracing::info;

use crate::domains::posts::data::{PostDetailData, PostPatchRequest, PostWriteRequest};
use crate::domains::posts::models::Post;

/// Create a post and return its storage-assigned number.
pub async fn create_post(request: PostWriteRequest, pool: &PgPool) -> Result<i32> {
    let created = Post::create(&request.title, &request.content, pool).await?;
    info!(no = created.no, "Post created");
    Ok(created.no)
}

/// Apply a partial update, then re-read the stored row.
///
/// The reread is not started until the update resolves, so the detail
/// reflects whatever the merge left in place. A missing row makes the
/// update a 0-count no-op and the reread returns `None`; "absent" and
/// "found but unchanged" are not distinguished beyond that.
pub async fn patch_post_detail(
    no: i32,
    request: PostPatchRequest,
    pool: &PgPool,
) -> Result<Option<PostDetailData>> {
    let updated = Post::update(no, request.title.as_deref(), request.content.as_deref(), pool)
        .await?;
    if updated == 0 {
        info!(no, "Patch matched no row");
    }

    let post = Post::find_by_no(no, pool).await?;
    Ok(post.map(PostDetailData::from))
}

/// Delete by number; returns the affected-row count (0 or 1).
///
/// Deleting a post that is already gone is not an error.
pub async fn delete_post(no: i32, pool: &PgPool) -> Result<u64> {
    Post::delete_by_no(no, pool).await
}
