//! Post query actions

use anyhow::Result;
use sqlx::PgPool;

use crate::common::PageArgs;
use crate::domains::posts::data::{PostDetailData, PostSummaryData};
use crate::domains::posts::models::Post;

/// List one page of posts, newest first.
///
/// The sentinel cursor `0` is rewritten to the maximum representable
/// cursor here, so a first-page request starts from the newest row.
pub async fn retrieve_posts(args: PageArgs, pool: &PgPool) -> Result<Vec<PostSummaryData>> {
    let page = args.normalize();

    let posts = Post::find_by_cursor(page, pool).await?;
    Ok(posts.into_iter().map(PostSummaryData::from).collect())
}

/// Point lookup; `None` when the post does not exist.
pub async fn retrieve_post_detail(no: i32, pool: &PgPool) -> Result<Option<PostDetailData>> {
    let post = Post::find_by_no(no, pool).await?;
    Ok(post.map(PostDetailData::from))
}
