//! Test fixtures

use server_core::domains::posts::models::Post;
use sqlx::PgPool;

/// Insert `count` posts titled `title{i}` with content `content{i}`,
/// returned in insertion order (ascending `no`).
pub async fn seed_posts(count: usize, pool: &PgPool) -> Vec<Post> {
    let mut posts = Vec::with_capacity(count);
    for i in 1..=count {
        let post = Post::create(&format!("title{}", i), &format!("content{}", i), pool)
            .await
            .expect("Failed to seed post");
        posts.push(post);
    }
    posts
}
