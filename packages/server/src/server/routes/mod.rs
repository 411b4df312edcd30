pub mod health;
pub mod post;

pub use health::health_handler;
pub use post::{
    create_post_handler, delete_post_handler, patch_post_handler, retrieve_post_detail_handler,
    retrieve_posts_handler,
};
