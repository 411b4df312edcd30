pub mod commands;
pub mod queries;

pub use commands::{create_post, delete_post, patch_post_detail};
pub use queries::{retrieve_post_detail, retrieve_posts};
