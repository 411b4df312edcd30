pub mod actions;
pub mod data;
pub mod models;

// Re-export data types (wire shapes)
pub use data::post::{PostDetailData, PostPatchRequest, PostSummaryData, PostWriteRequest};

// Re-export models (domain models)
pub use models::post::Post;
