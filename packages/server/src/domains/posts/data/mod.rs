pub mod post;

pub use post::{PostDetailData, PostPatchRequest, PostSummaryData, PostWriteRequest};
