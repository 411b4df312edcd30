// Common types and utilities shared across the application

pub mod error;
pub mod pagination;
pub mod response;

pub use error::AppError;
pub use pagination::{NormalizedPage, PageArgs};
pub use response::{JsonResponse, ResponseCode};
