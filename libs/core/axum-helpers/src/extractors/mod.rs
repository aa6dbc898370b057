//! Custom extractors for Axum handlers.
//!
//! Rejections are reported as [`AppError`](crate::errors::AppError) so that
//! malformed input produces the same error body as every other failure.

pub mod id_path;
pub mod json_body;
pub mod validated_json;

pub use id_path::IdPath;
pub use json_body::JsonBody;
pub use validated_json::ValidatedJson;
