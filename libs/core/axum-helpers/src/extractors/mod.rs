//! Custom extractors for Axum handlers.
//!
//! Both extractors reject with [`AppError`](crate::AppError) so failures share
//! the standard JSON error body.

pub mod object_id_path;
pub mod validated_json;

pub use object_id_path::ObjectIdPath;
pub use validated_json::ValidatedJson;
