//! Custom Axum extractors.

pub mod json;
pub mod pagination;
pub mod path;
pub mod query;

pub use json::ApiJson;
pub use pagination::VideoListParams;
pub use path::parse_video_id;
pub use query::ApiQuery;
