//! Video domain entities.

pub mod filter;
pub mod kind;
pub mod model;
pub mod rules;

pub use filter::VideoFilter;
pub use kind::VideoType;
pub use model::{CreateVideo, Video, VideoChanges, VideoFields};
