//! Route handlers organized by domain.

pub mod admin;
pub mod fallback;
pub mod health;
pub mod notification;
pub mod video;
