//! # coursehub-entity
//!
//! Domain entity models for CourseHub. Every struct in this crate
//! represents a database table row or a domain value object. Database
//! entities additionally derive `sqlx::FromRow`.

pub mod notification;
pub mod video;
