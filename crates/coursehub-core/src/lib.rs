//! # coursehub-core
//!
//! Core crate for CourseHub. Contains the configuration schemas, the
//! storage provider trait, pagination types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other CourseHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
