//! # coursehub-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for CourseHub entities.
//!
//! With the `mock` feature enabled, [`repositories::mock`] provides
//! in-memory stores implementing the same traits.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
