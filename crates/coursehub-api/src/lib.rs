//! # coursehub-api
//!
//! HTTP API layer for CourseHub built on Axum.
//!
//! Provides the REST endpoints for videos and notification counts, the
//! middleware stack (CORS, logging, panic recovery, error detail), request
//! extractors, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use state::AppState;
