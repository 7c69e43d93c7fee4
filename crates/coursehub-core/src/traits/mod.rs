//! Trait seams implemented by the infrastructure crates.

pub mod storage;

pub use storage::StorageProvider;
