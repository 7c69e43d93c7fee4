//! Notification badge counters.

pub mod service;

pub use service::NotificationCountService;
