//! # coursehub-admin
//!
//! The admin side of CourseHub: an immutable [`VideoQuery`], the
//! [`VideoBrowser`] that keeps only the newest listing, the pager, upload
//! and edit forms, and the [`AdminConsole`] that drives a [`VideoApi`].
//! [`HttpVideoApi`] talks to a running `coursehub-server`.

pub mod api;
pub mod browser;
pub mod client;
pub mod console;
pub mod form;
pub mod pager;
pub mod query;

pub use api::{CountsPayload, UploadRequest, VideoApi, VideoPage};
pub use browser::{FetchTicket, VideoBrowser};
pub use client::HttpVideoApi;
pub use console::{AdminConsole, Notice, NoticeKind};
pub use form::{EditForm, SelectedFile, UploadForm};
pub use pager::{Pager, PagerItem};
pub use query::VideoQuery;
