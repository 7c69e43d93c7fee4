//! Listing state with a stale-response guard.

use tracing::{debug, warn};

use coursehub_core::result::AppResult;

use crate::api::VideoPage;
use crate::pager::Pager;
use crate::query::VideoQuery;

/// Shown when a listing fetch fails.
pub const LOAD_FAILED: &str = "Failed to load videos. Please try again later.";

/// Identifies one issued fetch. Only the most recent ticket is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

/// The listing the console shows.
#[derive(Debug, Clone, Default)]
pub struct VideoBrowser {
    query: VideoQuery,
    listing: Option<VideoPage>,
    latest: u64,
    loading: bool,
    error: Option<String>,
}

impl VideoBrowser {
    /// Empty browser on page 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current query.
    pub fn query(&self) -> &VideoQuery {
        &self.query
    }

    /// Last accepted page, if any.
    pub fn listing(&self) -> Option<&VideoPage> {
        self.listing.as_ref()
    }

    /// Whether a fetch is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Error from the last fetch.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Switch to `query` and issue a ticket for fetching it. Any ticket
    /// issued before this one becomes stale.
    pub fn begin(&mut self, query: VideoQuery) -> FetchTicket {
        self.query = query;
        self.latest += 1;
        self.loading = true;
        self.error = None;
        FetchTicket(self.latest)
    }

    /// Re-issue the current query.
    pub fn reload(&mut self) -> FetchTicket {
        self.begin(self.query.clone())
    }

    /// Record the outcome of a fetch. Returns `false` when the ticket is
    /// stale and the outcome was dropped.
    pub fn accept(&mut self, ticket: FetchTicket, outcome: AppResult<VideoPage>) -> bool {
        if ticket.0 != self.latest {
            debug!(ticket = ticket.0, latest = self.latest, "Dropping stale listing");
            return false;
        }
        self.loading = false;
        match outcome {
            Ok(page) => {
                self.listing = Some(page);
                self.error = None;
            }
            Err(e) => {
                warn!(error = %e, "Failed to load videos");
                self.error = Some(LOAD_FAILED.to_string());
            }
        }
        true
    }

    /// Pages in the last accepted listing, derived from its total count.
    pub fn total_pages(&self) -> u64 {
        self.listing
            .as_ref()
            .map(|page| page.total_count.div_ceil(self.query.page_size().max(1)))
            .unwrap_or(0)
    }

    /// `page` clamped to `[1, total_pages]`.
    pub fn clamp_page(&self, page: u64) -> u64 {
        page.clamp(1, self.total_pages().max(1))
    }

    /// The query for `page`, clamped.
    pub fn go_to(&self, page: u64) -> VideoQuery {
        self.query.with_page(self.clamp_page(page))
    }

    /// Pager controls for the current listing.
    pub fn pager(&self) -> Pager {
        Pager::build(self.query.page(), self.total_pages())
    }
}
