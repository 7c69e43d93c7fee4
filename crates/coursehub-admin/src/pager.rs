//! Pagination controls.

use std::fmt;

/// Most numbered pages shown at once.
pub const MAX_VISIBLE_PAGES: u64 = 5;

/// One control in the pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerItem {
    /// Go one page back; disabled on the first page.
    Previous { target: u64, enabled: bool },
    /// A numbered page.
    Page { number: u64, current: bool },
    /// Hidden pages.
    Ellipsis,
    /// Go one page forward; disabled on the last page.
    Next { target: u64, enabled: bool },
}

/// The pager for one listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pager {
    items: Vec<PagerItem>,
}

impl Pager {
    /// Build the controls for `current` out of `total_pages`.
    ///
    /// Up to [`MAX_VISIBLE_PAGES`] pages are shown around the current one,
    /// with shortcuts to the first and last page when they fall outside
    /// that window. Nothing is shown for a single page.
    pub fn build(current: u64, total_pages: u64) -> Self {
        if total_pages <= 1 {
            return Self::default();
        }
        let current = current.clamp(1, total_pages);

        let mut start = current.saturating_sub(MAX_VISIBLE_PAGES / 2).max(1);
        let end = (start + MAX_VISIBLE_PAGES - 1).min(total_pages);
        if end - start + 1 < MAX_VISIBLE_PAGES {
            start = (end + 1).saturating_sub(MAX_VISIBLE_PAGES).max(1);
        }

        let mut items = vec![PagerItem::Previous {
            target: current.saturating_sub(1).max(1),
            enabled: current > 1,
        }];

        if start > 1 {
            items.push(PagerItem::Page {
                number: 1,
                current: false,
            });
            if start > 2 {
                items.push(PagerItem::Ellipsis);
            }
        }

        items.extend((start..=end).map(|number| PagerItem::Page {
            number,
            current: number == current,
        }));

        if end < total_pages {
            if end < total_pages - 1 {
                items.push(PagerItem::Ellipsis);
            }
            items.push(PagerItem::Page {
                number: total_pages,
                current: false,
            });
        }

        items.push(PagerItem::Next {
            target: (current + 1).min(total_pages),
            enabled: current < total_pages,
        });

        Self { items }
    }

    /// The controls, left to right.
    pub fn items(&self) -> &[PagerItem] {
        &self.items
    }

    /// Whether there is nothing to render.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Numbered pages shown, in order.
    pub fn page_numbers(&self) -> Vec<u64> {
        self.items
            .iter()
            .filter_map(|item| match item {
                PagerItem::Page { number, .. } => Some(*number),
                _ => None,
            })
            .collect()
    }
}

impl fmt::Display for Pager {
    /// Renders e.g. `< 1 ... 4 [5] 6 ... 10 >`, with disabled arrows as `-`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .items
            .iter()
            .map(|item| match item {
                PagerItem::Previous { enabled: true, .. } => "<".to_string(),
                PagerItem::Next { enabled: true, .. } => ">".to_string(),
                PagerItem::Previous { .. } | PagerItem::Next { .. } => "-".to_string(),
                PagerItem::Page {
                    number,
                    current: true,
                } => format!("[{number}]"),
                PagerItem::Page { number, .. } => number.to_string(),
                PagerItem::Ellipsis => "...".to_string(),
            })
            .collect();
        write!(f, "{}", parts.join(" "))
    }
}
