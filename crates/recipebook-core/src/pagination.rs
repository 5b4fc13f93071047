// ABOUTME: Page arithmetic for page-indexed search results
// ABOUTME: Computes page counts, offsets and the numbered page window with ellipses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::constants::browse::MAX_VISIBLE_PAGES;

/// Number of pages needed for `total_results` at `page_size` per page
///
/// A zero page size yields zero pages.
#[must_use]
pub const fn total_pages(total_results: u32, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    total_results.div_ceil(page_size)
}

/// Offset of the first result on a 1-based `page`
#[must_use]
pub const fn page_offset(page: u32, page_size: u32) -> u32 {
    page.saturating_sub(1).saturating_mul(page_size)
}

/// Entry in a numbered page control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "page", rename_all = "snake_case")]
pub enum PageLink {
    /// Link to a specific 1-based page
    Page(u32),
    /// Gap between non-adjacent page numbers
    Ellipsis,
}

impl Display for PageLink {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(page) => write!(f, "{page}"),
            Self::Ellipsis => f.write_str("..."),
        }
    }
}

/// Numbered page window around `current` for `total` pages
///
/// Up to five pages are listed directly. Beyond that the first and last
/// pages are always shown, with the neighbours of `current` between them and
/// an ellipsis wherever numbers are skipped. Near either end the middle run
/// widens so the window keeps a constant size. No window is shown for a
/// single page.
#[must_use]
pub fn page_window(current: u32, total: u32) -> Vec<PageLink> {
    if total <= 1 {
        return Vec::new();
    }
    if total <= MAX_VISIBLE_PAGES {
        return (1..=total).map(PageLink::Page).collect();
    }

    let mut start = current.saturating_sub(1).max(2);
    let mut end = current.saturating_add(1).min(total - 1);
    if current <= 3 {
        end = (total - 1).min(4);
    }
    if current >= total - 2 {
        start = total.saturating_sub(3).max(2);
    }

    let mut links = Vec::with_capacity(MAX_VISIBLE_PAGES as usize + 2);
    links.push(PageLink::Page(1));
    if start > 2 {
        links.push(PageLink::Ellipsis);
    }
    links.extend((start..=end).map(PageLink::Page));
    if end < total - 1 {
        links.push(PageLink::Ellipsis);
    }
    links.push(PageLink::Page(total));
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(links: &[PageLink]) -> String {
        links
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(130, 12), 11);
        assert_eq!(total_pages(120, 12), 10);
        assert_eq!(total_pages(1, 12), 1);
        assert_eq!(total_pages(0, 12), 0);
        assert_eq!(total_pages(10, 0), 0);
    }

    #[test]
    fn test_page_offset() {
        assert_eq!(page_offset(1, 12), 0);
        assert_eq!(page_offset(3, 12), 24);
        assert_eq!(page_offset(0, 12), 0);
    }

    #[test]
    fn test_no_window_for_single_page() {
        assert!(page_window(1, 0).is_empty());
        assert!(page_window(1, 1).is_empty());
    }

    #[test]
    fn test_small_totals_list_every_page() {
        assert_eq!(render(&page_window(2, 5)), "1 2 3 4 5");
        assert_eq!(render(&page_window(1, 2)), "1 2");
    }

    #[test]
    fn test_window_near_start() {
        assert_eq!(render(&page_window(1, 10)), "1 2 3 4 ... 10");
        assert_eq!(render(&page_window(3, 10)), "1 2 3 4 ... 10");
    }

    #[test]
    fn test_window_in_middle() {
        assert_eq!(render(&page_window(5, 10)), "1 ... 4 5 6 ... 10");
    }

    #[test]
    fn test_window_near_end() {
        assert_eq!(render(&page_window(9, 10)), "1 ... 7 8 9 10");
        assert_eq!(render(&page_window(10, 10)), "1 ... 7 8 9 10");
    }

    #[test]
    fn test_window_for_six_pages() {
        assert_eq!(render(&page_window(3, 6)), "1 2 3 4 ... 6");
        assert_eq!(render(&page_window(4, 6)), "1 ... 3 4 5 6");
    }
}
