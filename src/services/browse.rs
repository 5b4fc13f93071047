// ABOUTME: Recipe query coordinator for random discovery and paginated search
// ABOUTME: Owns result list and search state, sequencing loads so stale responses are dropped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

//! # Recipe Query Coordinator
//!
//! [`RecipeBrowser`] holds the result list and [`SearchState`] for one browsing
//! session and wraps every provider call the views make. It runs in one of two
//! modes:
//!
//! - **Random discovery**: arbitrary recipes, appended on "load more", no totals
//! - **Search**: query-matched recipes, page-indexed with a known total
//!
//! Every load takes a ticket. Only the response carrying the newest ticket is
//! applied; older responses are discarded whole, results and errors alike. A
//! failed load records a display message and leaves results and state as they
//! were. The session lock is never held across a provider call.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::constants::browse::{DEFAULT_LOAD_MORE_RANDOM_COUNT, DEFAULT_PAGE_SIZE};
use crate::errors::AppError;
use crate::external::{ProviderResult, RecipeProvider, SearchRequest};
use crate::models::{RecipeSummary, SearchFilters};
use crate::pagination::{page_offset, page_window, total_pages, PageLink};

/// Browsing mode of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BrowseMode {
    /// Nothing loaded since creation or the last reset
    #[default]
    Idle,
    /// Random discovery with append-style loading
    Random,
    /// Query-matched, page-indexed results
    Search,
}

/// Query, filters and pagination of the current result list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchState {
    /// Active query
    pub query: String,
    /// Active filters
    pub filters: SearchFilters,
    /// Current 1-based page
    pub page: u32,
    /// Results per page
    pub page_size: u32,
    /// Total matches reported by the provider
    pub total_results: u32,
    /// Page count for `total_results` at `page_size`
    pub total_pages: u32,
    /// Browsing mode
    pub mode: BrowseMode,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            filters: SearchFilters::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total_results: 0,
            total_pages: 0,
            mode: BrowseMode::Idle,
        }
    }
}

impl SearchState {
    /// Whether a further search page exists
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.mode == BrowseMode::Search && self.page < self.total_pages
    }

    /// Numbered page control for the current position
    #[must_use]
    pub fn page_window(&self) -> Vec<PageLink> {
        if self.mode == BrowseMode::Search {
            page_window(self.page, self.total_pages)
        } else {
            Vec::new()
        }
    }
}

/// Read-only copy of a browsing session for rendering
#[derive(Debug, Clone, Serialize)]
pub struct BrowseSnapshot {
    /// Results in display order
    pub recipes: Vec<RecipeSummary>,
    /// Query and pagination state
    pub state: SearchState,
    /// Whether a load is in flight
    pub loading: bool,
    /// Dismissible message from the last failed load
    pub error: Option<String>,
}

impl BrowseSnapshot {
    /// Loaded, not loading, no error, and nothing matched
    #[must_use]
    pub fn is_empty_result(&self) -> bool {
        self.state.mode != BrowseMode::Idle
            && !self.loading
            && self.error.is_none()
            && self.recipes.is_empty()
    }
}

/// What happened to a load request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Response applied to the session
    Applied,
    /// Provider failed; error message recorded, results untouched
    Failed,
    /// A newer load started first; response dropped
    Stale,
    /// Preconditions not met; no request made
    Skipped,
}

#[derive(Debug, Default)]
struct BrowseSession {
    recipes: Vec<RecipeSummary>,
    state: SearchState,
    latest_ticket: u64,
    in_flight: Option<u64>,
    error: Option<String>,
}

/// Recipe query coordinator for one browsing session
pub struct RecipeBrowser {
    provider: Arc<dyn RecipeProvider>,
    session: Mutex<BrowseSession>,
}

impl RecipeBrowser {
    /// Create an idle session over `provider`
    #[must_use]
    pub fn new(provider: Arc<dyn RecipeProvider>) -> Self {
        Self {
            provider,
            session: Mutex::new(BrowseSession::default()),
        }
    }

    /// Load `count` random recipes, replacing or appending to the results
    ///
    /// Replacing returns query, filters and pagination (page size included)
    /// to their initial values. Appending keeps every existing result in place.
    pub async fn load_random(&self, count: u32, append: bool) -> LoadOutcome {
        let ticket = self.begin().await;
        let result = self.provider.random_recipes(count).await;

        self.finish(ticket, result, |session, recipes| {
            if append {
                session.recipes.extend(recipes);
            } else {
                session.recipes = recipes;
                session.state = SearchState::default();
            }
            session.state.mode = BrowseMode::Random;
        })
        .await
    }

    /// Append `count` more random recipes while in random mode
    pub async fn load_more_random(&self, count: u32) -> LoadOutcome {
        {
            let session = self.session.lock().await;
            if session.state.mode != BrowseMode::Random || session.in_flight.is_some() {
                return LoadOutcome::Skipped;
            }
        }
        self.load_random(count, true).await
    }

    /// Append the default batch of random recipes
    pub async fn load_more_random_default(&self) -> LoadOutcome {
        self.load_more_random(DEFAULT_LOAD_MORE_RANDOM_COUNT).await
    }

    /// Search `query` with `filters`, fetching one page of `page_size` results
    ///
    /// Results replace the list when `reset` is set or `page` is 1 and are
    /// appended otherwise. On success the query, filters, page and totals are
    /// recorded and the session enters search mode.
    pub async fn search(
        &self,
        query: &str,
        filters: SearchFilters,
        page: u32,
        page_size: u32,
        reset: bool,
    ) -> LoadOutcome {
        let page = page.max(1);
        let page_size = if page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size
        };
        let request = SearchRequest {
            query: query.to_owned(),
            filters,
            number: page_size,
            offset: page_offset(page, page_size),
        };

        let ticket = self.begin().await;
        let result = self.provider.search(&request).await;

        self.finish(ticket, result, move |session, results| {
            if reset || page == 1 {
                session.recipes = results.results;
            } else {
                session.recipes.extend(results.results);
            }
            session.state = SearchState {
                query: request.query,
                filters: request.filters,
                page,
                page_size,
                total_results: results.total_results,
                total_pages: total_pages(results.total_results, page_size),
                mode: BrowseMode::Search,
            };
        })
        .await
    }

    /// Jump to `page` of the active search
    ///
    /// Skipped outside search mode, while a load is in flight, for the current
    /// page, or for a page outside `1..=total_pages`.
    pub async fn go_to_page(&self, page: u32) -> LoadOutcome {
        let state = {
            let session = self.session.lock().await;
            let state = &session.state;
            let in_range = (1..=state.total_pages).contains(&page);
            if !in_range
                || page == state.page
                || state.mode != BrowseMode::Search
                || session.in_flight.is_some()
            {
                return LoadOutcome::Skipped;
            }
            state.clone()
        };
        self.search(&state.query, state.filters, page, state.page_size, true)
            .await
    }

    /// Append the next page of the active search
    ///
    /// Skipped outside search mode, on the last page, or while loading.
    pub async fn load_more(&self) -> LoadOutcome {
        let state = {
            let session = self.session.lock().await;
            if !session.state.has_next_page() || session.in_flight.is_some() {
                return LoadOutcome::Skipped;
            }
            session.state.clone()
        };
        self.search(
            &state.query,
            state.filters,
            state.page + 1,
            state.page_size,
            false,
        )
        .await
    }

    /// Clear query, filters, pagination and mode without a provider call
    ///
    /// Loads still in flight become stale and their responses are dropped.
    pub async fn reset(&self) {
        let mut session = self.session.lock().await;
        session.state = SearchState::default();
        session.latest_ticket += 1;
        session.in_flight = None;
        session.error = None;
    }

    /// Clear the error message
    pub async fn dismiss_error(&self) {
        self.session.lock().await.error = None;
    }

    /// Copy of the current session
    pub async fn snapshot(&self) -> BrowseSnapshot {
        let session = self.session.lock().await;
        BrowseSnapshot {
            recipes: session.recipes.clone(),
            state: session.state.clone(),
            loading: session.in_flight.is_some(),
            error: session.error.clone(),
        }
    }

    /// Whether a load is in flight
    pub async fn is_loading(&self) -> bool {
        self.session.lock().await.in_flight.is_some()
    }

    async fn begin(&self) -> u64 {
        let mut session = self.session.lock().await;
        session.latest_ticket += 1;
        session.in_flight = Some(session.latest_ticket);
        session.error = None;
        session.latest_ticket
    }

    async fn finish<T>(
        &self,
        ticket: u64,
        result: ProviderResult<T>,
        apply: impl FnOnce(&mut BrowseSession, T),
    ) -> LoadOutcome {
        let mut session = self.session.lock().await;
        if session.latest_ticket != ticket {
            debug!(
                ticket,
                latest = session.latest_ticket,
                "Discarding stale provider response"
            );
            return LoadOutcome::Stale;
        }
        session.in_flight = None;

        match result {
            Ok(value) => {
                apply(&mut session, value);
                LoadOutcome::Applied
            }
            Err(error) => {
                warn!(provider = self.provider.name(), error = %error, "Recipe load failed");
                session.error = Some(AppError::from(error).message);
                LoadOutcome::Failed
            }
        }
    }
}
