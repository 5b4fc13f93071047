// ABOUTME: Integration tests for the recipe browse coordinator
// ABOUTME: Covers random loading, search paging, failure handling, stale responses and reset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::sync::Arc;

use recipebook_server::{
    constants::messages::PROVIDER_QUOTA_EXCEEDED,
    errors::ProviderError,
    external::MockRecipeProvider,
    models::SearchFilters,
    pagination::PageLink,
    services::{BrowseMode, LoadOutcome, RecipeBrowser},
};
use tokio::task;

fn browser_over(provider: &Arc<MockRecipeProvider>) -> Arc<RecipeBrowser> {
    common::init_test_logging();
    Arc::new(RecipeBrowser::new(provider.clone()))
}

fn quota_error() -> ProviderError {
    ProviderError::QuotaExceeded {
        provider: "Mock".into(),
        status: 402,
    }
}

#[tokio::test]
async fn test_random_then_load_more_appends() {
    let provider = Arc::new(MockRecipeProvider::with_generated(40));
    let browser = browser_over(&provider);

    assert_eq!(browser.load_random(6, false).await, LoadOutcome::Applied);
    let first = browser.snapshot().await;
    assert_eq!(first.recipes.len(), 6);
    assert_eq!(first.state.mode, BrowseMode::Random);

    assert_eq!(browser.load_more_random(6).await, LoadOutcome::Applied);
    let second = browser.snapshot().await;
    assert_eq!(second.recipes.len(), 12);
    assert_eq!(&second.recipes[..6], &first.recipes[..]);
    assert!(second.state.page_window().is_empty());
}

#[tokio::test]
async fn test_random_replace_after_search_resets_state() {
    let provider = Arc::new(MockRecipeProvider::with_generated(130));
    let browser = browser_over(&provider);
    let mut filters = SearchFilters::new();
    filters.insert("cuisine".into(), "italian".into());

    browser.search("recipe", filters, 1, 10, true).await;
    assert_eq!(browser.go_to_page(3).await, LoadOutcome::Applied);

    assert_eq!(browser.load_random(6, false).await, LoadOutcome::Applied);
    let snapshot = browser.snapshot().await;
    assert_eq!(snapshot.recipes.len(), 6);
    assert_eq!(snapshot.state.mode, BrowseMode::Random);
    assert_eq!(snapshot.state.page, 1);
    assert_eq!(snapshot.state.page_size, 12);
    assert_eq!(snapshot.state.total_results, 0);
    assert_eq!(snapshot.state.total_pages, 0);
    assert!(snapshot.state.query.is_empty());
    assert!(snapshot.state.filters.is_empty());
}

#[tokio::test]
async fn test_failed_random_load_keeps_results() {
    let provider = Arc::new(MockRecipeProvider::with_generated(40));
    let browser = browser_over(&provider);
    browser.load_random(6, false).await;
    let before = browser.snapshot().await;

    provider.set_failure(Some(quota_error())).await;
    assert_eq!(browser.load_more_random(12).await, LoadOutcome::Failed);
    let after = browser.snapshot().await;
    assert_eq!(after.recipes, before.recipes);
    assert_eq!(after.state, before.state);
    assert_eq!(after.error.as_deref(), Some(PROVIDER_QUOTA_EXCEEDED));

    assert_eq!(browser.load_random(6, false).await, LoadOutcome::Failed);
    assert_eq!(browser.snapshot().await.recipes, before.recipes);
}

#[tokio::test]
async fn test_search_page_append_and_replace() {
    let provider = Arc::new(MockRecipeProvider::with_generated(50));
    let browser = browser_over(&provider);

    browser
        .search("recipe", SearchFilters::new(), 1, 10, true)
        .await;
    browser
        .search("recipe", SearchFilters::new(), 3, 10, false)
        .await;
    let appended = browser.snapshot().await;
    assert_eq!(appended.recipes.len(), 20);
    assert_eq!(appended.recipes[10].id, 21);
    assert_eq!(appended.state.page, 3);

    browser
        .search("recipe", SearchFilters::new(), 2, 10, true)
        .await;
    let replaced = browser.snapshot().await;
    assert_eq!(replaced.recipes.len(), 10);
    assert_eq!(replaced.recipes[0].id, 11);
    assert_eq!(replaced.state.page, 2);
    assert_eq!(replaced.state.total_pages, 5);
}

#[tokio::test]
async fn test_query_is_recorded_as_given() {
    let provider = Arc::new(MockRecipeProvider::with_generated(10));
    let browser = browser_over(&provider);

    browser
        .search(" recipe ", SearchFilters::new(), 1, 12, true)
        .await;
    assert_eq!(browser.snapshot().await.state.query, " recipe ");
}

#[tokio::test]
async fn test_load_more_random_requires_random_mode() {
    let provider = Arc::new(MockRecipeProvider::with_generated(40));
    let browser = browser_over(&provider);

    assert_eq!(browser.load_more_random(12).await, LoadOutcome::Skipped);
    browser
        .search("Recipe", SearchFilters::new(), 1, 12, true)
        .await;
    assert_eq!(browser.load_more_random(12).await, LoadOutcome::Skipped);
}

#[tokio::test]
async fn test_search_pagination() {
    let provider = Arc::new(MockRecipeProvider::with_generated(130));
    let browser = browser_over(&provider);

    let outcome = browser
        .search("recipe", SearchFilters::new(), 1, 12, true)
        .await;
    assert_eq!(outcome, LoadOutcome::Applied);
    let snapshot = browser.snapshot().await;
    assert_eq!(snapshot.state.total_results, 130);
    assert_eq!(snapshot.state.total_pages, 11);
    assert_eq!(snapshot.recipes.len(), 12);
    assert_eq!(
        snapshot.state.page_window(),
        vec![
            PageLink::Page(1),
            PageLink::Page(2),
            PageLink::Page(3),
            PageLink::Page(4),
            PageLink::Ellipsis,
            PageLink::Page(11),
        ]
    );

    assert_eq!(browser.go_to_page(12).await, LoadOutcome::Skipped);
    assert_eq!(browser.go_to_page(0).await, LoadOutcome::Skipped);
    assert_eq!(browser.go_to_page(1).await, LoadOutcome::Skipped);

    assert_eq!(browser.go_to_page(11).await, LoadOutcome::Applied);
    let last = browser.snapshot().await;
    assert_eq!(last.state.page, 11);
    assert_eq!(last.recipes.len(), 10);
    assert!(!last.state.has_next_page());
    assert_eq!(browser.load_more().await, LoadOutcome::Skipped);

    let offsets: Vec<u32> = provider
        .recorded_searches()
        .await
        .iter()
        .map(|request| request.offset)
        .collect();
    assert_eq!(offsets, vec![0, 120]);
}

#[tokio::test]
async fn test_load_more_appends_next_page() {
    let provider = Arc::new(MockRecipeProvider::with_generated(30));
    let browser = browser_over(&provider);

    browser
        .search("recipe", SearchFilters::new(), 1, 12, true)
        .await;
    assert_eq!(browser.load_more().await, LoadOutcome::Applied);
    let snapshot = browser.snapshot().await;
    assert_eq!(snapshot.recipes.len(), 24);
    assert_eq!(snapshot.state.page, 2);
    assert_eq!(snapshot.recipes[12].id, 13);
}

#[tokio::test]
async fn test_failure_keeps_previous_results() {
    let provider = Arc::new(MockRecipeProvider::with_generated(130));
    let browser = browser_over(&provider);
    browser
        .search("recipe", SearchFilters::new(), 1, 12, true)
        .await;
    let before = browser.snapshot().await;

    provider.set_failure(Some(quota_error())).await;
    assert_eq!(browser.go_to_page(2).await, LoadOutcome::Failed);

    let after = browser.snapshot().await;
    assert_eq!(after.recipes, before.recipes);
    assert_eq!(after.state, before.state);
    assert!(!after.loading);
    assert_eq!(after.error.as_deref(), Some(PROVIDER_QUOTA_EXCEEDED));
    assert!(!after.is_empty_result());

    browser.dismiss_error().await;
    assert_eq!(browser.snapshot().await.error, None);
}

#[tokio::test]
async fn test_stale_response_is_discarded() {
    let provider = Arc::new(MockRecipeProvider::with_generated(130));
    let browser = browser_over(&provider);
    let gate = provider.hold_query("recipe 1").await;

    let slow = {
        let browser = Arc::clone(&browser);
        task::spawn(async move {
            browser
                .search("recipe 1", SearchFilters::new(), 1, 12, true)
                .await
        })
    };
    while provider.recorded_searches().await.is_empty() {
        task::yield_now().await;
    }
    assert!(browser.is_loading().await);

    let fast = browser
        .search("recipe 2", SearchFilters::new(), 1, 12, true)
        .await;
    assert_eq!(fast, LoadOutcome::Applied);

    gate.notify_one();
    assert_eq!(slow.await.unwrap(), LoadOutcome::Stale);

    let snapshot = browser.snapshot().await;
    assert_eq!(snapshot.state.query, "recipe 2");
    assert!(snapshot
        .recipes
        .iter()
        .all(|recipe| recipe.title.contains("Recipe 2")));
    assert!(!snapshot.loading);
}

#[tokio::test]
async fn test_reset_returns_to_idle() {
    let provider = Arc::new(MockRecipeProvider::with_generated(50));
    let browser = browser_over(&provider);
    let mut filters = SearchFilters::new();
    filters.insert("cuisine".into(), "italian".into());
    browser.search("recipe", filters, 1, 12, true).await;

    let calls = provider.call_count();
    browser.reset().await;
    assert_eq!(provider.call_count(), calls);

    let snapshot = browser.snapshot().await;
    assert_eq!(snapshot.state.mode, BrowseMode::Idle);
    assert!(snapshot.state.query.is_empty());
    assert!(snapshot.state.filters.is_empty());
    assert_eq!(snapshot.state.page, 1);
    assert_eq!(browser.go_to_page(2).await, LoadOutcome::Skipped);
    assert_eq!(browser.load_more().await, LoadOutcome::Skipped);
}

#[tokio::test]
async fn test_empty_search_result() {
    let provider = Arc::new(MockRecipeProvider::with_generated(10));
    let browser = browser_over(&provider);

    assert!(!browser.snapshot().await.is_empty_result());
    browser
        .search("no such dish", SearchFilters::new(), 1, 12, true)
        .await;
    let snapshot = browser.snapshot().await;
    assert!(snapshot.is_empty_result());
    assert_eq!(snapshot.state.total_pages, 0);
}
