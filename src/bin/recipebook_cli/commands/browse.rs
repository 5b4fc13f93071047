// ABOUTME: Recipe discovery commands for recipebook-cli
// ABOUTME: Random, search and detail views driven through the browse coordinator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

use anyhow::{anyhow, Result};
use recipebook_server::constants::browse::DEFAULT_PAGE_SIZE;
use recipebook_server::models::SearchFilters;
use recipebook_server::services::{LoadOutcome, RecipeBrowser, RecipeDetailView};
use tracing::debug;

use super::CliContext;
use crate::helpers::display::{display_recipe, display_snapshot};

/// Show `count` random recipes, then `more` extra batches
pub async fn random(context: &CliContext, count: u32, more: u32) -> Result<()> {
    let browser = RecipeBrowser::new(context.provider.clone());
    let mut outcome = browser.load_random(count, false).await;
    for _ in 0..more {
        if outcome != LoadOutcome::Applied {
            break;
        }
        outcome = browser.load_more_random_default().await;
    }
    debug!(?outcome, "Random load finished");

    display_snapshot(&browser.snapshot().await);
    failed_as_error(outcome)
}

/// Search recipes and show one page
pub async fn search(
    context: &CliContext,
    query: &str,
    filters: &[String],
    page: u32,
    page_size: Option<u32>,
) -> Result<()> {
    let filters = parse_filters(filters)?;
    let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE);
    let browser = RecipeBrowser::new(context.provider.clone());

    let mut outcome = browser.search(query, filters, 1, page_size, true).await;
    if page > 1 && outcome == LoadOutcome::Applied {
        outcome = browser.go_to_page(page).await;
        if outcome == LoadOutcome::Skipped {
            let total = browser.snapshot().await.state.total_pages;
            return Err(anyhow!("Page {page} is out of range (1-{total})"));
        }
    }

    display_snapshot(&browser.snapshot().await);
    failed_as_error(outcome)
}

/// Show one recipe with nutrition, shopping list and steps
pub async fn show(context: &CliContext, recipe_id: u64) -> Result<()> {
    let view = RecipeDetailView::load(context.provider.as_ref(), recipe_id).await?;
    display_recipe(&view);
    Ok(())
}

fn failed_as_error(outcome: LoadOutcome) -> Result<()> {
    if outcome == LoadOutcome::Failed {
        return Err(anyhow!("Loading recipes failed"));
    }
    Ok(())
}

/// Parse repeated `key=value` flags; empty values are dropped
pub fn parse_filters(raw: &[String]) -> Result<SearchFilters> {
    let mut filters = SearchFilters::new();
    for entry in raw {
        let (key, value) = entry
            .split_once('=')
            .ok_or_else(|| anyhow!("Filter must look like key=value: {entry}"))?;
        let (key, value) = (key.trim(), value.trim());
        if key.is_empty() {
            return Err(anyhow!("Filter key is empty: {entry}"));
        }
        if !value.is_empty() {
            filters.insert(key.to_owned(), value.to_owned());
        }
    }
    Ok(filters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filters() {
        let raw = vec![
            "cuisine=italian".to_owned(),
            "diet= ".to_owned(),
            " maxReadyTime = 30".to_owned(),
        ];
        let filters = parse_filters(&raw).unwrap();
        assert_eq!(filters.len(), 2);
        assert_eq!(filters.get("cuisine").map(String::as_str), Some("italian"));
        assert_eq!(filters.get("maxReadyTime").map(String::as_str), Some("30"));
    }

    #[test]
    fn test_parse_filters_rejects_bad_entries() {
        assert!(parse_filters(&["cuisine".to_owned()]).is_err());
        assert!(parse_filters(&["=italian".to_owned()]).is_err());
    }
}
