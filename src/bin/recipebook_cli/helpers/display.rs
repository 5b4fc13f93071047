// ABOUTME: Output formatting helpers for recipebook-cli
// ABOUTME: Renders recipe lists, recipe details, saved recipes and reviews as plain text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

use recipebook_server::models::{Review, SavedRecipe, UserInfo};
use recipebook_server::pagination::PageLink;
use recipebook_server::services::{BrowseMode, BrowseSnapshot, RecipeDetailView};

/// Render a browse session: results, pagination line and any error
pub fn display_snapshot(snapshot: &BrowseSnapshot) {
    if let Some(error) = &snapshot.error {
        println!("Error: {error}");
    }
    if snapshot.is_empty_result() {
        println!("No recipes found.");
        return;
    }

    for recipe in &snapshot.recipes {
        println!(
            "{:>8}  {}  ({} min, score {:.0})",
            recipe.id,
            recipe.title,
            recipe.ready_minutes(),
            recipe.score_value()
        );
    }

    let state = &snapshot.state;
    if state.mode == BrowseMode::Search && state.total_pages > 0 {
        let window = state
            .page_window()
            .iter()
            .map(|link| match link {
                PageLink::Page(page) if *page == state.page => format!("[{page}]"),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ");
        println!(
            "\nPage {} of {} ({} results)  {window}",
            state.page, state.total_pages, state.total_results
        );
    }
}

/// Render a recipe detail view
pub fn display_recipe(view: &RecipeDetailView) {
    let detail = &view.detail;
    println!("{} (#{})", detail.title, detail.id);
    println!("{}", "=".repeat(60));
    if let Some(minutes) = detail.ready_in_minutes {
        println!("Ready in {minutes} min");
    }
    if let Some(servings) = detail.servings {
        println!("Serves {servings}");
    }

    println!("\nNutrition:");
    for (name, value) in view.key_nutrients() {
        println!("   {name:<14} {value}");
    }

    println!("\nShopping list:");
    for ingredient in &view.shopping_list {
        let unit = if ingredient.unit.is_empty() {
            String::new()
        } else {
            format!(" {}", ingredient.unit)
        };
        println!("   {:.2}{unit} {}", ingredient.amount, ingredient.name);
    }

    println!("\nSteps:");
    if view.steps.is_empty() {
        println!("   No instructions available.");
    }
    for step in &view.steps {
        println!("   {}. {}", step.number, step.step);
    }
}

pub fn display_user(user: &UserInfo) {
    println!("Signed in as {} <{}>", user.name, user.email);
}

pub fn display_saved(saved: &[SavedRecipe]) {
    if saved.is_empty() {
        println!("No saved recipes.");
        return;
    }
    for record in saved {
        let title = record
            .recipe_data
            .get("title")
            .and_then(|title| title.as_str())
            .unwrap_or("(untitled)");
        println!(
            "{:>8}  {title}  saved {}",
            record.recipe_id,
            record.created_at.format("%Y-%m-%d %H:%M UTC")
        );
    }
}

pub fn display_reviews(reviews: &[Review], has_more: bool) {
    if reviews.is_empty() {
        println!("No reviews yet.");
        return;
    }
    for review in reviews {
        let stars = "*".repeat(usize::from(review.rating));
        println!(
            "{stars:<5}  {}  ({})",
            review.author,
            review.created_at.format("%Y-%m-%d")
        );
        println!("       {}", review.comment);
    }
    if has_more {
        println!("\nMore reviews available; use --offset to page.");
    }
}
