// ABOUTME: Integration tests for the review routes
// ABOUTME: Covers author resolution, validation, signed-in-first ordering and paging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};

use common::{create_test_app, create_test_user_with_token, send_json};

const RECIPE: u64 = 716_429;

async fn post_review(app: &axum::Router, token: Option<&str>, body: Value) -> (StatusCode, Value) {
    send_json(app, Method::POST, "/api/reviews", token, Some(body)).await
}

fn authors(page: &Value) -> Vec<String> {
    page["reviews"]
        .as_array()
        .unwrap()
        .iter()
        .map(|review| review["author"].as_str().unwrap().to_owned())
        .collect()
}

#[tokio::test]
async fn test_author_resolution() {
    let (app, resources) = create_test_app().await.unwrap();
    let (user, token) = create_test_user_with_token(&resources, "Ada", "ada@example.com")
        .await
        .unwrap();

    let (status, review) = post_review(
        &app,
        Some(&token),
        json!({"recipe_id": RECIPE, "rating": 5, "comment": "Great", "user_name": "Someone"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(review["author"], "Ada");
    assert_eq!(review["user_id"], user.id.to_string());

    let (_, review) = post_review(
        &app,
        None,
        json!({"recipe_id": RECIPE, "rating": 4, "comment": "Nice", "user_name": "  Bob  "}),
    )
    .await;
    assert_eq!(review["author"], "Bob");
    assert!(review.get("user_id").is_none());

    let (_, review) = post_review(
        &app,
        None,
        json!({"recipe_id": RECIPE, "rating": 3, "comment": "Fine", "user_name": "   "}),
    )
    .await;
    assert_eq!(review["author"], "Anonymous");

    // An unusable token falls back to an anonymous submission
    let (status, review) = post_review(
        &app,
        Some("garbage"),
        json!({"recipe_id": RECIPE, "rating": 2, "comment": "Meh"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(review["author"], "Anonymous");
}

#[tokio::test]
async fn test_review_validation() {
    let (app, _resources) = create_test_app().await.unwrap();

    for body in [
        json!({"recipe_id": RECIPE, "rating": 0, "comment": "Bad"}),
        json!({"recipe_id": RECIPE, "rating": 6, "comment": "Bad"}),
        json!({"recipe_id": RECIPE, "rating": 3, "comment": "   "}),
        json!({"recipe_id": RECIPE, "rating": 3, "comment": "x".repeat(501)}),
        json!({"recipe_id": 0, "rating": 3, "comment": "Zero"}),
        json!({"recipe_id": RECIPE, "rating": "five", "comment": "Typed"}),
    ] {
        let (status, response) = post_review(&app, None, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{response}");
    }

    let (status, _) = post_review(
        &app,
        None,
        json!({"recipe_id": RECIPE, "rating": 3, "comment": "x".repeat(500)}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_signed_in_reviews_come_first() {
    let (app, resources) = create_test_app().await.unwrap();
    let (_ada, ada_token) = create_test_user_with_token(&resources, "Ada", "ada@example.com")
        .await
        .unwrap();
    let (_bob, bob_token) = create_test_user_with_token(&resources, "Bob", "bob@example.com")
        .await
        .unwrap();

    post_review(
        &app,
        Some(&ada_token),
        json!({"recipe_id": RECIPE, "rating": 5, "comment": "From Ada"}),
    )
    .await;
    for i in 0..10 {
        post_review(
            &app,
            None,
            json!({"recipe_id": RECIPE, "rating": 3, "comment": "Anon", "user_name": format!("Guest {i}")}),
        )
        .await;
    }
    post_review(
        &app,
        Some(&bob_token),
        json!({"recipe_id": RECIPE, "rating": 4, "comment": "From Bob"}),
    )
    .await;

    let uri = format!("/api/reviews/{RECIPE}?limit=5");
    let (status, page) = send_json(&app, Method::GET, &uri, None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["limit"], 5);
    assert_eq!(page["offset"], 0);
    assert_eq!(page["has_more"], true);
    assert_eq!(
        authors(&page),
        vec!["Bob", "Ada", "Guest 9", "Guest 8", "Guest 7"]
    );

    let uri = format!("/api/reviews/{RECIPE}?limit=5&offset=5");
    let (_, page) = send_json(&app, Method::GET, &uri, None, None).await;
    assert_eq!(
        authors(&page),
        vec!["Guest 6", "Guest 5", "Guest 4", "Guest 3", "Guest 2"]
    );
    assert_eq!(page["has_more"], true);

    let uri = format!("/api/reviews/{RECIPE}?limit=5&offset=10");
    let (_, page) = send_json(&app, Method::GET, &uri, None, None).await;
    assert_eq!(authors(&page), vec!["Guest 1", "Guest 0"]);
    assert_eq!(page["has_more"], false);
}

#[tokio::test]
async fn test_list_defaults_and_limits() {
    let (app, _resources) = create_test_app().await.unwrap();
    for i in 0..6 {
        post_review(
            &app,
            None,
            json!({"recipe_id": RECIPE, "rating": 4, "comment": format!("Review {i}")}),
        )
        .await;
    }

    let uri = format!("/api/reviews/{RECIPE}");
    let (status, page) = send_json(&app, Method::GET, &uri, None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["limit"], 5);
    assert_eq!(page["reviews"].as_array().unwrap().len(), 5);
    assert_eq!(page["has_more"], true);

    for query in ["limit=0", "limit=51", "offset=-1", "limit=abc"] {
        let uri = format!("/api/reviews/{RECIPE}?{query}");
        let (status, body) = send_json(&app, Method::GET, &uri, None, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{query}: {body}");
    }

    let (_, page) = send_json(&app, Method::GET, "/api/reviews/999", None, None).await;
    assert_eq!(page["reviews"].as_array().unwrap().len(), 0);
    assert_eq!(page["has_more"], false);
}
