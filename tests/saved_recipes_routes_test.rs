// ABOUTME: Integration tests for the saved recipe routes
// ABOUTME: Covers auth requirements, duplicate saves, per-user isolation, ordering and deletion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};

use common::{create_test_app, create_test_user_with_token, send_json};

fn save_body(recipe_id: u64, title: &str) -> Value {
    json!({"recipe_id": recipe_id, "recipe_data": {"id": recipe_id, "title": title}})
}

#[tokio::test]
async fn test_save_requires_authentication() {
    let (app, _resources) = create_test_app().await.unwrap();

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/recipes/save",
        None,
        Some(save_body(716_429, "Pasta")),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "AUTH_REQUIRED");

    let (status, _) = send_json(&app, Method::GET, "/api/recipes/saved", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_duplicate_save_conflicts_and_keeps_one_record() {
    let (app, resources) = create_test_app().await.unwrap();
    let (_user, token) = create_test_user_with_token(&resources, "Ada", "ada@example.com")
        .await
        .unwrap();

    let (status, saved) = send_json(
        &app,
        Method::POST,
        "/api/recipes/save",
        Some(&token),
        Some(save_body(716_429, "Pasta")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(saved["recipe_id"], 716_429);
    assert_eq!(saved["recipe_data"]["title"], "Pasta");

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/recipes/save",
        Some(&token),
        Some(save_body(716_429, "Pasta again")),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "RESOURCE_ALREADY_EXISTS");

    let (status, list) =
        send_json(&app, Method::GET, "/api/recipes/saved", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["count"], 1);
    assert_eq!(list["saved_recipes"][0]["recipe_data"]["title"], "Pasta");
}

#[tokio::test]
async fn test_same_recipe_saved_by_two_users() {
    let (app, resources) = create_test_app().await.unwrap();
    let (_ada, ada_token) = create_test_user_with_token(&resources, "Ada", "ada@example.com")
        .await
        .unwrap();
    let (_bob, bob_token) = create_test_user_with_token(&resources, "Bob", "bob@example.com")
        .await
        .unwrap();

    for token in [&ada_token, &bob_token] {
        let (status, _) = send_json(
            &app,
            Method::POST,
            "/api/recipes/save",
            Some(token),
            Some(save_body(42, "Soup")),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, list) =
        send_json(&app, Method::GET, "/api/recipes/saved", Some(&bob_token), None).await;
    assert_eq!(list["count"], 1);
}

#[tokio::test]
async fn test_list_is_newest_first() {
    let (app, resources) = create_test_app().await.unwrap();
    let (_user, token) = create_test_user_with_token(&resources, "Ada", "ada@example.com")
        .await
        .unwrap();

    for (id, title) in [(1, "First"), (2, "Second"), (3, "Third")] {
        send_json(
            &app,
            Method::POST,
            "/api/recipes/save",
            Some(&token),
            Some(save_body(id, title)),
        )
        .await;
    }

    let (_, list) = send_json(&app, Method::GET, "/api/recipes/saved", Some(&token), None).await;
    let ids: Vec<u64> = list["saved_recipes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|record| record["recipe_id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![3, 2, 1]);
}

#[tokio::test]
async fn test_unsave() {
    let (app, resources) = create_test_app().await.unwrap();
    let (_user, token) = create_test_user_with_token(&resources, "Ada", "ada@example.com")
        .await
        .unwrap();
    send_json(
        &app,
        Method::POST,
        "/api/recipes/save",
        Some(&token),
        Some(save_body(7, "Salad")),
    )
    .await;

    let (status, body) =
        send_json(&app, Method::DELETE, "/api/recipes/save/7", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (status, body) =
        send_json(&app, Method::DELETE, "/api/recipes/save/7", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");

    let (status, _) =
        send_json(&app, Method::DELETE, "/api/recipes/save/abc", Some(&token), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_save_validation() {
    let (app, resources) = create_test_app().await.unwrap();
    let (_user, token) = create_test_user_with_token(&resources, "Ada", "ada@example.com")
        .await
        .unwrap();

    for payload in [
        json!({"recipe_id": 0, "recipe_data": {"title": "Zero"}}),
        json!({"recipe_id": 5, "recipe_data": null}),
        json!({"recipe_data": {"title": "No id"}}),
    ] {
        let (status, body) = send_json(
            &app,
            Method::POST,
            "/api/recipes/save",
            Some(&token),
            Some(payload),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
    }
}
