// ABOUTME: End-to-end tests for the backend REST client against a live in-process server
// ABOUTME: Exercises every endpoint and checks that server error codes survive the round trip
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use recipebook_server::{
    client::BackendClient,
    errors::ErrorCode,
    models::{ReviewSubmission, SaveRecipeRequest},
    routes::{build_router, LoginRequest, RegisterRequest},
};
use serde_json::json;
use tokio::net::TcpListener;
use url::Url;

async fn start_server() -> BackendClient {
    let resources = common::create_test_resources().await.unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, build_router(resources)).await.unwrap();
    });
    BackendClient::new(&Url::parse(&format!("http://{address}")).unwrap())
}

fn registration() -> RegisterRequest {
    RegisterRequest {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        password: "secret1".into(),
    }
}

#[tokio::test]
async fn test_account_flow() {
    let anonymous = start_server().await;
    assert_eq!(anonymous.ready().await.unwrap().status, "ready");

    let registered = anonymous.register(&registration()).await.unwrap();
    assert_eq!(registered.user.name, "Ada");

    let error = anonymous.register(&registration()).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceAlreadyExists);

    let error = anonymous
        .login(&LoginRequest {
            email: "ada@example.com".into(),
            password: "wrong-password".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::AuthInvalid);

    let error = anonymous.me().await.unwrap_err();
    assert_eq!(error.code, ErrorCode::AuthRequired);
    assert!(error.context.request_id.is_some());

    let login = anonymous
        .login(&LoginRequest {
            email: "ada@example.com".into(),
            password: "secret1".into(),
        })
        .await
        .unwrap();
    let signed_in = anonymous.clone().with_token(login.token);
    assert_eq!(signed_in.me().await.unwrap().user.id, registered.user.id);
}

#[tokio::test]
async fn test_saved_recipes_flow() {
    let anonymous = start_server().await;
    let auth = anonymous.register(&registration()).await.unwrap();
    let client = anonymous.with_token(auth.token);

    let request = SaveRecipeRequest {
        recipe_id: 716_429,
        recipe_data: json!({"id": 716_429, "title": "Pasta"}),
    };
    let saved = client.save_recipe(&request).await.unwrap();
    assert_eq!(saved.recipe_id, 716_429);
    assert_eq!(saved.user_id, auth.user.id);

    let error = client.save_recipe(&request).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceAlreadyExists);

    let list = client.saved_recipes().await.unwrap();
    assert_eq!(list.count, 1);

    assert!(client.unsave_recipe(716_429).await.unwrap().success);
    let error = client.unsave_recipe(716_429).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    assert_eq!(client.saved_recipes().await.unwrap().count, 0);
}

#[tokio::test]
async fn test_reviews_flow() {
    let anonymous = start_server().await;
    let auth = anonymous.register(&registration()).await.unwrap();
    let signed_in = anonymous.clone().with_token(auth.token);

    let review = signed_in
        .submit_review(&ReviewSubmission {
            recipe_id: 42,
            rating: 5,
            comment: "Lovely".into(),
            user_name: None,
        })
        .await
        .unwrap();
    assert_eq!(review.author, "Ada");
    assert_eq!(review.user_id, Some(auth.user.id));

    let review = anonymous
        .submit_review(&ReviewSubmission {
            recipe_id: 42,
            rating: 3,
            comment: "Fine".into(),
            user_name: Some("Guest".into()),
        })
        .await
        .unwrap();
    assert_eq!(review.user_id, None);

    let error = anonymous
        .submit_review(&ReviewSubmission {
            recipe_id: 42,
            rating: 9,
            comment: "Too high".into(),
            user_name: None,
        })
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);

    let page = anonymous.reviews(42, Some(1), None).await.unwrap();
    assert_eq!(page.reviews.len(), 1);
    assert_eq!(page.reviews[0].author, "Ada");
    assert!(page.has_more);

    let page = anonymous.reviews(42, Some(1), Some(1)).await.unwrap();
    assert_eq!(page.reviews[0].author, "Guest");
    assert!(!page.has_more);

    let error = anonymous.reviews(42, Some(51), None).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
}
