// ABOUTME: Account commands for recipebook-cli
// ABOUTME: Register, login, logout and whoami against the backend with a persisted token
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

use anyhow::Result;
use recipebook_server::routes::{LoginRequest, RegisterRequest};
use tracing::info;

use super::CliContext;
use crate::helpers::credentials::StoredCredentials;
use crate::helpers::display::display_user;

pub async fn register(
    context: &CliContext,
    name: String,
    email: String,
    password: String,
) -> Result<()> {
    let request = RegisterRequest {
        name,
        email,
        password,
    };
    let response = context.backend()?.register(&request).await?;
    let credentials = StoredCredentials::from(response);
    context.store.save(&credentials)?;

    println!("Account created.");
    display_user(&credentials.user);
    Ok(())
}

pub async fn login(context: &CliContext, email: String, password: String) -> Result<()> {
    let response = context
        .backend()?
        .login(&LoginRequest { email, password })
        .await?;
    let credentials = StoredCredentials::from(response);
    context.store.save(&credentials)?;
    info!(path = %context.store.path().display(), "Token stored");

    display_user(&credentials.user);
    println!("Token valid until {}", credentials.expires_at);
    Ok(())
}

/// Forget the stored token; the backend keeps no session to end
pub fn logout(context: &CliContext) -> Result<()> {
    if context.store.clear()? {
        println!("Signed out.");
    } else {
        println!("Not signed in.");
    }
    Ok(())
}

pub async fn whoami(context: &CliContext) -> Result<()> {
    let backend = context.backend()?;
    if backend.token().is_none() {
        println!("Not signed in.");
        return Ok(());
    }

    match backend.me().await {
        Ok(response) => {
            display_user(&response.user);
            Ok(())
        }
        Err(e) if e.code.is_auth() => {
            context.store.clear()?;
            println!("Stored token is no longer valid; signed out.");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
