// ABOUTME: Bearer token persistence for recipebook-cli
// ABOUTME: Stores the signed-in account as JSON under the user config directory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use recipebook_server::models::UserInfo;
use recipebook_server::routes::AuthResponse;
use serde::{Deserialize, Serialize};

const APP_DIR: &str = "recipebook";
const FILE_NAME: &str = "credentials.json";

/// Signed-in account as persisted between runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCredentials {
    /// Bearer token
    pub token: String,
    /// Token expiry (RFC 3339)
    pub expires_at: String,
    /// Account the token belongs to
    pub user: UserInfo,
}

impl From<AuthResponse> for StoredCredentials {
    fn from(response: AuthResponse) -> Self {
        Self {
            token: response.token,
            expires_at: response.expires_at,
            user: response.user,
        }
    }
}

/// File-backed credential store
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    /// Store at an explicit path
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store under the platform config directory
    pub fn default_location() -> Result<Self> {
        let dir = dirs::config_dir().ok_or_else(|| anyhow!("No config directory available"))?;
        Ok(Self::new(dir.join(APP_DIR).join(FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saved credentials, or `None` when signed out
    pub fn load(&self) -> Result<Option<StoredCredentials>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("Reading {}", self.path.display()));
            }
        };
        let credentials = serde_json::from_str(&raw)
            .with_context(|| format!("Corrupt credentials file {}", self.path.display()))?;
        Ok(Some(credentials))
    }

    pub fn save(&self, credentials: &StoredCredentials) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Creating {}", parent.display()))?;
        }
        let raw = serde_json::to_string_pretty(credentials)?;
        fs::write(&self.path, raw).with_context(|| format!("Writing {}", self.path.display()))
    }

    /// Delete the stored token; returns whether one existed
    pub fn clear(&self) -> Result<bool> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e).with_context(|| format!("Removing {}", self.path.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;

    fn sample() -> StoredCredentials {
        StoredCredentials {
            token: "token-value".into(),
            expires_at: "2030-01-01T00:00:00Z".into(),
            user: UserInfo {
                id: Uuid::new_v4(),
                name: "Ada".into(),
                email: "ada@example.com".into(),
                created_at: Utc::now(),
            },
        }
    }

    #[test]
    fn test_save_load_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::new(dir.path().join("nested").join(FILE_NAME));

        assert_eq!(store.load().unwrap(), None);
        let credentials = sample();
        store.save(&credentials).unwrap();
        assert_eq!(store.load().unwrap(), Some(credentials));

        assert!(store.clear().unwrap());
        assert!(!store.clear().unwrap());
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);
        fs::write(&path, "not json").unwrap();
        assert!(CredentialStore::new(path).load().is_err());
    }
}
