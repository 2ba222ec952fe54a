/**
 * Mind Vault API Client
 *
 * Thin typed wrapper over `reqwest` with one method per server endpoint.
 * Protected calls require a token, attached as `Authorization: Bearer`.
 */

use std::path::{Path, PathBuf};

use reqwest::Client;
use thiserror::Error;
use uuid::Uuid;

use crate::backend::auth::handlers::types::SigninResponse;
use crate::backend::content::types::{ContentItem, CreateContentRequest};
use crate::backend::share::handlers::{BrainView, ShareResponse};

/// Errors surfaced by the API client
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or protocol failure
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with an error status
    #[error("server error ({status}): {message}")]
    Api { status: u16, message: String },

    /// A protected call was made without a stored token
    #[error("not signed in; run `mindvault signin` first")]
    NotAuthenticated,

    /// Token file could not be read or written
    #[error("token storage failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Typed client for the Mind Vault API
pub struct VaultClient {
    base_url: String,
    http: Client,
    token: Option<String>,
}

impl VaultClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
            token: None,
        }
    }

    /// Attach a session token for protected calls
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn bearer(&self) -> Result<&str, ClientError> {
        self.token.as_deref().ok_or(ClientError::NotAuthenticated)
    }

    /// Turn a non-success response into `ClientError::Api`, extracting the
    /// server's `error` field when present
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.json::<serde_json::Value>().await {
            Ok(body) => body
                .get("error")
                .and_then(|e| e.as_str())
                .unwrap_or("unknown error")
                .to_string(),
            Err(_) => status.to_string(),
        };

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    /// Register a new account
    pub async fn signup(&self, username: &str, password: &str) -> Result<(), ClientError> {
        let response = self
            .http
            .post(self.url("/api/v1/signup"))
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Sign in and return the session token
    pub async fn signin(&self, username: &str, password: &str) -> Result<String, ClientError> {
        let response = self
            .http
            .post(self.url("/api/v1/signin"))
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await?;
        let body: SigninResponse = Self::check(response).await?.json().await?;
        Ok(body.token)
    }

    /// Create a content record
    pub async fn create_content(&self, request: &CreateContentRequest) -> Result<(), ClientError> {
        let response = self
            .http
            .post(self.url("/api/v1/content"))
            .bearer_auth(self.bearer()?)
            .json(request)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// List the caller's content
    pub async fn list_content(&self) -> Result<Vec<ContentItem>, ClientError> {
        let response = self
            .http
            .get(self.url("/api/v1/content"))
            .bearer_auth(self.bearer()?)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// Delete one of the caller's records
    pub async fn delete_content(&self, id: Uuid) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/api/v1/content/{}", id)))
            .bearer_auth(self.bearer()?)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Enable or disable sharing; returns the share URL when enabling
    pub async fn set_sharing(&self, share: bool) -> Result<Option<String>, ClientError> {
        let response = self
            .http
            .post(self.url("/api/v1/brain/share"))
            .bearer_auth(self.bearer()?)
            .json(&serde_json::json!({ "share": share }))
            .send()
            .await?;
        let body: ShareResponse = Self::check(response).await?.json().await?;
        Ok(body.share_link)
    }

    /// Fetch a shared collection by its opaque token (no auth required)
    pub async fn view_brain(&self, token: &str) -> Result<BrainView, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/api/v1/brain/{}", token)))
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }
}

/// Default location of the stored session token
pub fn default_token_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".mindvault").join("token"))
}

/// Persist the session token
pub fn write_token_file(path: &Path, token: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, token)
}

/// Read the stored session token, if any
pub fn read_token_file(path: &Path) -> Option<String> {
    std::fs::read_to_string(path)
        .ok()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".mindvault").join("token");

        assert_eq!(read_token_file(&path), None);

        write_token_file(&path, "abc123\n").unwrap();
        assert_eq!(read_token_file(&path), Some("abc123".to_string()));
    }

    #[test]
    fn test_empty_token_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        write_token_file(&path, "  \n").unwrap();
        assert_eq!(read_token_file(&path), None);
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = VaultClient::new("http://localhost:3000/");
        assert_eq!(client.url("/api/v1/content"), "http://localhost:3000/api/v1/content");
    }
}
