//! Reddit OAuth2 password-grant authentication.

use reqwest::Client;

use crate::api::types::TokenResponse;
use crate::config::AuthConfig;
use crate::error::{Error, Result};

/// Token endpoint on the unauthenticated host.
const TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";

/// Request an access token using the script-app password grant.
///
/// Credentials come straight from the loaded [`AuthConfig`] and are never
/// logged.
pub async fn request_access_token(client: &Client, auth: &AuthConfig) -> Result<String> {
    let response = client
        .post(TOKEN_URL)
        .basic_auth(&auth.client_id, Some(&auth.client_secret))
        .form(&[
            ("grant_type", "password"),
            ("username", auth.username.as_str()),
            ("password", auth.password.as_str()),
        ])
        .send()
        .await?;

    let status = response.status();
    if status == 429 {
        return Err(Error::RateLimited(60));
    }
    if !status.is_success() {
        return Err(Error::Authentication(format!(
            "Token request failed: HTTP {}",
            status
        )));
    }

    let token: TokenResponse = response.json().await?;

    if let Some(error) = token.error {
        return Err(Error::Authentication(format!(
            "Token request rejected: {}",
            error
        )));
    }

    token
        .access_token
        .ok_or_else(|| Error::Authentication("Token response carried no access_token".into()))
}
