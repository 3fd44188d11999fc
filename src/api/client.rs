//! Reddit API HTTP client.

use std::time::Duration;

use rand::Rng;
use reqwest::{header, Client, Response};
use tokio::time::sleep;

use crate::api::auth::request_access_token;
use crate::api::types::{Listing, SavedPost, SUBMISSION_KIND};
use crate::config::AuthConfig;
use crate::error::{Error, Result};

/// Authenticated API base URL.
const API_BASE: &str = "https://oauth.reddit.com";

/// Maximum items per listing page.
const PAGE_SIZE: u64 = 100;

/// Per-request timeout. The upstream has no SLA; a hanging transfer must
/// not stall the whole run.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Reddit API client with OAuth token management.
pub struct RedditApi {
    client: Client,
    token: String,
    username: String,
}

impl RedditApi {
    /// Create a new API client and authenticate.
    pub async fn new(auth: &AuthConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&auth.user_agent)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        let token = request_access_token(&client, auth).await?;

        Ok(Self {
            client,
            token,
            username: auth.username.clone(),
        })
    }

    /// The authenticated account's username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Shared HTTP client, for media transfers outside the API host.
    pub fn http(&self) -> &Client {
        &self.client
    }

    /// Make an authenticated GET request against the API host.
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Response> {
        let url = format!("{}{}", API_BASE, path);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .query(query)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if status == 429 {
            return Err(Error::RateLimited(60));
        }

        if status == 401 || status == 403 {
            return Err(Error::Authentication(format!("HTTP {}", status)));
        }

        if !status.is_success() {
            return Err(Error::Api(format!("HTTP {}", status)));
        }

        Ok(response)
    }

    /// List the account's saved submissions, optionally capped.
    ///
    /// Pages through the listing with the `after` cursor until the cap is
    /// reached or the listing is exhausted. Comments mixed into the saved
    /// listing are dropped here; callers only see submissions.
    pub async fn get_saved(&self, limit: Option<u64>) -> Result<Vec<SavedPost>> {
        let mut posts = Vec::new();
        let mut after: Option<String> = None;

        loop {
            let remaining = match limit {
                Some(cap) => {
                    let got = posts.len() as u64;
                    if got >= cap {
                        break;
                    }
                    (cap - got).min(PAGE_SIZE)
                }
                None => PAGE_SIZE,
            };

            let mut query = vec![
                ("limit", remaining.to_string()),
                ("raw_json", "1".to_string()),
            ];
            if let Some(cursor) = &after {
                query.push(("after", cursor.clone()));
            }

            let path = format!("/user/{}/saved", self.username);
            let response = self.get(&path, &query).await?;
            let text = response.text().await?;

            let listing: Listing = serde_json::from_str(&text).map_err(|e| {
                Error::Api(format!(
                    "Failed to parse saved listing: {} - Response: {}",
                    e,
                    snippet(&text)
                ))
            })?;

            let page_len = listing.data.children.len();
            for thing in listing.data.children {
                if thing.kind == SUBMISSION_KIND {
                    posts.push(thing.data);
                }
            }

            after = listing.data.after;
            if after.is_none() || page_len == 0 {
                break;
            }

            // Rate limiting delay between pages
            let delay_ms = rand::thread_rng().gen_range(400..750);
            sleep(Duration::from_millis(delay_ms)).await;
        }

        if let Some(cap) = limit {
            posts.truncate(cap as usize);
        }

        Ok(posts)
    }

    /// Unsave a post by fullname (e.g. `t3_1abc2d`). Idempotent upstream.
    pub async fn unsave(&self, fullname: &str) -> Result<()> {
        let url = format!("{}/api/unsave", API_BASE);
        tracing::debug!("POST {} id={}", url, fullname);

        let response = self
            .client
            .post(&url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
            .form(&[("id", fullname)])
            .send()
            .await?;

        let status = response.status();
        if status == 429 {
            return Err(Error::RateLimited(60));
        }
        if !status.is_success() {
            return Err(Error::Api(format!("Unsave failed: HTTP {}", status)));
        }

        Ok(())
    }
}

/// First 500 characters of a response body for error messages, cut on a
/// character boundary.
fn snippet(text: &str) -> &str {
    match text.char_indices().nth(500) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
