//! Imgur album/page resolver.

use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;

use crate::config::FiletypeSet;
use crate::error::{Error, Result};
use crate::resolve::classify::{classify, MediaUrl, Resolution};
use crate::resolve::registry::DomainResolver;

/// Resolves an imgur album or page to the direct `i.imgur.com` image
/// links embedded in its HTML.
pub struct ImgurResolver;

#[async_trait]
impl DomainResolver for ImgurResolver {
    fn name(&self) -> &'static str {
        "imgur"
    }

    async fn resolve(
        &self,
        http: &Client,
        url: &str,
        filetypes: &FiletypeSet,
    ) -> Result<Vec<MediaUrl>> {
        let response = http.get(url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Api(format!(
                "Imgur page fetch failed: HTTP {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        Ok(extract_image_urls(&body, filetypes))
    }
}

/// Collect direct image links from page HTML, deduplicated in order of
/// first appearance, keeping only those that classify as allowed media.
fn extract_image_urls(body: &str, filetypes: &FiletypeSet) -> Vec<MediaUrl> {
    let pattern = Regex::new(r"https://i\.imgur\.com/[A-Za-z0-9]+\.[A-Za-z0-9]+").unwrap();

    let mut seen = std::collections::HashSet::new();
    let mut media = Vec::new();

    for found in pattern.find_iter(body) {
        let discovered = found.as_str();
        if !seen.insert(discovered.to_string()) {
            continue;
        }

        match classify(discovered, filetypes) {
            Resolution::Accepted(m) => media.push(m),
            other => {
                tracing::debug!("Discovered URL did not classify as media: {} ({:?})", discovered, other);
            }
        }
    }

    media
}
