//! Redgifs watch-page resolver.

use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;

use crate::config::FiletypeSet;
use crate::error::{Error, Result};
use crate::resolve::classify::{classify, MediaUrl, Resolution};
use crate::resolve::registry::DomainResolver;

/// Resolves a redgifs watch/embed page to its canonical video URL by
/// reading the `og:video` meta tag.
pub struct RedgifsResolver;

#[async_trait]
impl DomainResolver for RedgifsResolver {
    fn name(&self) -> &'static str {
        "redgifs"
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
                "Redgifs page fetch failed: HTTP {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        Ok(extract_video_urls(&body, filetypes))
    }
}

/// Pull the `og:video` content out of page HTML and keep it only if it
/// classifies as an allowed media URL.
fn extract_video_urls(body: &str, filetypes: &FiletypeSet) -> Vec<MediaUrl> {
    let pattern = Regex::new(r#"<meta\s+property="og:video"\s+content="([^"]+)""#).unwrap();

    let mut media = Vec::new();
    for captures in pattern.captures_iter(body) {
        let discovered = &captures[1];
        match classify(discovered, filetypes) {
            Resolution::Accepted(m) => media.push(m),
            other => {
                tracing::debug!("Discovered URL did not classify as media: {} ({:?})", discovered, other);
            }
        }
    }
    media
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filetypes_with_mp4() -> FiletypeSet {
        FiletypeSet {
            allowed_filetypes: vec![".mp4".to_string(), ".gif".to_string()],
        }
    }

    #[test]
    fn test_extract_og_video() {
        let body = r#"<html><head>
            <meta property="og:title" content="something" />
            <meta property="og:video" content="https://media.redgifs.example/Wiggle.mp4" />
        </head></html>"#;

        let media = extract_video_urls(body, &filetypes_with_mp4());
        assert_eq!(media.len(), 1);
        assert_eq!(media[0].filename, "Wiggle.mp4");
    }

    #[test]
    fn test_discovered_url_must_reclassify() {
        // .mp4 not in the default set, so the discovered URL is dropped.
        let body = r#"<meta property="og:video" content="https://media.redgifs.example/Wiggle.mp4""#;
        let media = extract_video_urls(body, &FiletypeSet::default());
        assert!(media.is_empty());
    }

    #[test]
    fn test_page_without_meta_tag() {
        let media = extract_video_urls("<html></html>", &filetypes_with_mp4());
        assert!(media.is_empty());
    }
}
