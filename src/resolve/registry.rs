//! Domain resolver registry.
//!
//! Extensionless URLs are dispatched to a resolver keyed by the URL's
//! registrable domain. Each resolver may fetch a page to discover the
//! concrete media location; only discovered URLs that classify as accepted
//! are emitted. An unknown domain is not an error, just "no media found".

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::config::FiletypeSet;
use crate::error::Result;
use crate::resolve::classify::MediaUrl;
use crate::resolve::imgur::ImgurResolver;
use crate::resolve::redgifs::RedgifsResolver;

/// A site-specific resolver from a page URL to concrete media URLs.
#[async_trait]
pub trait DomainResolver: Send + Sync {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Resolve a page URL to zero or more downloadable media URLs.
    async fn resolve(
        &self,
        http: &Client,
        url: &str,
        filetypes: &FiletypeSet,
    ) -> Result<Vec<MediaUrl>>;
}

/// Registry of domain resolvers keyed by registrable domain.
pub struct ResolverRegistry {
    resolvers: HashMap<String, Box<dyn DomainResolver>>,
}

impl ResolverRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            resolvers: HashMap::new(),
        }
    }

    /// Create a registry with the built-in resolvers registered.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("redgifs", Box::new(RedgifsResolver));
        registry.register("imgur", Box::new(ImgurResolver));
        registry
    }

    /// Register a resolver for a registrable domain.
    pub fn register(&mut self, domain: &str, resolver: Box<dyn DomainResolver>) {
        tracing::debug!("Registering resolver '{}' for domain '{}'", resolver.name(), domain);
        self.resolvers.insert(domain.to_string(), resolver);
    }

    /// Number of registered resolvers.
    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    /// True when no resolvers are registered.
    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }

    /// Resolve a URL through the resolver registered for its domain.
    ///
    /// A malformed host or unregistered domain yields an empty result with
    /// a diagnostic; a resolver failure is logged and also yields an empty
    /// result. The run always continues.
    pub async fn resolve(
        &self,
        http: &Client,
        url: &str,
        filetypes: &FiletypeSet,
    ) -> Vec<MediaUrl> {
        let Some(domain) = registrable_domain(url) else {
            tracing::debug!("No registrable domain in URL: {}", url);
            return Vec::new();
        };

        let Some(resolver) = self.resolvers.get(&domain) else {
            tracing::debug!("No resolver registered for domain '{}': {}", domain, url);
            return Vec::new();
        };

        match resolver.resolve(http, url, filetypes).await {
            Ok(media) => {
                tracing::debug!(
                    "Resolver '{}' found {} media URL(s) for {}",
                    resolver.name(),
                    media.len(),
                    url
                );
                media
            }
            Err(e) => {
                tracing::warn!("Resolver '{}' failed for {}: {}", resolver.name(), url, e);
                Vec::new()
            }
        }
    }
}

impl Default for ResolverRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Extract the registrable domain: the second-level label of the host
/// (`www.redgifs.com` -> `redgifs`).
pub fn registrable_domain(raw_url: &str) -> Option<String> {
    let parsed = Url::parse(raw_url).ok()?;
    let host = parsed.host_str()?;

    let labels: Vec<&str> = host.split('.').filter(|l| !l.is_empty()).collect();
    match labels.len() {
        0 => None,
        1 => Some(labels[0].to_string()),
        n => Some(labels[n - 2].to_string()),
    }
}
