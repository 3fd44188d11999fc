//! Reddit Saved Downloader - fetch media from your saved Reddit posts.
//!
//! This library resolves saved posts into concrete media URLs, downloads
//! the bytes, and stores them flat in a local directory.
//!
//! # Features
//!
//! - Direct image/gif downloads by extension
//! - Gallery posts (highest-resolution rendition per image)
//! - Site resolvers for link posts (redgifs, imgur)
//! - NSFW filtering and subreddit filtering
//! - Idempotent downloads: repeated runs skip what is already on disk
//! - Repeated fetch passes to pick up transient failures
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use reddit_saved_downloader::{AuthConfig, RedditApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let auth = AuthConfig::load(Path::new("authentication.json"))?;
//!     let api = RedditApi::new(&auth).await?;
//!
//!     // ... download logic
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod output;
pub mod resolve;

// Re-exports for convenience
pub use api::RedditApi;
pub use config::{AuthConfig, FiletypeSet, NsfwMode};
pub use download::{run_passes, DownloadOutcome, RunOptions, RunStats};
pub use error::{Error, Result};
pub use resolve::{Resolution, ResolverRegistry};
