//! Reddit API collaborator.
//!
//! Thin client over the listing endpoints the core needs: OAuth token
//! acquisition, the saved-items listing, and unsave.

pub mod auth;
pub mod client;
pub mod types;

pub use client::RedditApi;
pub use types::{GalleryCandidate, GalleryEntry, SavedPost};
