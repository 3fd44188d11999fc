//! Run options for the download pipeline.

use std::path::PathBuf;

use crate::config::NsfwMode;

/// Options controlling one run, assembled from the CLI.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Directory media files are written into (flat, no subdirectories).
    pub dest_dir: PathBuf,

    /// How adult-flagged posts are handled.
    pub nsfw: NsfwMode,

    /// When set, only posts from this subreddit are processed.
    pub subreddit: Option<String>,

    /// Cap on the number of saved posts fetched per pass.
    pub limit: Option<u64>,

    /// Number of fetch passes over the saved listing.
    pub passes: u32,

    /// Unsave posts whose media was saved.
    pub unsave: bool,

    /// Echo each download at info level.
    pub verbose: bool,
}
