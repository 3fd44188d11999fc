//! Per-post processing: filter, classify, resolve, download.

use crate::api::{RedditApi, SavedPost};
use crate::config::FiletypeSet;
use crate::download::fetcher::{fetch, DownloadOutcome};
use crate::download::options::RunOptions;
use crate::download::state::RunStats;
use crate::resolve::{classify, is_gallery_url, resolve_gallery, Resolution, ResolverRegistry};

/// Process one saved post. Returns true when at least one media file was
/// saved; when true and unsaving was requested, the post is unsaved.
///
/// Every failure below the filters is caught and logged here; a bad post
/// never aborts the pass.
pub async fn process_post(
    api: &RedditApi,
    registry: &ResolverRegistry,
    filetypes: &FiletypeSet,
    opts: &RunOptions,
    stats: &mut RunStats,
    post: &SavedPost,
) -> bool {
    stats.posts_seen += 1;

    if !passes_filters(post, opts) {
        return false;
    }

    let processed = match classify(&post.url, filetypes) {
        Resolution::Accepted(media) => {
            if opts.verbose {
                tracing::info!("{} : {}", media.url, media.filename);
            }
            let outcome = fetch(api.http(), &media.url, &opts.dest_dir).await;
            log_outcome(&media.url, &outcome);
            stats.record(&outcome)
        }
        Resolution::Deferred => {
            let urls: Vec<String> = if is_gallery_url(&post.url) {
                resolve_gallery(post)
            } else {
                registry
                    .resolve(api.http(), &post.url, filetypes)
                    .await
                    .into_iter()
                    .map(|m| m.url)
                    .collect()
            };

            if urls.is_empty() {
                tracing::debug!("No media found for post {} ({})", post.id, post.url);
            }

            let mut any_saved = false;
            for url in urls {
                if opts.verbose {
                    tracing::info!("{} (via {})", url, post.url);
                }
                let outcome = fetch(api.http(), &url, &opts.dest_dir).await;
                log_outcome(&url, &outcome);
                if stats.record(&outcome) {
                    any_saved = true;
                }
            }
            any_saved
        }
        Resolution::Rejected(reason) => {
            tracing::debug!("Skipping post {}: {}", post.id, reason);
            false
        }
    };

    if processed && opts.unsave {
        match api.unsave(&post.name).await {
            Ok(()) => tracing::debug!("Unsaved post {}", post.name),
            Err(e) => tracing::warn!("Failed to unsave post {}: {}", post.name, e),
        }
    }

    processed
}

/// Pre-classification filters, first match wins: NSFW mode, self posts,
/// then the optional subreddit filter.
fn passes_filters(post: &SavedPost, opts: &RunOptions) -> bool {
    if !opts.nsfw.allows(post.over_18) {
        tracing::debug!("Dropping post {} (nsfw mode {})", post.id, opts.nsfw);
        return false;
    }

    // Self posts carry no external link.
    if post.is_self {
        tracing::debug!("Dropping self post {}", post.id);
        return false;
    }

    if let Some(wanted) = &opts.subreddit {
        if !post.subreddit.eq_ignore_ascii_case(wanted) {
            tracing::debug!(
                "Dropping post {} (subreddit {} != {})",
                post.id,
                post.subreddit,
                wanted
            );
            return false;
        }
    }

    true
}

fn log_outcome(url: &str, outcome: &DownloadOutcome) {
    match outcome {
        DownloadOutcome::Saved { bytes } => {
            tracing::info!("Downloaded {} ({} bytes)", url, bytes);
        }
        DownloadOutcome::SkippedExisting => {
            tracing::debug!("Skipping existing file for {}", url);
        }
        DownloadOutcome::Failed { reason } => {
            tracing::warn!("Download failed for {}: {}", url, reason);
        }
    }
}
