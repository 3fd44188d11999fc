//! Fetch-retry loop over the saved listing.

use std::time::Duration;

use rand::Rng;
use tokio::time::sleep;

use crate::api::RedditApi;
use crate::config::FiletypeSet;
use crate::download::options::RunOptions;
use crate::download::processor::process_post;
use crate::download::state::RunStats;
use crate::error::Result;
use crate::resolve::ResolverRegistry;

/// Run the configured number of fetch passes.
///
/// Each pass lists the saved posts and hands every one to the processor;
/// a later pass picks up transfers that failed earlier, while anything
/// already on disk is skipped by the downloader. Stats live in the
/// caller so a fatal mid-pass error still leaves them reportable.
pub async fn run_passes(
    api: &RedditApi,
    registry: &ResolverRegistry,
    filetypes: &FiletypeSet,
    opts: &RunOptions,
    stats: &mut RunStats,
) -> Result<()> {
    for pass in 1..=opts.passes {
        stats.passes_attempted += 1;
        tracing::debug!("Pass {}/{}: fetching saved posts", pass, opts.passes);

        let posts = api.get_saved(opts.limit).await?;
        tracing::info!("Pass {}/{}: {} saved post(s)", pass, opts.passes, posts.len());

        for post in &posts {
            process_post(api, registry, filetypes, opts, stats, post).await;

            // Rate limiting delay between posts
            let delay_ms = rand::thread_rng().gen_range(400..750);
            sleep(Duration::from_millis(delay_ms)).await;
        }

        tracing::debug!(
            "Pass {}/{} complete: {} saved, {} skipped so far",
            pass,
            opts.passes,
            stats.media_saved,
            stats.media_skipped
        );
    }

    Ok(())
}
