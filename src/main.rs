//! Reddit Saved Downloader - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use reddit_saved_downloader::{
    api::RedditApi,
    cli::Args,
    config::{validate_auth, AuthConfig, FiletypeSet},
    download::{run_passes, RunStats},
    error::{exit_codes, Error, Result},
    output::{print_banner, print_config_summary, print_error, print_info, print_run_stats},
    resolve::ResolverRegistry,
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_) | Error::ConfigValidation { .. } | Error::MissingConfig(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::Authentication(_) | Error::Api(_) | Error::RateLimited(_) => {
                    ExitCode::from(exit_codes::API_ERROR as u8)
                }
                Error::Download(_) | Error::Http(_) => {
                    ExitCode::from(exit_codes::DOWNLOAD_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Print banner
    print_banner();

    // Load and validate credentials (fatal before any network activity)
    let auth = AuthConfig::load(&args.authfile)?;
    validate_auth(&auth)?;

    // Load the allowed filetype set
    let filetypes = match &args.filetypes {
        Some(path) => FiletypeSet::load(path)?,
        None => FiletypeSet::default(),
    };

    let opts = args.run_options();

    print_config_summary(
        &auth.username,
        &opts.dest_dir.display().to_string(),
        &opts.nsfw.to_string(),
        opts.subreddit.as_deref(),
    );

    // Authenticate against the listing API
    print_info("Connecting to Reddit...");
    let api = RedditApi::new(&auth).await?;
    print_info(&format!("Logged in as: {}", api.username()));

    let registry = ResolverRegistry::with_defaults();
    let mut stats = RunStats::new(opts.passes);

    // A fatal mid-pass error still reports what was accumulated so far.
    let result = run_passes(&api, &registry, &filetypes, &opts, &mut stats).await;
    print_run_stats(&stats);

    result
}
