//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::NsfwMode;
use crate::download::RunOptions;

/// Reddit saved-posts media downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "reddit-saved-downloader",
    version,
    about = "Download media from your saved Reddit posts",
    long_about = "Fetches your saved Reddit posts, resolves each to downloadable media,\n\
                  and stores the files in a local directory. Already-downloaded files\n\
                  are skipped, so repeated runs only pick up what is missing."
)]
pub struct Args {
    /// Directory to save media files to.
    #[arg(short = 'd', long = "directory")]
    pub directory: PathBuf,

    /// Subreddit to filter on, optional.
    #[arg(short, long)]
    pub subreddit: Option<String>,

    /// Limit the number of saved posts fetched per pass.
    #[arg(short, long)]
    pub limit: Option<u64>,

    /// Number of fetch passes over the saved listing.
    #[arg(short, long, default_value_t = 1)]
    pub passes: u32,

    /// NSFW post handling.
    #[arg(long, value_enum, default_value_t = NsfwMode::None)]
    pub nsfw: NsfwMode,

    /// JSON file with Reddit authentication credentials.
    #[arg(short, long, default_value = "./authentication.json")]
    pub authfile: PathBuf,

    /// JSON file with the allowed filetype list.
    #[arg(short, long)]
    pub filetypes: Option<PathBuf>,

    /// Unsave posts whose media was downloaded.
    #[arg(short, long)]
    pub unsave: bool,

    /// Increase output verbosity.
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Build the pipeline's run options from the parsed arguments.
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            dest_dir: self.directory.clone(),
            nsfw: self.nsfw,
            subreddit: self.subreddit.clone(),
            limit: self.limit,
            passes: self.passes.max(1),
            unsave: self.unsave,
            verbose: self.verbose,
        }
    }
}
