//! Download pipeline.
//!
//! This module provides:
//! - Idempotent media fetching with size verification
//! - Per-post processing (filters, classification, resolution)
//! - The fetch-retry loop and its run statistics

pub mod fetcher;
pub mod options;
pub mod passes;
pub mod processor;
pub mod state;

pub use fetcher::{fetch, DownloadOutcome};
pub use options::RunOptions;
pub use passes::run_passes;
pub use processor::process_post;
pub use state::RunStats;
