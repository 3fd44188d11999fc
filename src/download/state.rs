//! Per-run statistics.

use crate::download::fetcher::DownloadOutcome;

/// Mutable counters for one invocation.
///
/// Owned by the fetch-retry loop, fed by downloader results, reported at
/// the end of the run, never persisted.
#[derive(Debug, Default)]
pub struct RunStats {
    /// Media files written to disk.
    pub media_saved: u64,

    /// Media skipped: already present, or a failed transfer left for a
    /// later pass.
    pub media_skipped: u64,

    /// Posts handed to the processor across all passes.
    pub posts_seen: u64,

    /// Passes actually started.
    pub passes_attempted: u32,

    /// Passes the run was configured for.
    pub passes_allowed: u32,
}

impl RunStats {
    /// Fresh stats for a run configured with the given pass count.
    pub fn new(passes_allowed: u32) -> Self {
        Self {
            passes_allowed,
            ..Default::default()
        }
    }

    /// Fold a downloader result into the counters. Returns true when the
    /// result saved a new file.
    pub fn record(&mut self, outcome: &DownloadOutcome) -> bool {
        match outcome {
            DownloadOutcome::Saved { .. } => {
                self.media_saved += 1;
                true
            }
            DownloadOutcome::SkippedExisting | DownloadOutcome::Failed { .. } => {
                self.media_skipped += 1;
                false
            }
        }
    }
}
