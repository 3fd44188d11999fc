//! Statistics reporting.

use console::style;

use crate::download::RunStats;

/// Print the final run summary.
pub fn print_run_stats(stats: &RunStats) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Run summary:").bold());
    println!("  Posts processed: {}", stats.posts_seen);
    println!("  Media saved:     {}", style(stats.media_saved).green());
    println!("  Media skipped:   {}", style(stats.media_skipped).yellow());
    println!(
        "  Passes:          {} of {}",
        stats.passes_attempted, stats.passes_allowed
    );
    println!("{}", style("═".repeat(50)).dim());
}
