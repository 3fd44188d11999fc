//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     Reddit Saved Downloader                           ║
║     Fetch media from your saved posts                 ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print configuration summary.
pub fn print_config_summary(
    username: &str,
    download_dir: &str,
    nsfw_mode: &str,
    subreddit: Option<&str>,
) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  User: {}", username);
    println!("  Directory: {}", download_dir);
    println!("  NSFW mode: {}", nsfw_mode);
    if let Some(sub) = subreddit {
        println!("  Subreddit: {}", sub);
    }
    println!();
}
