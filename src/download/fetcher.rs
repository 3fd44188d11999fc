//! Idempotent media file downloading.

use std::path::Path;

use futures::{Stream, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;

/// Minimum declared size to show a progress bar (20 MB).
const PROGRESS_THRESHOLD: u64 = 20 * 1024 * 1024;

/// Per-URL download result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// The file was written to the destination directory.
    Saved { bytes: u64 },

    /// The destination path already exists; nothing was transferred.
    SkippedExisting,

    /// The transfer failed; safe to retry on a later pass unless the
    /// reason is a size mismatch, which leaves the file in place.
    Failed { reason: String },
}

/// How the body transfer ended, before mapping to a download outcome.
#[derive(Debug, PartialEq, Eq)]
enum BodyOutcome {
    /// All bytes arrived (or the length was unknown and the stream ended).
    Complete { bytes: u64 },

    /// The stream ended cleanly but short of the declared length.
    ShortBody { declared: u64, written: u64 },

    /// The transfer broke mid-stream; what was written is garbage.
    Interrupted { reason: String },
}

/// Derive the destination filename from a URL: the last path segment,
/// query string and fragment excluded.
pub fn url_basename(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let basename = parsed.path_segments()?.last()?;

    if basename.is_empty() {
        None
    } else {
        Some(basename.to_string())
    }
}

/// Fetch a media URL into the destination directory.
///
/// The destination path is written at most once per run: the path is
/// claimed with `create_new`, so when two callers race on the same path
/// exactly one performs the write and the other observes
/// `SkippedExisting`. Bytes are streamed to disk; when the server
/// declared a content length, the byte count is verified after the
/// transfer and a short write is reported as a size mismatch with the
/// partial file left in place. An interrupted transfer instead releases
/// the claimed path so a later pass can retry it.
pub async fn fetch(http: &Client, url: &str, dest_dir: &Path) -> DownloadOutcome {
    let Some(filename) = url_basename(url) else {
        return DownloadOutcome::Failed {
            reason: format!("no usable basename in URL: {}", url),
        };
    };

    let dest = dest_dir.join(&filename);

    // Cheap pre-check: no network spent on a file we already have.
    if dest.exists() {
        return DownloadOutcome::SkippedExisting;
    }

    if let Err(e) = tokio::fs::create_dir_all(dest_dir).await {
        return DownloadOutcome::Failed {
            reason: format!("cannot create destination directory: {}", e),
        };
    }

    let response = match http.get(url).send().await {
        Ok(r) => r,
        Err(e) => {
            return DownloadOutcome::Failed {
                reason: format!("request failed: {}", e),
            }
        }
    };

    if !response.status().is_success() {
        return DownloadOutcome::Failed {
            reason: format!("HTTP {}", response.status()),
        };
    }

    // Zero means the header was absent or useless; verification is off.
    let declared = response.content_length().unwrap_or(0);

    // Atomic claim of the destination path. Losing the race to another
    // writer is the same as the file already existing.
    let mut file = match OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&dest)
        .await
    {
        Ok(f) => f,
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            return DownloadOutcome::SkippedExisting;
        }
        Err(e) => {
            return DownloadOutcome::Failed {
                reason: format!("cannot create {}: {}", dest.display(), e),
            }
        }
    };

    let progress = if declared > PROGRESS_THRESHOLD {
        let pb = ProgressBar::new(declared);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let body = write_body(
        &mut file,
        declared,
        response.bytes_stream(),
        progress.as_ref(),
    )
    .await;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    finalize(body, url, &dest, file).await
}

/// Stream the body into the claimed file, verifying the byte count
/// against the declared length when known.
async fn write_body<S, C, E>(
    file: &mut File,
    declared: u64,
    mut stream: S,
    progress: Option<&ProgressBar>,
) -> BodyOutcome
where
    S: Stream<Item = std::result::Result<C, E>> + Unpin,
    C: AsRef<[u8]>,
    E: std::fmt::Display,
{
    let mut written: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = match chunk {
            Ok(c) => c,
            Err(e) => {
                return BodyOutcome::Interrupted {
                    reason: format!("stream error: {}", e),
                }
            }
        };

        let bytes = chunk.as_ref();
        if let Err(e) = file.write_all(bytes).await {
            return BodyOutcome::Interrupted {
                reason: format!("write error: {}", e),
            };
        }

        written += bytes.len() as u64;
        if let Some(pb) = progress {
            pb.set_position(written);
        }
    }

    if let Err(e) = file.flush().await {
        return BodyOutcome::Interrupted {
            reason: format!("flush error: {}", e),
        };
    }

    if declared != 0 && written != declared {
        return BodyOutcome::ShortBody { declared, written };
    }

    BodyOutcome::Complete { bytes: written }
}

/// Map the body transfer result onto the download outcome, settling the
/// fate of the claimed file: a short body stays on disk for inspection,
/// an interrupted transfer releases the path so a later pass can retry.
async fn finalize(body: BodyOutcome, url: &str, dest: &Path, file: File) -> DownloadOutcome {
    match body {
        BodyOutcome::Complete { bytes } => DownloadOutcome::Saved { bytes },
        BodyOutcome::ShortBody { declared, written } => {
            tracing::warn!(
                "Size mismatch for {}: declared {} bytes, wrote {}",
                url,
                declared,
                written
            );
            DownloadOutcome::Failed {
                reason: "size mismatch".to_string(),
            }
        }
        BodyOutcome::Interrupted { reason } => {
            drop(file);
            if let Err(e) = tokio::fs::remove_file(dest).await {
                tracing::warn!("Could not remove partial file {}: {}", dest.display(), e);
            }
            DownloadOutcome::Failed { reason }
        }
    }
}
